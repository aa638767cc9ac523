//! Reusable UI widgets
//!
//! This module contains the widgets the panel components compose:
//! badges, stat cards, the drop zone, upload items and content cards.

pub mod badge;
pub mod cards;
pub mod drop_zone;
pub mod stat_card;
pub mod upload_item;

use ratatui::style::Color;
use std::str::FromStr;

/// Color of a catalog entry (`#rrggbb`); unparsable values fall back to the terminal default
pub fn catalog_color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::Reset)
}
