//! Presentation layer
//!
//! Panels are stateless components drawn from `AppState`; widgets are the
//! cards, badges and gauges they are built from.

pub mod components;
pub mod config;
pub mod widgets;
