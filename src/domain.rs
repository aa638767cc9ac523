//! Domain logic
//!
//! This module contains the study-platform vocabulary:
//! - Panel sections and navigation
//! - Static catalog data rendered by the panels
//! - Upload records and their simulated lifecycle
//! - File selection parsing and text helpers

pub mod catalog;
pub mod section;
pub mod selection;
pub mod text;
pub mod upload;
