//! # StudyPlatform - terminal front-end for an AI study assistant
//!
//! Hero landing screen, analytics dashboard, simulated document upload,
//! AI recommendations and a study library, built with Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`, `core::raw_msg`): Events that can change the state
//! - **Update** (`core::update`): Pure function that transforms state
//! - **Command** (`core::cmd`): Side effects (upload simulation, rendering, terminal)
//! - **View** (`presentation::components`): Rendering based on the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use studyplatform::{core::msg::nav::NavMsg, domain::section::Section, update, AppState, Msg};
//!
//! let state = AppState::default();
//! assert!(state.nav.is_hero());
//!
//! let (state, commands) = update(Msg::Nav(NavMsg::EnterPlatform), state);
//! assert_eq!(state.nav.active(), Section::Dashboard);
//! assert!(!commands.is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
