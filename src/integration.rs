//! Integration layer
//!
//! Glue between the pure Elm core and the outside world:
//! - Runtime: message queues around `update`
//! - AppRunner: the main loop over terminal events and service messages
//! - Coalescing of render requests and resizes

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
pub mod update_executor;
