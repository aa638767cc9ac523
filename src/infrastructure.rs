//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The simulated upload pipeline

pub mod cli;
pub mod config;
pub mod tui;
pub mod upload_service;
