//! Core module - Shared infrastructure for all commands
//!
//! This module provides:
//! - The catalog error taxonomy
//! - Diagnostics (tracing subscriber) setup
//! - Rendering functions for different output formats

pub mod error;
pub mod logging;
pub mod render;
