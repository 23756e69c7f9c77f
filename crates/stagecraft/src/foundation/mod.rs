//! Foundation module - core utilities
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Frame timing
//! - Cooperative cancellation
//! - Logging setup

pub mod cancel;
pub mod logging;
pub mod time;
