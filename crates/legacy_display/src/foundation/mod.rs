//! Foundation module - Core utilities
//!
//! - Frame pacing for `sync(fps)`
//! - Logging setup

pub mod logging;
pub mod time;
