//! Application configuration and constants.
//!
//! This module provides:
//! - Fixed design constants (timeouts, verdict thresholds, probe paths)
//! - CLI option types and parsing
//! - The library-level [`AuditConfig`]

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{AuditConfig, LogLevel, Opt};
