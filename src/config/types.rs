//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and for constructing the library-level [`AuditConfig`].

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_USER_AGENT, REQUEST_TIMEOUT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Command-line options for the audit binary.
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    about = "Fetches a web page and scores its on-page SEO signals into an audit report."
)]
pub struct Opt {
    /// Target URL (https:// is assumed when no scheme is given)
    pub url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Write the full report as JSON (to --output, or `<host>_seo_audit.json`)
    #[arg(long)]
    pub json: bool,

    /// Output path for the JSON report (implies --json)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use seo_audit::config::AuditConfig;
/// use std::time::Duration;
///
/// let config = AuditConfig {
///     timeout: Duration::from_secs(15),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Per-request timeout (primary fetch and each auxiliary probe)
    pub timeout: Duration,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&Opt> for AuditConfig {
    fn from(opt: &Opt) -> Self {
        Self {
            timeout: Duration::from_secs(opt.timeout),
            user_agent: opt.user_agent.clone(),
        }
    }
}
