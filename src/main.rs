//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting (terminal summary, optional JSON report)
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use seo_audit::config::{AuditConfig, Opt};
use seo_audit::{run_audit, AuditClient, AuditReport, Verdict};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present (future elaborator
    // configuration lives there). Try the working directory first, then
    // next to the executable.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let opt = Opt::parse();

    env_logger::Builder::new()
        .filter_level(opt.log_level.clone().into())
        .init();

    let config = AuditConfig::from(&opt);
    let client = AuditClient::new(&config).context("Failed to build HTTP client")?;

    match run_audit(&opt.url, &client, None).await {
        Ok(report) => {
            print_summary(&report);
            if opt.json || opt.output.is_some() {
                let path = write_json_report(&report, opt.output)?;
                println!("\nReport saved to {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_audit error: {e}");
            process::exit(1);
        }
    }
}

fn print_summary(report: &AuditReport) {
    println!(
        "Audit of {} (status {}{})",
        report.final_url,
        report.status_code,
        if report.was_redirected {
            format!(", redirected from {}", report.requested_url)
        } else {
            String::new()
        }
    );
    println!();

    for check in &report.checks {
        let verdict = match check.verdict {
            Verdict::Pass => "PASS".green(),
            Verdict::Warning => "WARN".yellow(),
            Verdict::Missing => "MISS".red(),
        };
        println!("  [{}] {}: {}", verdict, check.name.bold(), check.observation.summary());
        if check.verdict != Verdict::Pass {
            println!("         {}", check.recommendation.dimmed());
        }
        if let Some(elaboration) = &check.elaboration {
            println!("         {}", elaboration.dimmed());
        }
    }

    let warnings = report
        .checks
        .iter()
        .filter(|c| c.verdict != Verdict::Pass)
        .count();
    println!();
    println!(
        "{} of {} checks need attention",
        warnings,
        report.checks.len()
    );
}

/// Writes the report as pretty-printed JSON, deriving a
/// `<host>_seo_audit.json` file name when no explicit path is given.
fn write_json_report(report: &AuditReport, output: Option<PathBuf>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path,
        None => {
            let host = url::Url::parse(&report.final_url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_else(|| "site".to_string());
            PathBuf::from(format!("{host}_seo_audit.json"))
        }
    };
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(path)
}
