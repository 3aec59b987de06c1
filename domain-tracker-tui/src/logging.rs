//! File logging
//!
//! The terminal belongs to the UI, so everything goes to a daily rolling file
//! in `log_dir`. `log` records from the library crates are bridged into
//! `tracing` by the subscriber's `tracing-log` integration.
//!
//! Filter precedence: `RUST_LOG`, then the configured `log_level`.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::backend::AppConfig;

const LOG_FILE_PREFIX: &str = "domain-tracker";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// Install the global subscriber.
///
/// The returned guard flushes the background writer when dropped; keep it
/// alive until the program exits.
pub fn init(config: &AppConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Failed to create log dir {}", config.log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&config.log_dir)
        .context("Failed to open log file")?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = filter_directive(&config.log_level, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let env_filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("Failed to install the log subscriber")?;

    Ok(guard)
}

/// `RUST_LOG` when set and not blank, otherwise the configured level.
fn filter_directive(configured: &str, rust_log: Option<String>) -> String {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins() {
        assert_eq!(
            filter_directive("info", Some("domain_tracker_core=debug".to_string())),
            "domain_tracker_core=debug"
        );
    }

    #[test]
    fn blank_rust_log_falls_back() {
        assert_eq!(filter_directive("warn", Some(" ".to_string())), "warn");
        assert_eq!(filter_directive("warn", None), "warn");
    }

    #[test]
    fn configured_levels_parse() {
        for directive in ["info", "debug", "domain_tracker_api=trace,warn"] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }
}
