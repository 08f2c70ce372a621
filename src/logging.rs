//! Log subscriber setup.
//!
//! Logs go to stderr by default so they never interleave with transcript output on stdout.

use std::fs::OpenOptions;
use std::io;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::EnvConfig;

const FALLBACK_FILTER: &str = "warn";

/// Installs the global subscriber described by `config`.
///
/// Only the first call installs anything; later calls return `Ok(false)`.
pub fn init_logging(config: &EnvConfig) -> io::Result<bool> {
    static INSTALLED: OnceLock<()> = OnceLock::new();
    if INSTALLED.get().is_some() {
        return Ok(false);
    }

    let directive = config.effective_log_filter();
    let (filter, rejected) = parse_filter(&directive);
    let builder = fmt().with_env_filter(filter).with_target(true);

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok()
        }
        None => builder.with_writer(io::stderr).try_init().is_ok(),
    };

    let _ = INSTALLED.set(());
    if let Some(reason) = rejected {
        tracing::warn!(%directive, %reason, "invalid log filter, falling back to warn");
    }
    Ok(installed)
}

/// Parses a filter directive. An invalid directive yields the `warn` filter and the parse error.
fn parse_filter(directive: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new(FALLBACK_FILTER), Some(error.to_string())),
    }
}
