//! File logging through `tracing`; `log` call sites are bridged by the subscriber

use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter used when neither `RUST_LOG` nor the crate's own variable is set
fn default_filter() -> String {
    format!("{}=info", env!("CARGO_CRATE_NAME"))
}

/// Filter directives: `RUST_LOG`, then `STUDYPLATFORM_LOGLEVEL`, then the default
fn filter_directives(rust_log: Option<String>, crate_log: Option<String>) -> String {
    rust_log.or(crate_log).unwrap_or_else(default_filter)
}

pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

/// Route every record to `<data dir>/studyplatform.log`; the terminal is
/// owned by the UI so nothing goes to stdout or stderr
pub fn initialize_logging() -> Result<()> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let log_file = std::fs::File::create(&path)?;

    let directives = filter_directives(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::try_new(&directives)?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
