//! Headless viewer for the regional natality map.
//!
//! Loads the configuration and dataset, renders the initial state, then
//! reads one command per line from stdin (`year <n>` or `click <region>`)
//! and writes every resulting view update to stdout as a JSON line. Logs
//! go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `natality.yaml` (or the path in the first
//!    argument)
//! 2. Initialize structured logging (tracing)
//! 3. Read the records JSON and regions `GeoJSON`, build the view sync
//! 4. Emit the initial state at the smallest valid year
//! 5. Handle stdin commands until end of input

mod command;
mod error;
mod output;
mod session;

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use natality_core::config::ViewerConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ViewerError;
use crate::output::JsonLinesSink;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "natality.yaml";

/// Application entry point for the viewer.
///
/// # Errors
///
/// Returns an error if loading fails or stdout cannot be written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so the level can come
    //    from the file.
    let config_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let (config, from_file) = load_config(&config_path)?;

    // 2. Initialize structured logging on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        config = %config_path.display(),
        from_file,
        records_path = %config.data.records_path.display(),
        regions_path = %config.data.regions_path.display(),
        "natality-viewer starting"
    );

    // 3. Load the dataset.
    let mut sync = session::load_view_sync(&config)?;

    // 4-5. Initial render, then the command loop.
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut sink = JsonLinesSink::new(BufWriter::new(stdout.lock()));
    let stats = session::run(&mut sync, stdin.lock(), &mut sink, |sink| {
        sink.take_error()
            .map_err(|err| ViewerError::io("stdout", err))
    })?;

    info!(
        year_changes = stats.year_changes,
        clicks = stats.clicks,
        skipped = stats.skipped,
        updates = sink.written(),
        final_year = %sync.current_year(),
        "Input exhausted, shutting down"
    );
    Ok(())
}

/// Load the configuration file, or fall back to defaults when it does not
/// exist. The flag reports whether a file was read.
fn load_config(path: &Path) -> Result<(ViewerConfig, bool), ViewerError> {
    if path.exists() {
        Ok((ViewerConfig::from_file(path)?, true))
    } else {
        Ok((ViewerConfig::parse("")?, false))
    }
}
