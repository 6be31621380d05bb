//! Dataset loading and the input event loop.

use std::io::BufRead;
use std::path::Path;

use natality_core::config::ViewerConfig;
use natality_core::sink::ViewSink;
use natality_core::sync::ViewSync;
use natality_data::{RecordStore, RegionJoiner, RegionSet, YearIndex};
use natality_types::Year;
use tracing::{info, warn};

use crate::command::{Command, parse_command};
use crate::error::ViewerError;

/// Counters reported when the input stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Year-change triggers handled.
    pub year_changes: u64,
    /// Region-click triggers handled.
    pub clicks: u64,
    /// Input lines that were not valid commands.
    pub skipped: u64,
}

/// Read both dataset files named in the configuration and assemble the
/// view synchroniser.
///
/// # Errors
///
/// Returns [`ViewerError::Io`] if a file cannot be read, or
/// [`ViewerError::Data`] if its contents are invalid.
pub fn load_view_sync(config: &ViewerConfig) -> Result<ViewSync, ViewerError> {
    let years = config.year_index()?;
    let rows = read_file(&config.data.records_path)?;
    let geojson = read_file(&config.data.regions_path)?;
    let sync = build_view_sync(years, &rows, &geojson)?;
    info!(
        min_year = %sync.years().min(),
        max_year = %sync.years().max(),
        regions = sync.regions().len(),
        records = sync.joiner().store().len(),
        "Dataset loaded"
    );
    Ok(sync)
}

/// Assemble a view synchroniser from in-memory dataset text.
///
/// # Errors
///
/// Returns [`ViewerError::Data`] for invalid rows or regions.
pub fn build_view_sync(
    years: YearIndex,
    rows_json: &str,
    regions_geojson: &str,
) -> Result<ViewSync, ViewerError> {
    let records = natality_data::records_from_json(rows_json)?;
    let regions = RegionSet::new(natality_data::regions_from_geojson(regions_geojson)?)?;
    Ok(ViewSync::new(
        years,
        RegionJoiner::new(RecordStore::new(records)),
        regions,
    ))
}

fn read_file(path: &Path) -> Result<String, ViewerError> {
    std::fs::read_to_string(path).map_err(|err| ViewerError::io(path.display().to_string(), err))
}

/// Render the initial state, then handle one command per input line until
/// the input ends.
///
/// `after_trigger` runs after every trigger so the caller can surface
/// output failures.
///
/// # Errors
///
/// Returns [`ViewerError::Io`] if reading input fails or `after_trigger`
/// reports a failure.
pub fn run<S, F>(
    sync: &mut ViewSync,
    input: impl BufRead,
    sink: &mut S,
    mut after_trigger: F,
) -> Result<SessionStats, ViewerError>
where
    S: ViewSink,
    F: FnMut(&mut S) -> Result<(), ViewerError>,
{
    let mut stats = SessionStats::default();
    let mut slider: Year = sync.start(sink);
    after_trigger(&mut *sink)?;

    for line in input.lines() {
        let line = line.map_err(|err| ViewerError::io("stdin", err))?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Year(raw))) => {
                slider = raw;
                sync.on_year_change(raw, sink);
                stats.year_changes = stats.year_changes.saturating_add(1);
            }
            Ok(Some(Command::Click(region))) => {
                if !sync.regions().contains(region.as_str()) {
                    warn!(region = %region, "Click on a region that is not on the map");
                }
                sync.on_region_click(region, slider, sink);
                stats.clicks = stats.clicks.saturating_add(1);
            }
            Err(err) => {
                warn!(line = %line, error = %err, "Skipping invalid input line");
                stats.skipped = stats.skipped.saturating_add(1);
                continue;
            }
        }
        after_trigger(&mut *sink)?;
    }

    Ok(stats)
}
