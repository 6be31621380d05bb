//! Updates emitted by the view synchroniser to the rendering layer.
//!
//! The renderer never queries the core. It receives a stream of
//! [`ViewUpdate`] values and applies each one to the map, the year label,
//! the tooltip and bar chart, or the region outline highlight.

use core::fmt;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{RegionName, Year};
use crate::structs::{BarDatum, JoinedRegionValue, YearlyRecord};

/// What the detail panel (tooltip and bar chart) should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum DetailUpdate {
    /// The selected region has data for the year.
    Record {
        /// The full dataset row.
        record: YearlyRecord,
        /// Bar chart series derived from the row.
        bars: Vec<BarDatum>,
    },
    /// The selected region has no row for the year.
    NoData {
        /// Region that was looked up.
        region: RegionName,
        /// Year that was looked up.
        year: Year,
    },
    /// No region is selected.
    NoSelection,
}

impl DetailUpdate {
    /// Build a detail update from a lookup result.
    pub fn from_lookup(region: &RegionName, year: Year, record: Option<YearlyRecord>) -> Self {
        match record {
            Some(record) => Self::Record {
                bars: record.bar_series().into(),
                record,
            },
            None => Self::NoData {
                region: region.clone(),
                year,
            },
        }
    }

    /// The record, when one was found.
    pub const fn record(&self) -> Option<&YearlyRecord> {
        match self {
            Self::Record { record, .. } => Some(record),
            Self::NoData { .. } | Self::NoSelection => None,
        }
    }
}

impl fmt::Display for DetailUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record { record, .. } => write!(
                f,
                "Region: {}, Year: {}, Number of Birth: {}, Number of Death: {}, Difference: {}",
                record.region, record.year, record.born, record.died, record.diff
            ),
            Self::NoData { region, year } => {
                write!(f, "No info for this {region} for year {year}")
            }
            Self::NoSelection => f.write_str("No region selected"),
        }
    }
}

/// One update for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ViewUpdate {
    /// Recolor every region for the given year.
    MapUpdate {
        /// The snapped year the values were joined for.
        year: Year,
        /// Exactly one entry per known region.
        values: BTreeMap<RegionName, JoinedRegionValue>,
    },
    /// Show the snapped year next to the slider.
    YearDisplay {
        /// The snapped year.
        year: Year,
    },
    /// Refresh the tooltip and bar chart.
    Detail {
        /// What to show.
        detail: DetailUpdate,
    },
    /// Move the outline highlight to a newly selected region.
    HighlightChange {
        /// The region to highlight.
        selected: RegionName,
        /// The region that loses its highlight, if any.
        previous: Option<RegionName>,
    },
}
