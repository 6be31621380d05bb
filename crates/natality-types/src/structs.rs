//! Dataset rows, region identities, and per-region join results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{RegionName, Year};

// ---------------------------------------------------------------------------
// Dataset rows
// ---------------------------------------------------------------------------

/// One row of the regional demographic table.
///
/// Immutable once loaded. `born` and `died` are non-negative; `diff` is
/// carried as recorded in the dataset and may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct YearlyRecord {
    /// Region the statistics belong to.
    pub region: RegionName,
    /// Sample year.
    pub year: Year,
    /// Number of births.
    #[ts(as = "String")]
    pub born: Decimal,
    /// Number of deaths.
    #[ts(as = "String")]
    pub died: Decimal,
    /// Natural increase (births minus deaths).
    #[ts(as = "String")]
    pub diff: Decimal,
}

impl YearlyRecord {
    /// The two bars of the detail chart: births then deaths.
    pub fn bar_series(&self) -> [BarDatum; 2] {
        [
            BarDatum {
                category: "Born".to_owned(),
                value: self.born,
            },
            BarDatum {
                category: "Died".to_owned(),
                value: self.died,
            },
        ]
    }
}

/// A single labelled bar in the detail chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BarDatum {
    /// Bar label.
    pub category: String,
    /// Bar height.
    #[ts(as = "String")]
    pub value: Decimal,
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// A named geographic region.
///
/// The geometry is owned by the geography source and passed through
/// untouched; joins only ever read `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RegionIdentity {
    /// Join key against [`YearlyRecord::region`].
    pub name: RegionName,
    /// Opaque geometry payload.
    pub geometry: serde_json::Value,
}

impl RegionIdentity {
    /// Create a region with no geometry attached.
    pub fn named(name: impl Into<RegionName>) -> Self {
        Self {
            name: name.into(),
            geometry: serde_json::Value::Null,
        }
    }
}

/// The map statistic joined onto one region for one year.
///
/// `value` is `None` when the dataset has no row for the region and year.
/// That is distinct from `Some(0)`, which means zero births were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct JoinedRegionValue {
    /// The region this value belongs to.
    pub region: RegionName,
    /// Joined statistic, absent when no data exists.
    #[ts(as = "Option<String>")]
    pub value: Option<Decimal>,
}

impl JoinedRegionValue {
    /// Whether the join found a record for this region.
    pub const fn has_data(&self) -> bool {
        self.value.is_some()
    }
}
