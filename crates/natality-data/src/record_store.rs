//! The yearly regional record table, indexed for constant-time lookup.
//!
//! Records are grouped by year first and region second:
//! `HashMap<Year, HashMap<RegionName, YearlyRecord>>`. A detail lookup is
//! two hash lookups, and a full-map join for one year reads a single inner
//! map instead of filtering the whole table.
//!
//! The store never snaps years. Callers pass a year that has already been
//! resolved through [`YearIndex`](crate::YearIndex).

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use natality_types::{RegionName, Year, YearlyRecord};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Immutable `(region, year)` index over the loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Records grouped by year, then by region.
    by_year: HashMap<Year, HashMap<RegionName, YearlyRecord>>,
    /// Number of distinct `(region, year)` rows held.
    len: usize,
    /// Largest `born` value across the whole table.
    max_born: Option<Decimal>,
}

impl RecordStore {
    /// Index a collection of records.
    ///
    /// When the same `(region, year)` pair appears more than once, the
    /// first row is kept and later ones are dropped with a warning.
    /// [`Self::max_born`] still spans every input row, dropped ones included.
    pub fn new(records: impl IntoIterator<Item = YearlyRecord>) -> Self {
        let mut by_year: HashMap<Year, HashMap<RegionName, YearlyRecord>> = HashMap::new();
        let mut max_born: Option<Decimal> = None;
        let mut duplicates: usize = 0;

        for record in records {
            max_born = Some(max_born.map_or(record.born, |max| max.max(record.born)));
            let regions = by_year.entry(record.year).or_default();
            match regions.entry(record.region.clone()) {
                Entry::Occupied(_) => {
                    warn!(
                        region = %record.region,
                        year = %record.year,
                        "Duplicate record ignored, keeping first occurrence"
                    );
                    duplicates = duplicates.saturating_add(1);
                }
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
            }
        }

        let len = by_year.values().map(HashMap::len).sum();
        info!(
            records = len,
            years = by_year.len(),
            duplicates,
            "Record store indexed"
        );

        Self {
            by_year,
            len,
            max_born,
        }
    }

    /// Find the record for an exact `(region, year)` pair.
    ///
    /// Returns `None` when the table has no such row. A row with zero
    /// births is returned as a record, never as `None`.
    pub fn lookup(&self, region: &str, year: Year) -> Option<&YearlyRecord> {
        self.by_year.get(&year)?.get(region)
    }

    /// All records for one year keyed by region, if any exist.
    pub fn records_for_year(&self, year: Year) -> Option<&HashMap<RegionName, YearlyRecord>> {
        self.by_year.get(&year)
    }

    /// Largest birth count across every loaded row, the upper end of the
    /// map's color domain. `None` for an empty table.
    pub const fn max_born(&self) -> Option<Decimal> {
        self.max_born
    }

    /// Number of distinct `(region, year)` rows.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the store holds no rows.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
