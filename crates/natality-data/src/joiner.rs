//! Joins one year of statistics onto the full region set.
//!
//! The map needs a value for every region it draws, whether or not the
//! dataset covers that region for the year. [`RegionJoiner::join_all`] is
//! therefore total over its input: each region gets exactly one
//! [`JoinedRegionValue`], with `value: None` where no row exists.

use std::collections::BTreeMap;

use natality_types::{JoinedRegionValue, RegionName, Year, YearlyRecord};
use tracing::debug;

use crate::record_store::RecordStore;
use crate::region_set::RegionSet;

/// Per-region join result for one year, keyed by region name.
pub type JoinedRegions = BTreeMap<RegionName, JoinedRegionValue>;

/// Joins [`RecordStore`] rows onto regions for a given year.
#[derive(Debug, Clone, Default)]
pub struct RegionJoiner {
    store: RecordStore,
}

impl RegionJoiner {
    /// Wrap a record store.
    pub const fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The underlying record store.
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Join the birth count for `year` onto every region.
    ///
    /// `year` must already be snapped. The output has one entry per region
    /// in `regions`; regions without a row map to an absent value.
    pub fn join_all(&self, regions: &RegionSet, year: Year) -> JoinedRegions {
        let for_year = self.store.records_for_year(year);

        let joined: JoinedRegions = regions
            .names()
            .map(|name| {
                let value = for_year
                    .and_then(|rows| rows.get(name))
                    .map(|record| record.born);
                (
                    name.clone(),
                    JoinedRegionValue {
                        region: name.clone(),
                        value,
                    },
                )
            })
            .collect();

        debug!(
            year = %year,
            regions = joined.len(),
            with_data = joined.values().filter(|v| v.has_data()).count(),
            "Joined regions for year"
        );
        joined
    }

    /// Full record for one region and an already snapped year.
    pub fn lookup_detail(&self, region: &str, year: Year) -> Option<&YearlyRecord> {
        self.store.lookup(region, year)
    }
}
