//! Year-change and region-click handling.
//!
//! [`ViewSync`] is the only component that talks to the renderer. It owns
//! the immutable data layer and the mutable [`SelectionState`], and turns
//! each input event into a complete, ordered batch of [`ViewUpdate`]s.
//!
//! # Triggers
//!
//! - **Year change**: snap the raw year, join every region, then emit
//!   `MapUpdate`, `YearDisplay`, and `Detail` in that order. `Detail` is
//!   emitted even with nothing selected (as `NoSelection`), so every year
//!   change refreshes all three views.
//! - **Region click**: select the region, snap the raw year, then emit
//!   `Detail` followed by `HighlightChange`.
//!
//! Neither trigger can fail. A region or year without data is an ordinary
//! `NoData` or absent value.

use natality_data::{JoinedRegions, RegionJoiner, RegionSet, YearIndex};
use natality_types::{DetailUpdate, RegionName, Year, ViewUpdate};
use tracing::debug;

use crate::selection::SelectionState;
use crate::sink::ViewSink;

/// Drives the map, year label, detail panel, and highlight from input events.
#[derive(Debug, Clone)]
pub struct ViewSync {
    years: YearIndex,
    joiner: RegionJoiner,
    regions: RegionSet,
    selection: SelectionState,
    /// Last snapped year. Starts at the smallest valid year.
    current_year: Year,
}

impl ViewSync {
    /// Assemble the synchroniser. Nothing is emitted until [`Self::start`]
    /// or the first trigger.
    pub fn new(years: YearIndex, joiner: RegionJoiner, regions: RegionSet) -> Self {
        let current_year = years.min();
        Self {
            years,
            joiner,
            regions,
            selection: SelectionState::new(),
            current_year,
        }
    }

    /// Render the initial state at the smallest valid year.
    pub fn start(&mut self, sink: &mut dyn ViewSink) -> Year {
        let first = self.years.min();
        self.on_year_change(first, sink)
    }

    /// Handle a slider move to `raw_year`. Returns the snapped year.
    pub fn on_year_change(&mut self, raw_year: Year, sink: &mut dyn ViewSink) -> Year {
        let year = self.years.snap(raw_year);
        self.current_year = year;

        let values = self.join(year);
        debug!(raw_year = %raw_year, year = %year, "Year changed");

        sink.emit(ViewUpdate::MapUpdate { year, values });
        sink.emit(ViewUpdate::YearDisplay { year });

        let detail = self.selection.detail_update(&self.joiner, year);
        sink.emit(ViewUpdate::Detail { detail });

        year
    }

    /// Handle a click on `region` while the slider sits at `raw_year`.
    pub fn on_region_click(
        &mut self,
        region: RegionName,
        raw_year: Year,
        sink: &mut dyn ViewSink,
    ) -> DetailUpdate {
        let previous = self.selection.select(region.clone());
        let year = self.years.snap(raw_year);

        let record = self.joiner.lookup_detail(region.as_str(), year).cloned();
        let detail = DetailUpdate::from_lookup(&region, year, record);
        debug!(
            region = %region,
            year = %year,
            has_data = detail.record().is_some(),
            "Region selected"
        );

        sink.emit(ViewUpdate::Detail {
            detail: detail.clone(),
        });
        sink.emit(ViewUpdate::HighlightChange {
            selected: region,
            previous,
        });

        detail
    }

    /// Join the map statistic for an already snapped year.
    pub fn join(&self, year: Year) -> JoinedRegions {
        self.joiner.join_all(&self.regions, year)
    }

    /// The last snapped year.
    pub const fn current_year(&self) -> Year {
        self.current_year
    }

    /// The current selection.
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The valid sample years.
    pub const fn years(&self) -> &YearIndex {
        &self.years
    }

    /// The region joiner and its record store.
    pub const fn joiner(&self) -> &RegionJoiner {
        &self.joiner
    }

    /// The known regions.
    pub const fn regions(&self) -> &RegionSet {
        &self.regions
    }
}
