//! The currently selected region.
//!
//! At most one region is selected at a time. Selecting a region replaces
//! the previous selection in a single step, so no caller ever observes a
//! state with the old region cleared but the new one not yet set. A year
//! change never clears the selection; it only re-resolves its detail.

use natality_data::RegionJoiner;
use natality_types::{DetailUpdate, RegionName, Year, YearlyRecord};

/// Tracks the region the user last clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<RegionName>,
}

impl SelectionState {
    /// Start with nothing selected.
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Select `region`, returning the region that was selected before.
    ///
    /// The region is not validated: clicks only originate from regions the
    /// renderer has drawn.
    pub fn select(&mut self, region: RegionName) -> Option<RegionName> {
        self.selected.replace(region)
    }

    /// The selected region, if any.
    pub const fn selected(&self) -> Option<&RegionName> {
        self.selected.as_ref()
    }

    /// The selected region's record for `year`.
    ///
    /// `None` when nothing is selected or the region has no row for the
    /// year. Use [`Self::detail_update`] to tell those two cases apart.
    pub fn current_detail<'a>(
        &self,
        joiner: &'a RegionJoiner,
        year: Year,
    ) -> Option<&'a YearlyRecord> {
        let region = self.selected.as_ref()?;
        joiner.lookup_detail(region.as_str(), year)
    }

    /// The detail panel contents for `year`.
    pub fn detail_update(&self, joiner: &RegionJoiner, year: Year) -> DetailUpdate {
        match &self.selected {
            None => DetailUpdate::NoSelection,
            Some(region) => DetailUpdate::from_lookup(
                region,
                year,
                joiner.lookup_detail(region.as_str(), year).cloned(),
            ),
        }
    }
}
