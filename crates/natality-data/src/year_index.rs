//! Ordered set of valid sample years with nearest-year snapping.
//!
//! The dataset is only sampled at a handful of years, but the slider moves
//! over every year in between. [`YearIndex::snap`] maps any input year to
//! the closest sampled year so every downstream lookup uses a year that
//! actually exists in the table.
//!
//! # Tie-break
//!
//! When an input lies exactly halfway between two sampled years the
//! smaller year wins. `snap(1985)` over `[1980, 1990]` is always `1980`.

use natality_types::Year;

use crate::error::DataError;

/// The valid sample years, sorted ascending and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearIndex {
    /// Sorted, distinct years. Never empty.
    years: Vec<Year>,
    /// Smallest year, cached for the slider range.
    min: Year,
    /// Largest year, cached for the slider range.
    max: Year,
}

impl YearIndex {
    /// Build an index from any collection of years.
    ///
    /// Input order does not matter and repeated years collapse to one.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::EmptyYearSet`] if no years are supplied.
    pub fn new(years: impl IntoIterator<Item = Year>) -> Result<Self, DataError> {
        let mut years: Vec<Year> = years.into_iter().collect();
        years.sort_unstable();
        years.dedup();

        let (Some(&min), Some(&max)) = (years.first(), years.last()) else {
            return Err(DataError::EmptyYearSet);
        };

        Ok(Self { years, min, max })
    }

    /// Build an index from raw integer years.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::EmptyYearSet`] if `years` is empty.
    pub fn from_raw(years: &[i32]) -> Result<Self, DataError> {
        Self::new(years.iter().copied().map(Year::new))
    }

    /// Return the valid year nearest to `target`, preferring the smaller
    /// year on an exact tie. The result is always a member of the index.
    pub fn snap(&self, target: Year) -> Year {
        let split = self.years.partition_point(|year| *year < target);
        let above = self.years.get(split).copied();
        let below = split
            .checked_sub(1)
            .and_then(|idx| self.years.get(idx))
            .copied();

        match (below, above) {
            (Some(lo), Some(hi)) => {
                if hi.distance(target) < lo.distance(target) {
                    hi
                } else {
                    lo
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            // Construction guarantees at least one year.
            (None, None) => self.min,
        }
    }

    /// Smallest valid year.
    pub const fn min(&self) -> Year {
        self.min
    }

    /// Largest valid year.
    pub const fn max(&self) -> Year {
        self.max
    }

    /// All valid years in ascending order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Whether `year` is one of the sampled years.
    pub fn contains(&self, year: Year) -> bool {
        self.years.binary_search(&year).is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    const SAMPLE_YEARS: [i32; 11] = [
        1970, 1980, 1990, 1995, 2000, 2005, 2006, 2007, 2008, 2009, 2010,
    ];

    fn sample_index() -> YearIndex {
        YearIndex::from_raw(&SAMPLE_YEARS).unwrap()
    }

    #[test]
    fn empty_set_is_rejected() {
        let result = YearIndex::from_raw(&[]);
        assert!(matches!(result, Err(DataError::EmptyYearSet)));
    }

    #[test]
    fn unsorted_input_is_normalised() {
        let index = YearIndex::from_raw(&[2000, 1970, 1990, 1970]).unwrap();
        assert_eq!(
            index.years(),
            &[Year::new(1970), Year::new(1990), Year::new(2000)]
        );
        assert_eq!(index.min(), Year::new(1970));
        assert_eq!(index.max(), Year::new(2000));
    }

    #[test]
    fn snaps_to_nearest_year() {
        let index = sample_index();
        assert_eq!(index.snap(Year::new(1992)), Year::new(1990));
        assert_eq!(index.snap(Year::new(1994)), Year::new(1995));
        assert_eq!(index.snap(Year::new(2006)), Year::new(2006));
    }

    #[test]
    fn exact_tie_prefers_smaller_year() {
        let index = sample_index();
        assert_eq!(index.snap(Year::new(1985)), Year::new(1980));
        assert_eq!(index.snap(Year::new(1975)), Year::new(1970));
        assert_eq!(index.snap(Year::new(2002)), Year::new(2000));
    }

    #[test]
    fn out_of_range_clamps_to_bounds() {
        let index = sample_index();
        assert_eq!(index.snap(Year::new(1900)), Year::new(1970));
        assert_eq!(index.snap(Year::new(2100)), Year::new(2010));
        assert_eq!(index.snap(Year::new(i32::MIN)), Year::new(1970));
        assert_eq!(index.snap(Year::new(i32::MAX)), Year::new(2010));
    }

    #[test]
    fn single_year_always_wins() {
        let index = YearIndex::from_raw(&[2000]).unwrap();
        assert_eq!(index.snap(Year::new(1)), Year::new(2000));
        assert_eq!(index.snap(Year::new(3000)), Year::new(2000));
    }

    #[test]
    fn contains_only_sampled_years() {
        let index = sample_index();
        assert!(index.contains(Year::new(1995)));
        assert!(!index.contains(Year::new(1996)));
    }

    #[test]
    fn snap_is_nearest_member_for_random_sets() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..200 {
            let count = rng.random_range(1..12);
            let years: Vec<i32> = (0..count).map(|_| rng.random_range(1900..2100)).collect();
            let index = YearIndex::from_raw(&years).unwrap();

            for _ in 0..20 {
                let target = Year::new(rng.random_range(1850..2150));
                let snapped = index.snap(target);
                assert!(index.contains(snapped));
                for &other in index.years() {
                    let (best, candidate) = (snapped.distance(target), other.distance(target));
                    assert!(best <= candidate);
                    if best == candidate {
                        assert!(snapped <= other, "tie must prefer the smaller year");
                    }
                }
                assert_eq!(index.snap(target), snapped);
            }
        }
    }
}
