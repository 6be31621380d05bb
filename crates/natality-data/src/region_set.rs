//! The fixed set of regions the map draws.

use std::collections::BTreeSet;

use natality_types::{RegionIdentity, RegionName};

use crate::error::DataError;

/// Known regions in source order, with unique names.
///
/// Uniqueness is what lets a join produce exactly one value per region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSet {
    regions: Vec<RegionIdentity>,
}

impl RegionSet {
    /// Build a set from region identities.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateRegion`] if two regions share a name.
    pub fn new(regions: Vec<RegionIdentity>) -> Result<Self, DataError> {
        let mut seen: BTreeSet<&RegionName> = BTreeSet::new();
        for region in &regions {
            if !seen.insert(&region.name) {
                return Err(DataError::DuplicateRegion(region.name.clone()));
            }
        }
        Ok(Self { regions })
    }

    /// Build a set of geometry-less regions from bare names.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateRegion`] if a name repeats.
    pub fn from_names<I, S>(names: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<RegionName>,
    {
        Self::new(names.into_iter().map(RegionIdentity::named).collect())
    }

    /// Iterate over region names in source order.
    pub fn names(&self) -> impl Iterator<Item = &RegionName> {
        self.regions.iter().map(|region| &region.name)
    }

    /// Whether a region with this name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|known| known.as_str() == name)
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_are_rejected() {
        let result = RegionSet::from_names(["Moscow", "Tver", "Moscow"]);
        assert!(matches!(
            result,
            Err(DataError::DuplicateRegion(name)) if name.as_str() == "Moscow"
        ));
    }

    #[test]
    fn keeps_source_order() {
        let set = RegionSet::from_names(["Tver", "Moscow", "Tula"]).unwrap();
        let names: Vec<&str> = set.names().map(RegionName::as_str).collect();
        assert_eq!(names, ["Tver", "Moscow", "Tula"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("Tula"));
        assert!(!set.contains("Omsk"));
    }
}
