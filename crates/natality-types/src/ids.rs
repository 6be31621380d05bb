//! Join-key newtypes.
//!
//! Region names and years are both plain primitives in the raw dataset.
//! Wrapping them keeps a region name from being passed where a year is
//! expected and gives the snapping code a single place for year distance.

use core::borrow::Borrow;
use core::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Name of a geographic region, the key shared by the dataset rows and
/// the region geometries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct RegionName(pub String);

impl RegionName {
    /// Create a region name from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RegionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for RegionName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct Year(pub i32);

impl Year {
    /// Wrap a raw year value.
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    /// Return the inner year value.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Absolute distance in years. Never overflows: the result is unsigned.
    pub const fn distance(self, other: Self) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self(year)
    }
}
