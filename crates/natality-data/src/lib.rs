//! Read-only data layer for the regional natality map.
//!
//! The dataset is loaded once and never mutated. This crate turns raw rows
//! and region geometries into validated, indexed structures and answers the
//! two questions the views ask: "which sample year is nearest?" and "what
//! does each region show for that year?".
//!
//! # Modules
//!
//! - [`error`] -- Construction-time error types.
//! - [`ingest`] -- Parsing raw table rows and `GeoJSON` features.
//! - [`joiner`] -- [`RegionJoiner`] producing one value per region per year.
//! - [`record_store`] -- [`RecordStore`] indexed by region and year.
//! - [`region_set`] -- [`RegionSet`], the known regions with unique names.
//! - [`year_index`] -- [`YearIndex`] with nearest-year snapping.

pub mod error;
pub mod ingest;
pub mod joiner;
pub mod record_store;
pub mod region_set;
pub mod year_index;

// Re-export primary types at crate root.
pub use error::DataError;
pub use ingest::{RawRecord, RawValue, parse_records, records_from_json, regions_from_geojson};
pub use joiner::{JoinedRegions, RegionJoiner};
pub use record_store::RecordStore;
pub use region_set::RegionSet;
pub use year_index::YearIndex;
