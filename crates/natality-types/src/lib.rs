//! Shared type definitions for the regional natality map.
//!
//! Everything that crosses the boundary between the data core and the
//! rendering layer lives here. Types flow downstream to `TypeScript` via
//! `ts-rs` so the map, tooltip, and bar chart read the same shapes the core
//! produces.
//!
//! # Modules
//!
//! - [`ids`] -- [`RegionName`] and [`Year`] newtypes used as join keys
//! - [`structs`] -- Dataset rows, region identities, and joined values
//! - [`view`] -- Updates emitted to the rendering layer

pub mod ids;
pub mod structs;
pub mod view;

// Re-export all public types at crate root for convenience.
pub use ids::{RegionName, Year};
pub use structs::{BarDatum, JoinedRegionValue, RegionIdentity, YearlyRecord};
pub use view::{DetailUpdate, ViewUpdate};
