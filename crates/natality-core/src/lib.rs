//! Selection state and view synchronisation for the regional natality map.
//!
//! This crate owns the two event triggers of the map: a year change from
//! the slider and a click on a region. Each trigger runs to completion and
//! emits a complete set of [`ViewUpdate`]s through a [`ViewSink`].
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `natality.yaml` into
//!   strongly-typed structs.
//! - [`selection`] -- [`SelectionState`], the single selected region.
//! - [`sink`] -- [`ViewSink`] trait and [`RecordingSink`].
//! - [`sync`] -- [`ViewSync`], the year-change and region-click handlers.
//!
//! [`ViewUpdate`]: natality_types::ViewUpdate
//! [`SelectionState`]: selection::SelectionState
//! [`ViewSink`]: sink::ViewSink
//! [`RecordingSink`]: sink::RecordingSink
//! [`ViewSync`]: sync::ViewSync

pub mod config;
pub mod selection;
pub mod sink;
pub mod sync;
