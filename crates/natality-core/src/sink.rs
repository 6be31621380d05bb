//! The seam between the core and the rendering layer.
//!
//! The core never touches the map, tooltip, or chart directly. It pushes
//! [`ViewUpdate`] values into a [`ViewSink`], and the renderer decides how
//! to draw them. [`RecordingSink`] keeps every update in memory, which is
//! all tests and headless runs need.

use natality_types::ViewUpdate;

/// Receives updates produced by [`ViewSync`](crate::sync::ViewSync).
pub trait ViewSink {
    /// Accept one update. Updates arrive in the order they must be applied.
    fn emit(&mut self, update: ViewUpdate);
}

/// A sink that records updates in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    updates: Vec<ViewUpdate>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub const fn new() -> Self {
        Self {
            updates: Vec::new(),
        }
    }

    /// Updates recorded so far.
    pub fn updates(&self) -> &[ViewUpdate] {
        &self.updates
    }

    /// Remove and return all recorded updates.
    pub fn take(&mut self) -> Vec<ViewUpdate> {
        std::mem::take(&mut self.updates)
    }
}

impl ViewSink for RecordingSink {
    fn emit(&mut self, update: ViewUpdate) {
        self.updates.push(update);
    }
}

impl ViewSink for Vec<ViewUpdate> {
    fn emit(&mut self, update: ViewUpdate) {
        self.push(update);
    }
}
