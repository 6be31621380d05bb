//! JSON-lines rendering sink.
//!
//! Each [`ViewUpdate`] becomes one line of JSON on the output stream, in
//! emission order. A downstream renderer reads the stream and applies the
//! updates to the map, slider label, tooltip, and bar chart.

use std::io::Write;

use natality_core::sink::ViewSink;
use natality_types::ViewUpdate;
use tracing::error;

/// Writes updates as newline-delimited JSON.
///
/// [`ViewSink::emit`] cannot fail, so the first write error is stored and
/// every later update is dropped. Call [`Self::take_error`] after each
/// trigger.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    written: u64,
    failure: Option<std::io::Error>,
}

impl<W: Write> JsonLinesSink<W> {
    /// Wrap an output stream.
    pub const fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            failure: None,
        }
    }

    /// Number of updates written successfully.
    pub const fn written(&self) -> u64 {
        self.written
    }

    /// Flush the stream and return the first write error, if any.
    pub fn take_error(&mut self) -> Result<(), std::io::Error> {
        if let Some(err) = self.failure.take() {
            return Err(err);
        }
        self.out.flush()
    }

    /// Recover the wrapped stream.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, update: &ViewUpdate) -> Result<(), std::io::Error> {
        serde_json::to_writer(&mut self.out, update)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> ViewSink for JsonLinesSink<W> {
    fn emit(&mut self, update: ViewUpdate) {
        if self.failure.is_some() {
            return;
        }
        match self.write_line(&update) {
            Ok(()) => self.written = self.written.saturating_add(1),
            Err(err) => {
                error!(error = %err, "Failed to write view update");
                self.failure = Some(err);
            }
        }
    }
}
