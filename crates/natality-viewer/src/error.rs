//! Error types for the viewer binary.
//!
//! [`ViewerError`] wraps every failure that can stop the viewer. All of
//! them happen either while loading or while writing output; the view
//! triggers themselves cannot fail.

/// Top-level error for the viewer binary.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: natality_core::config::ConfigError,
    },

    /// The dataset or year set is invalid.
    #[error("data error: {source}")]
    Data {
        /// The underlying data error.
        #[from]
        source: natality_data::DataError,
    },

    /// Reading a dataset file, stdin, or writing stdout failed.
    #[error("I/O error on {context}: {source}")]
    Io {
        /// What was being read or written.
        context: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl ViewerError {
    /// Wrap an I/O error with a description of what failed.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
