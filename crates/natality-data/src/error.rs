//! Error types for the `natality-data` crate.
//!
//! Every variant is a construction-time failure: the dataset or the year
//! set is unusable and the views cannot start. Lookups that find nothing
//! are not errors and never produce a [`DataError`].

use natality_types::RegionName;
use rust_decimal::Decimal;

/// Errors raised while building the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// No valid sample years were supplied.
    #[error("the valid year set must contain at least one year")]
    EmptyYearSet,

    /// A numeric field could not be parsed.
    #[error("row {row}: field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        /// Zero-based row index in the raw table.
        row: usize,
        /// Column name.
        field: &'static str,
        /// The offending raw text.
        value: String,
    },

    /// The year field holds a fractional value.
    #[error("row {row}: year is not a whole number: {value}")]
    NonIntegerYear {
        /// Zero-based row index in the raw table.
        row: usize,
        /// The parsed value.
        value: Decimal,
    },

    /// The year field does not fit a 32-bit year.
    #[error("row {row}: year is out of range: {value}")]
    YearOutOfRange {
        /// Zero-based row index in the raw table.
        row: usize,
        /// The parsed value.
        value: Decimal,
    },

    /// A birth or death count is negative.
    #[error("row {row}: field `{field}` must not be negative: {value}")]
    NegativeCount {
        /// Zero-based row index in the raw table.
        row: usize,
        /// Column name.
        field: &'static str,
        /// The parsed value.
        value: Decimal,
    },

    /// A row has an empty region name.
    #[error("row {row}: region name is empty")]
    EmptyRegionName {
        /// Zero-based row index in the raw table.
        row: usize,
    },

    /// A geographic feature has no usable `name` property.
    #[error("feature {feature}: missing string property `name`")]
    MissingFeatureName {
        /// Zero-based feature index in the collection.
        feature: usize,
    },

    /// Two geographic features share a name.
    #[error("duplicate region name: {0}")]
    DuplicateRegion(RegionName),

    /// The input is not valid JSON for the expected shape.
    #[error("failed to parse JSON input: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
