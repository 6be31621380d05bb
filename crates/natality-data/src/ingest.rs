//! Parsing raw dataset rows and region geometries.
//!
//! Table rows arrive the way a CSV reader materialises them: every column
//! is either a string or a number, and the column names are `region`,
//! `Year`, `Born`, `Died`, and `Diff`. Parsing is strict. A malformed
//! number is a load-time error naming the row and column, never a silent
//! zero.
//!
//! Regions come from a `GeoJSON` `FeatureCollection`. Only
//! `properties.name` is interpreted; `geometry` is carried through as an
//! opaque value.
//!
//! Region names from both sources are trimmed the same way, so a padded
//! name in the table and the geometry still produces one join key.

use core::str::FromStr;

use natality_types::{RegionIdentity, RegionName, Year, YearlyRecord};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::info;

use crate::error::DataError;

/// A raw cell: the text of a CSV column or a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A JSON number.
    Number(serde_json::Number),
    /// Text, possibly padded with whitespace.
    Text(String),
}

impl RawValue {
    /// The cell as text, for parsing and error messages.
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// One unparsed row of the demographic table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    /// Region name.
    pub region: String,
    /// Sample year.
    #[serde(rename = "Year")]
    pub year: RawValue,
    /// Births.
    #[serde(rename = "Born")]
    pub born: RawValue,
    /// Deaths.
    #[serde(rename = "Died")]
    pub died: RawValue,
    /// Births minus deaths.
    #[serde(rename = "Diff")]
    pub diff: RawValue,
}

/// Parse raw rows into typed records.
///
/// # Errors
///
/// Fails on the first row with an empty region, a non-numeric field, a
/// fractional or out-of-range year, or a negative birth or death count.
pub fn parse_records(rows: &[RawRecord]) -> Result<Vec<YearlyRecord>, DataError> {
    rows.iter()
        .enumerate()
        .map(|(row, raw)| parse_record(row, raw))
        .collect()
}

/// Parse a JSON array of row objects into typed records.
///
/// # Errors
///
/// Returns [`DataError::Json`] for malformed JSON, otherwise the errors of
/// [`parse_records`].
pub fn records_from_json(text: &str) -> Result<Vec<YearlyRecord>, DataError> {
    let rows: Vec<RawRecord> = serde_json::from_str(text)?;
    let records = parse_records(&rows)?;
    info!(rows = records.len(), "Dataset rows parsed");
    Ok(records)
}

fn parse_record(row: usize, raw: &RawRecord) -> Result<YearlyRecord, DataError> {
    let region = raw.region.trim();
    if region.is_empty() {
        return Err(DataError::EmptyRegionName { row });
    }

    let year = parse_year(row, &raw.year)?;
    let born = parse_count(row, "Born", &raw.born)?;
    let died = parse_count(row, "Died", &raw.died)?;
    let diff = parse_decimal(row, "Diff", &raw.diff)?;

    Ok(YearlyRecord {
        region: RegionName::from(region),
        year,
        born,
        died,
        diff,
    })
}

fn parse_decimal(row: usize, field: &'static str, raw: &RawValue) -> Result<Decimal, DataError> {
    let text = raw.to_text();
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_err| DataError::InvalidNumber {
            row,
            field,
            value: text.clone(),
        })
}

fn parse_count(row: usize, field: &'static str, raw: &RawValue) -> Result<Decimal, DataError> {
    let value = parse_decimal(row, field, raw)?;
    if value < Decimal::ZERO {
        return Err(DataError::NegativeCount { row, field, value });
    }
    Ok(value)
}

fn parse_year(row: usize, raw: &RawValue) -> Result<Year, DataError> {
    let value = parse_decimal(row, "Year", raw)?;
    if !value.fract().is_zero() {
        return Err(DataError::NonIntegerYear { row, value });
    }
    value
        .to_i32()
        .map(Year::new)
        .ok_or(DataError::YearOutOfRange { row, value })
}

// ---------------------------------------------------------------------------
// GeoJSON regions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    geometry: serde_json::Value,
}

/// Read region identities from a `GeoJSON` `FeatureCollection`.
///
/// # Errors
///
/// Returns [`DataError::Json`] for malformed input, or
/// [`DataError::MissingFeatureName`] for a feature without a string
/// `name` property.
pub fn regions_from_geojson(text: &str) -> Result<Vec<RegionIdentity>, DataError> {
    let collection: FeatureCollection = serde_json::from_str(text)?;

    let regions = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(feature, Feature { properties, geometry })| -> Result<RegionIdentity, DataError> {
            let name = properties
                .as_ref()
                .and_then(|props| props.get("name"))
                .and_then(serde_json::Value::as_str)
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .ok_or(DataError::MissingFeatureName { feature })?;
            Ok(RegionIdentity {
                name: RegionName::from(name),
                geometry,
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    info!(regions = regions.len(), "Region features parsed");
    Ok(regions)
}
