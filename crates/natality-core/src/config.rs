//! Configuration loading and typed config structures for the natality map.
//!
//! The configuration lives in `natality.yaml`. Every field has a default,
//! so an empty file (or no file at all) describes the standard dataset:
//! eleven sample years from 1970 to 2010 and the two data files in the
//! working directory.

use std::path::{Path, PathBuf};

use natality_data::{DataError, YearIndex};
use serde::Deserialize;

/// Environment variable overriding [`DataConfig::records_path`].
pub const RECORDS_PATH_ENV: &str = "NATALITY_RECORDS_PATH";

/// Environment variable overriding [`DataConfig::regions_path`].
pub const REGIONS_PATH_ENV: &str = "NATALITY_REGIONS_PATH";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level viewer configuration, mirroring `natality.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewerConfig {
    /// Valid sample years.
    #[serde(default)]
    pub years: YearsConfig,

    /// Dataset file locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ViewerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override the data paths:
    /// - `NATALITY_RECORDS_PATH` overrides `data.records_path`
    /// - `NATALITY_REGIONS_PATH` overrides `data.regions_path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse_with(yaml, |key| std::env::var(key).ok())
    }

    /// Parse configuration from a YAML string, resolving overrides through
    /// `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_with(
        yaml: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.data.apply_overrides(lookup);
        Ok(config)
    }

    /// Build the year index described by `years.valid`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::EmptyYearSet`] if the list is empty.
    pub fn year_index(&self) -> Result<YearIndex, DataError> {
        YearIndex::from_raw(&self.years.valid)
    }
}

/// Sample-year configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YearsConfig {
    /// Years the dataset was sampled at, in any order.
    #[serde(default = "default_valid_years")]
    pub valid: Vec<i32>,
}

impl Default for YearsConfig {
    fn default() -> Self {
        Self {
            valid: default_valid_years(),
        }
    }
}

/// Dataset file locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataConfig {
    /// JSON array of yearly regional rows.
    #[serde(default = "default_records_path")]
    pub records_path: PathBuf,

    /// `GeoJSON` feature collection of regions.
    #[serde(default = "default_regions_path")]
    pub regions_path: PathBuf,
}

impl DataConfig {
    /// Override data paths with the values `lookup` returns for
    /// `NATALITY_RECORDS_PATH` and `NATALITY_REGIONS_PATH`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(RECORDS_PATH_ENV) {
            self.records_path = PathBuf::from(val);
        }
        if let Some(val) = lookup(REGIONS_PATH_ENV) {
            self.regions_path = PathBuf::from(val);
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            records_path: default_records_path(),
            regions_path: default_regions_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_valid_years() -> Vec<i32> {
    vec![
        1970, 1980, 1990, 1995, 2000, 2005, 2006, 2007, 2008, 2009, 2010,
    ]
}

fn default_records_path() -> PathBuf {
    PathBuf::from("data_demografic_new.json")
}

fn default_regions_path() -> PathBuf {
    PathBuf::from("regions.geojson")
}

fn default_log_level() -> String {
    "info".to_owned()
}
