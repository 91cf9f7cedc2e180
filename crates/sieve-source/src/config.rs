//! YAML configuration for a data source.
//!
//! ```yaml
//! location: data/segwise-report.csv
//! delimiter: ";"
//! numeric_columns: [impressions, clicks, spend]
//! ```
//!
//! Only `location` is required. `delimiter` defaults to `,` and
//! `numeric_columns` to the built-in metric columns.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sieve_seeker::{Schema, TabularParser, METRIC_COLUMNS};

use crate::error::{Result, SourceError};
use crate::sources::{Location, Source};

fn default_delimiter() -> char {
    ','
}

fn default_numeric_columns() -> Vec<String> {
    METRIC_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Where to load from and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File path or `http(s)` URL.
    pub location: String,

    /// Field separator; must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Columns parsed as numbers.
    #[serde(default = "default_numeric_columns")]
    pub numeric_columns: Vec<String>,
}

impl SourceConfig {
    /// A configuration with default delimiter and numeric columns.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            delimiter: default_delimiter(),
            numeric_columns: default_numeric_columns(),
        }
    }

    /// Parses and validates YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: SourceConfig =
            serde_yaml::from_str(yaml).map_err(|e| SourceError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| SourceError::config(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&yaml)
    }

    /// Checks the location is non-blank and the delimiter fits in one byte.
    pub fn validate(&self) -> Result<()> {
        if self.location.trim().is_empty() {
            return Err(SourceError::config("location must not be empty"));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(SourceError::config(format!(
                "delimiter '{}' is not a single ASCII character",
                self.delimiter
            )))
        }
    }

    /// The parsed location.
    pub fn location(&self) -> Result<Location> {
        Location::parse(&self.location)
    }

    /// The source for the configured location.
    pub fn source(&self) -> Result<Source> {
        self.location().map(|location| Source::from_location(&location))
    }

    /// A parser using the configured delimiter and numeric columns.
    pub fn parser(&self) -> Result<TabularParser> {
        let schema = Schema::new(self.numeric_columns.iter().cloned());
        Ok(TabularParser::new(schema).delimiter(self.delimiter_byte()?))
    }
}
