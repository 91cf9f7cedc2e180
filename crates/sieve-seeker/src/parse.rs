//! Delimited-text parsing.
//!
//! Turns raw text with a header line into a [`Dataset`]. Fields are split on
//! a single fixed delimiter byte with no quoting; numeric columns (per the
//! [`Schema`]) are parsed as floats, everything else is kept verbatim.

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Result, SeekerError};
use crate::schema::{ColumnKind, Schema};
use crate::value::{Dataset, Record, Value};

/// Parser settings.
#[derive(Debug, Clone)]
pub struct TabularParser {
    schema: Schema,
    delimiter: u8,
}

impl TabularParser {
    /// Creates a comma-delimited parser for `schema`.
    pub fn new(schema: Schema) -> Self {
        TabularParser {
            schema,
            delimiter: b',',
        }
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Parses `text` into a dataset.
    ///
    /// The whole payload is trimmed first; if nothing remains the result is
    /// a [`SeekerError::Parse`]. A header with no data lines yields an empty
    /// dataset. Lines shorter than the header leave their trailing columns
    /// absent; extra fields beyond the header are ignored. Blank lines are
    /// skipped. Records end at `\n`, `\r\n` or a lone `\r`.
    pub fn parse(&self, text: &str) -> Result<Dataset> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SeekerError::parse("source is empty"));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::None)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let kinds: Vec<ColumnKind> = columns.iter().map(|c| self.schema.kind_of(c)).collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record = Record::new();
            for ((column, kind), raw) in columns.iter().zip(&kinds).zip(row.iter()) {
                let value = match kind {
                    ColumnKind::Numeric => Value::parse_number(raw),
                    ColumnKind::Text => Value::Text(raw.to_string()),
                };
                record.insert(column.clone(), value);
            }
            records.push(record);
        }

        debug!(columns = columns.len(), rows = records.len(), "parsed dataset");
        Ok(Dataset::new(columns, records))
    }
}

impl Default for TabularParser {
    fn default() -> Self {
        TabularParser::new(Schema::default())
    }
}

/// Parses comma-delimited text with the default schema.
pub fn parse_csv(text: &str) -> Result<Dataset> {
    TabularParser::default().parse(text)
}
