//! Typed cell values, records and datasets.
//!
//! A [`Record`] is one parsed row: a mapping from column name to a [`Value`].
//! A [`Dataset`] is the ordered sequence of records produced by a single
//! parse, together with the header's column order. Neither is mutated after
//! construction; every downstream stage borrows them.

use std::collections::HashMap;
use std::fmt;

/// Value of one cell.
///
/// Columns classified numeric by the [`Schema`](crate::Schema) always hold
/// `Number`; everything else holds `Text` exactly as it appeared in the
/// source (no trimming, no case folding).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric value. A non-numeric source cell is stored as `NaN`.
    Number(f64),
    /// Textual value, verbatim.
    Text(String),
}

impl Value {
    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Extracts the number, if present.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the text, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parses a raw numeric cell.
    ///
    /// An empty cell is `0`, not missing. A cell that does not parse as a
    /// float becomes `NaN`; surrounding whitespace is ignored.
    pub fn parse_number(raw: &str) -> Value {
        if raw.is_empty() {
            return Value::Number(0.0);
        }
        Value::Number(raw.trim().parse::<f64>().unwrap_or(f64::NAN))
    }
}

impl fmt::Display for Value {
    /// Numbers render with the shortest round-tripping decimal form
    /// (`100`, `0.05`), text renders verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// One parsed row.
///
/// Columns absent from the source line (a short row) are simply absent
/// here: [`Record::get`] returns `None` for them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder-style insert, mainly for tests and fixtures.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(column.into(), value.into());
        self
    }

    pub(crate) fn insert(&mut self, column: String, value: Value) {
        self.fields.insert(column, value);
    }

    /// Looks up a column's value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Number of populated columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no column is populated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered sequence of records from one successful parse.
///
/// Insertion order is source row order. A dataset is replaced wholesale on
/// re-fetch and never partially mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from header columns and records.
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { columns, records }
    }

    /// Header column names, in source order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns `true` if the header names this column.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// All records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Borrowed view of every record, the input shape of the pipeline stages.
    pub fn rows(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
