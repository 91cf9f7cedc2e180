//! Column typing.
//!
//! The [`Schema`] decides, per column name, whether cells are parsed as
//! numbers or kept as text. It is independent of the predicate menu's
//! bucket classification, which lives in [`ColumnRegistry`](crate::ColumnRegistry).

use serde::{Deserialize, Serialize};

/// The metric columns parsed as numbers by the default schema.
pub const METRIC_COLUMNS: &[&str] = &[
    "ipm",
    "ctr",
    "spend",
    "impressions",
    "clicks",
    "cpm",
    "cost_per_click",
    "cost_per_install",
    "installs",
];

/// Always textual, whatever its content looks like.
pub const TAGS_COLUMN: &str = "tags";

/// Column read by the activity gate.
pub const ACTIVITY_COLUMN: &str = "impressions";

/// Storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
        }
    }
}

/// Value kind of a predicate, derived from the column's registry bucket.
///
/// Determines the legal operator vocabulary: `Numeric` takes the numeric
/// operators, every other kind takes the text conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueKind {
    Numeric,
    Tag,
    Category,
    #[default]
    FreeText,
}

impl ValueKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Numeric)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Numeric => "numeric",
            ValueKind::Tag => "tag",
            ValueKind::Category => "category",
            ValueKind::FreeText => "free text",
        }
    }
}

/// Maps column names to storage kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    numeric: Vec<String>,
}

impl Schema {
    /// Creates a schema treating exactly `numeric` as numeric columns.
    ///
    /// [`TAGS_COLUMN`] stays textual even if listed.
    pub fn new<I, S>(numeric: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema {
            numeric: numeric.into_iter().map(Into::into).collect(),
        }
    }

    /// Kind of a column. Anything not listed as numeric is text.
    pub fn kind_of(&self, column: &str) -> ColumnKind {
        if column != TAGS_COLUMN && self.numeric.iter().any(|c| c == column) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }

    /// The configured numeric columns.
    pub fn numeric_columns(&self) -> &[String] {
        &self.numeric
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::new(METRIC_COLUMNS.iter().copied())
    }
}

/// One column of the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayColumn {
    pub label: &'static str,
    pub key: &'static str,
    pub numeric: bool,
}

const fn col(label: &'static str, key: &'static str, numeric: bool) -> DisplayColumn {
    DisplayColumn { label, key, numeric }
}

static DISPLAY_COLUMNS: [DisplayColumn; 13] = [
    col("Creative Name", "creative_name", false),
    col("Campaign", "campaign", false),
    col("Ad Group", "ad_group", false),
    col("Country", "country", false),
    col("Impressions", "impressions", true),
    col("Clicks", "clicks", true),
    col("CTR (%)", "ctr", true),
    col("Installs", "installs", true),
    col("IPM", "ipm", true),
    col("Spend ($)", "spend", true),
    col("CPM ($)", "cpm", true),
    col("CPC ($)", "cost_per_click", true),
    col("CPI ($)", "cost_per_install", true),
];

/// Columns of the results table, in display order.
pub fn display_columns() -> &'static [DisplayColumn] {
    &DISPLAY_COLUMNS
}
