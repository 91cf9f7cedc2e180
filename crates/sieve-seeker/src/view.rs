//! The display pipeline.
//!
//! Rows that survived the predicate set go through three stages, in order:
//!
//! ```text
//! activity gate  →  per-column search  →  sort
//! ```
//!
//! Every stage is pure. [`project`] runs predicate set and pipeline together
//! and is a function of its four inputs only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ordering::SortSpec;
use crate::predicate_set::PredicateSet;
use crate::schema::ACTIVITY_COLUMN;
use crate::traits::Row;
use crate::value::{Dataset, Record, Value};

/// Returns `true` if the row's impressions are strictly positive.
///
/// Absent, non-positive and `NaN` impressions all fail.
pub fn is_active<R: Row + ?Sized>(row: &R) -> bool {
    matches!(row.field(ACTIVITY_COLUMN), Some(Value::Number(n)) if *n > 0.0)
}

/// Drops every row without positive impressions.
pub fn activity_gate<'a, R: Row>(rows: &[&'a R]) -> Vec<&'a R> {
    rows.iter().copied().filter(|row| is_active(*row)).collect()
}

/// Free-text search queries keyed by column.
///
/// A query that is empty or only whitespace imposes no constraint. Active
/// queries compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMap {
    queries: BTreeMap<String, String>,
}

impl SearchMap {
    pub fn new() -> Self {
        SearchMap::default()
    }

    /// Builder-style [`SearchMap::set`].
    pub fn with(mut self, column: impl Into<String>, query: impl Into<String>) -> Self {
        self.set(column, query);
        self
    }

    /// Sets the query for a column. An empty query removes it.
    pub fn set(&mut self, column: impl Into<String>, query: impl Into<String>) {
        let column = column.into();
        let query = query.into();
        if query.is_empty() {
            self.queries.remove(&column);
        } else {
            self.queries.insert(column, query);
        }
    }

    /// The query for a column, as typed.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.queries.get(column).map(String::as_str)
    }

    /// Queries that constrain the view.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.queries
            .iter()
            .filter(|(_, q)| !q.trim().is_empty())
            .map(|(c, q)| (c.as_str(), q.as_str()))
    }

    /// Returns `true` if no query constrains the view.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Tests one cell against one query.
    ///
    /// Text cells match when the lowercased cell contains the lowercased
    /// query. Number cells match when their decimal form contains the raw
    /// query. Absent cells never match.
    ///
    /// The decimal form is Rust's `f64` `Display`: never exponent notation
    /// (`1e21` reads as `1000000000000000000000`, `1e-7` as `0.0000001`),
    /// `-0.0` reads as `-0`, infinity as `inf` and `NaN` as `NaN`.
    pub fn cell_matches(value: Option<&Value>, query: &str) -> bool {
        match value {
            Some(Value::Text(s)) => s.to_lowercase().contains(&query.to_lowercase()),
            Some(Value::Number(n)) => n.to_string().contains(query),
            None => false,
        }
    }

    /// Keeps rows matching every active query.
    ///
    /// Queries on columns missing from `columns` (the dataset header) are
    /// ignored.
    pub fn apply<'a, R: Row>(&self, rows: &[&'a R], columns: &[String]) -> Vec<&'a R> {
        let queries: Vec<(&str, &str)> = self
            .active()
            .filter(|(column, _)| {
                let known = columns.iter().any(|c| c == column);
                if !known {
                    debug!(column, "search on unknown column ignored");
                }
                known
            })
            .collect();

        if queries.is_empty() {
            return rows.to_vec();
        }

        rows.iter()
            .copied()
            .filter(|row| {
                queries
                    .iter()
                    .all(|(column, query)| Self::cell_matches(row.field(column), query))
            })
            .collect()
    }
}

/// Row counts at each stage, for "Showing X of Y" style summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewStats {
    /// Rows after the predicate set.
    pub total: usize,
    /// Rows after the activity gate.
    pub active: usize,
    /// Rows after search; equal to the number displayed.
    pub shown: usize,
}

/// The rows to display plus stage counts.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub rows: Vec<&'a Record>,
    pub stats: ViewStats,
}

/// Computes the display rows from a dataset and the current query state.
///
/// A sort on a column the dataset header does not name is ignored.
pub fn project<'a>(
    dataset: &'a Dataset,
    predicates: &PredicateSet,
    search: &SearchMap,
    sort: &SortSpec,
) -> View<'a> {
    let filtered = predicates.filter(dataset.records());
    let active = activity_gate(&filtered);
    let searched = search.apply(&active, dataset.columns());
    let stats = ViewStats {
        total: filtered.len(),
        active: active.len(),
        shown: searched.len(),
    };

    let rows = match sort.column() {
        Some(column) if !dataset.has_column(column) => {
            debug!(column, "sort on unknown column ignored");
            searched
        }
        _ => sort.apply(searched),
    };

    View { rows, stats }
}
