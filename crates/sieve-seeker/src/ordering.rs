//! Sorting of view rows.
//!
//! Provides [`Dir`] for sort direction, [`SortSpec`] for the single active
//! sort key, and [`compare_values`], the total order used to sort cells.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::traits::Row;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Ascending,
    /// Descending order (largest first).
    Descending,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Ascending)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Descending)
    }

    /// The opposite direction.
    pub fn toggle(self) -> Dir {
        match self {
            Dir::Ascending => Dir::Descending,
            Dir::Descending => Dir::Ascending,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Ascending`, returns the ordering unchanged.
    /// For `Descending`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Ascending => ordering,
            Dir::Descending => ordering.reverse(),
        }
    }

    /// Header arrow for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Dir::Ascending => "↑",
            Dir::Descending => "↓",
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Ascending => "ascending",
            Dir::Descending => "descending",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Total order over optional cells.
///
/// Numbers compare numerically with `NaN` after every other number, text
/// compares lexically (case-sensitive), numbers sort before text, and an
/// absent cell sorts after everything.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => compare_numbers(*a, *b),
        (Some(Value::Text(a)), Some(Value::Text(b))) => a.cmp(b),
        (Some(Value::Number(_)), Some(Value::Text(_))) => Ordering::Less,
        (Some(Value::Text(_)), Some(Value::Number(_))) => Ordering::Greater,

        // Absent values sort last
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// The single active sort key.
///
/// Requesting the active column flips its direction; requesting any other
/// column makes it active in ascending order. Nothing else resets it.
///
/// # Example
///
/// ```
/// use sieve_seeker::{Dir, SortSpec};
///
/// let mut sort = SortSpec::default();
/// sort.request("spend");
/// assert_eq!(sort.dir(), Dir::Ascending);
/// sort.request("spend");
/// assert_eq!(sort.dir(), Dir::Descending);
/// sort.request("clicks");
/// assert_eq!((sort.column(), sort.dir()), (Some("clicks"), Dir::Ascending));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    column: Option<String>,
    dir: Dir,
}

impl SortSpec {
    /// An inactive sort.
    pub fn new() -> Self {
        SortSpec::default()
    }

    /// A sort on `column` in `dir`.
    pub fn by(column: impl Into<String>, dir: Dir) -> Self {
        SortSpec {
            column: Some(column.into()),
            dir,
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Handles a click on a column header.
    pub fn request(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.dir = self.dir.toggle();
        } else {
            self.column = Some(column.to_string());
            self.dir = Dir::Ascending;
        }
    }

    /// Deactivates sorting.
    pub fn clear(&mut self) {
        *self = SortSpec::default();
    }

    /// Arrow to show next to `column`'s header, if it is the sort key.
    pub fn indicator(&self, column: &str) -> Option<&'static str> {
        (self.column.as_deref() == Some(column)).then(|| self.dir.indicator())
    }

    /// Sorts rows by the active key.
    ///
    /// The sort is stable: rows with equal keys keep their input order in
    /// both directions. An inactive spec leaves the order untouched.
    pub fn apply<'a, R: Row>(&self, mut rows: Vec<&'a R>) -> Vec<&'a R> {
        if let Some(column) = &self.column {
            rows.sort_by(|a, b| self.dir.apply(compare_values(a.field(column), b.field(column))));
        }
        rows
    }
}
