//! Field access by runtime column name.
//!
//! Predicate evaluation, search and sort only need to look a value up by
//! column name. The [`Row`] trait is that seam: [`Record`] implements it,
//! and callers holding their own row types can implement it too.

use crate::value::{Record, Value};

/// A row whose cells can be looked up by column name.
///
/// # Manual Implementation
///
/// ```
/// use sieve_seeker::{Row, Value};
///
/// struct Creative {
///     country: Value,
///     impressions: Value,
/// }
///
/// impl Row for Creative {
///     fn field(&self, column: &str) -> Option<&Value> {
///         match column {
///             "country" => Some(&self.country),
///             "impressions" => Some(&self.impressions),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Row {
    /// Returns the value of a column, or `None` if the row has no such column.
    fn field(&self, column: &str) -> Option<&Value>;
}

impl Row for Record {
    fn field(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, column: &str) -> Option<&Value> {
        (**self).field(column)
    }
}
