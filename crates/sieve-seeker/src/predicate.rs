//! Single filter conditions.
//!
//! A [`Predicate`] names a column, an operator and a comparand. Each part
//! may still be unset while the user is building the filter; such a
//! predicate is *incomplete* and imposes no constraint.

use serde::{Deserialize, Deserializer, Serialize};

use crate::op::Operator;
use crate::schema::ValueKind;
use crate::traits::Row;
use crate::value::Value;

/// One filter condition over one column.
///
/// # Example
///
/// ```
/// use sieve_seeker::{Operator, Predicate, Record, ValueKind};
///
/// let predicate = Predicate::new("country", ValueKind::Category)
///     .with_operator(Operator::Is)
///     .with_comparand("us");
///
/// let row = Record::new().with("country", "US");
/// assert!(predicate.is_complete());
/// assert!(predicate.evaluate(&row));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Predicate {
    /// The column to compare.
    #[serde(default, deserialize_with = "deserialize_part")]
    pub column: Option<String>,
    /// Value kind inferred from the column's registry bucket.
    pub kind: ValueKind,
    /// The comparison operator.
    pub operator: Option<Operator>,
    /// The raw comparand as typed or picked by the user.
    #[serde(default, deserialize_with = "deserialize_part")]
    pub comparand: Option<String>,
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn deserialize_part<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_empty))
}

/// A part counts as set only when it holds a non-empty string.
fn set_part(part: &Option<String>) -> Option<&str> {
    part.as_deref().filter(|s| !s.is_empty())
}

impl Predicate {
    /// Creates a predicate on `column` with no operator and no comparand.
    pub fn new(column: impl Into<String>, kind: ValueKind) -> Self {
        Predicate {
            column: non_empty(column.into()),
            kind,
            operator: None,
            comparand: None,
        }
    }

    /// Sets the operator.
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Sets the comparand. An empty string leaves it unset.
    pub fn with_comparand(mut self, comparand: impl Into<String>) -> Self {
        self.comparand = non_empty(comparand.into());
        self
    }

    /// Returns `true` if column, operator and comparand are all set.
    ///
    /// An empty column or comparand counts as unset, however it got there.
    pub fn is_complete(&self) -> bool {
        set_part(&self.column).is_some()
            && self.operator.is_some()
            && set_part(&self.comparand).is_some()
    }

    /// Evaluates this predicate against a row.
    ///
    /// - Incomplete predicate: `true`.
    /// - Column absent from the row: `false`.
    /// - Numeric cell: the comparand is parsed as a float and compared with
    ///   the numeric operators; text conditions are `false`.
    /// - Text cell: compared case-insensitively with the text conditions;
    ///   numeric operators are `false`.
    pub fn evaluate<R: Row + ?Sized>(&self, row: &R) -> bool {
        let (Some(column), Some(operator), Some(comparand)) =
            (set_part(&self.column), self.operator, set_part(&self.comparand))
        else {
            return true;
        };

        match row.field(column) {
            None => false,
            Some(Value::Number(n)) => operator.eval_number(*n, parse_comparand(comparand)),
            Some(Value::Text(s)) => operator.eval_text(s, comparand),
        }
    }
}

/// Unparseable comparands become `NaN`, which no numeric operator matches.
fn parse_comparand(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}
