//! Comparison operators for predicates.
//!
//! The [`Operator`] enum defines the two operator vocabularies: numeric
//! operators for metric columns and textual conditions for everything else.
//! Which vocabulary is legal for a predicate is decided by its
//! [`ValueKind`].

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeekerError;
use crate::schema::ValueKind;

/// Comparison operator for a predicate.
///
/// Serialized with the labels the filter menu shows ("Lesser than",
/// "does not contain", ...). Parsing also accepts the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Numeric operators
    /// Exact numeric equality, no epsilon.
    #[serde(rename = "Equals")]
    Equals,
    /// Strictly less than.
    #[serde(rename = "Lesser than", alias = "LessThan")]
    LessThan,
    /// Strictly greater than.
    #[serde(rename = "Greater than", alias = "GreaterThan")]
    GreaterThan,

    // Text conditions
    /// Case-insensitive equality.
    #[serde(rename = "is", alias = "Is")]
    Is,
    /// Case-insensitive inequality.
    #[serde(rename = "is not", alias = "IsNot")]
    IsNot,
    /// Case-insensitive substring.
    #[serde(rename = "contains", alias = "Contains")]
    Contains,
    /// Negated case-insensitive substring.
    #[serde(rename = "does not contain", alias = "DoesNotContain")]
    DoesNotContain,
}

const NUMERIC_OPERATORS: &[Operator] = &[Operator::Equals, Operator::LessThan, Operator::GreaterThan];

const TEXT_OPERATORS: &[Operator] = &[
    Operator::Is,
    Operator::IsNot,
    Operator::Contains,
    Operator::DoesNotContain,
];

impl Operator {
    /// Returns `true` if this operator compares numbers.
    pub fn is_numeric_op(self) -> bool {
        matches!(self, Operator::Equals | Operator::LessThan | Operator::GreaterThan)
    }

    /// Returns `true` if this operator compares text.
    pub fn is_text_op(self) -> bool {
        !self.is_numeric_op()
    }

    /// Legal operators for a value kind, in menu order.
    pub fn options(kind: ValueKind) -> &'static [Operator] {
        if kind.is_numeric() {
            NUMERIC_OPERATORS
        } else {
            TEXT_OPERATORS
        }
    }

    /// Returns `true` if this operator may be chosen for a predicate of `kind`.
    pub fn is_legal_for(self, kind: ValueKind) -> bool {
        Operator::options(kind).contains(&self)
    }

    /// Evaluates a comparison given an ordering result.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Operator::Equals => ordering == Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::GreaterThan => ordering == Ordering::Greater,
            _ => false, // Not an ordering-based operator
        }
    }

    /// Compares a field number against a comparand.
    ///
    /// `NaN` on either side compares as unordered, so every operator is
    /// `false` against it.
    pub fn eval_number(self, field: f64, comparand: f64) -> bool {
        match field.partial_cmp(&comparand) {
            Some(ordering) => self.eval_ordering(ordering),
            None => false,
        }
    }

    /// Compares field text against a comparand, ignoring case.
    pub fn eval_text(self, field: &str, comparand: &str) -> bool {
        let field = field.to_lowercase();
        let comparand = comparand.to_lowercase();
        match self {
            Operator::Is => field == comparand,
            Operator::IsNot => field != comparand,
            Operator::Contains => field.contains(&comparand),
            Operator::DoesNotContain => !field.contains(&comparand),
            _ => false,
        }
    }

    /// The label shown in the filter menu.
    pub fn label(self) -> &'static str {
        match self {
            Operator::Equals => "Equals",
            Operator::LessThan => "Lesser than",
            Operator::GreaterThan => "Greater than",
            Operator::Is => "is",
            Operator::IsNot => "is not",
            Operator::Contains => "contains",
            Operator::DoesNotContain => "does not contain",
        }
    }

    /// The canonical variant name.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equals => "Equals",
            Operator::LessThan => "LessThan",
            Operator::GreaterThan => "GreaterThan",
            Operator::Is => "Is",
            Operator::IsNot => "IsNot",
            Operator::Contains => "Contains",
            Operator::DoesNotContain => "DoesNotContain",
        }
    }
}

impl FromStr for Operator {
    type Err = SeekerError;

    /// Accepts menu labels and variant names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        NUMERIC_OPERATORS
            .iter()
            .chain(TEXT_OPERATORS)
            .copied()
            .find(|op| {
                op.label().eq_ignore_ascii_case(wanted) || op.as_str().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SeekerError::UnknownOperator(s.to_string()))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_type_checks() {
        assert!(Operator::Equals.is_numeric_op());
        assert!(Operator::GreaterThan.is_numeric_op());
        assert!(!Operator::Contains.is_numeric_op());

        assert!(Operator::Is.is_text_op());
        assert!(Operator::DoesNotContain.is_text_op());
        assert!(!Operator::LessThan.is_text_op());
    }

    #[test]
    fn options_follow_kind() {
        assert_eq!(Operator::options(ValueKind::Numeric), NUMERIC_OPERATORS);
        assert_eq!(Operator::options(ValueKind::Tag), TEXT_OPERATORS);
        assert_eq!(Operator::options(ValueKind::Category), TEXT_OPERATORS);
        assert_eq!(Operator::options(ValueKind::FreeText), TEXT_OPERATORS);

        assert!(Operator::LessThan.is_legal_for(ValueKind::Numeric));
        assert!(!Operator::LessThan.is_legal_for(ValueKind::Category));
        assert!(!Operator::Is.is_legal_for(ValueKind::Numeric));
    }

    #[test]
    fn op_eval_ordering() {
        assert!(Operator::Equals.eval_ordering(Ordering::Equal));
        assert!(!Operator::Equals.eval_ordering(Ordering::Less));

        assert!(Operator::LessThan.eval_ordering(Ordering::Less));
        assert!(!Operator::LessThan.eval_ordering(Ordering::Equal));

        assert!(Operator::GreaterThan.eval_ordering(Ordering::Greater));
        assert!(!Operator::GreaterThan.eval_ordering(Ordering::Equal));

        // Text conditions never match an ordering
        assert!(!Operator::Is.eval_ordering(Ordering::Equal));
    }

    #[test]
    fn numbers_are_exact_and_strict() {
        assert!(Operator::Equals.eval_number(0.1 + 0.2, 0.1 + 0.2));
        assert!(!Operator::Equals.eval_number(0.1 + 0.2, 0.3));
        assert!(!Operator::LessThan.eval_number(5.0, 5.0));
        assert!(!Operator::GreaterThan.eval_number(5.0, 5.0));
        assert!(Operator::GreaterThan.eval_number(5.5, 5.0));
    }

    #[test]
    fn nan_never_matches() {
        for op in NUMERIC_OPERATORS {
            assert!(!op.eval_number(f64::NAN, 1.0));
            assert!(!op.eval_number(1.0, f64::NAN));
            assert!(!op.eval_number(f64::NAN, f64::NAN));
        }
    }

    #[test]
    fn text_ignores_case() {
        assert!(Operator::Is.eval_text("US", "us"));
        assert!(!Operator::IsNot.eval_text("US", "us"));
        assert!(Operator::Contains.eval_text("Summer Sale", "SALE"));
        assert!(Operator::DoesNotContain.eval_text("Summer Sale", "winter"));
        assert!(!Operator::Equals.eval_text("5", "5"));
    }

    #[test]
    fn parse_labels_and_names() {
        assert_eq!("Lesser than".parse::<Operator>().unwrap(), Operator::LessThan);
        assert_eq!("LessThan".parse::<Operator>().unwrap(), Operator::LessThan);
        assert_eq!("does not contain".parse::<Operator>().unwrap(), Operator::DoesNotContain);
        assert_eq!("IS NOT".parse::<Operator>().unwrap(), Operator::IsNot);
        assert!(matches!(
            "between".parse::<Operator>(),
            Err(SeekerError::UnknownOperator(_))
        ));
    }

    #[test]
    fn op_display() {
        assert_eq!(Operator::GreaterThan.to_string(), "Greater than");
        assert_eq!(Operator::IsNot.to_string(), "is not");
    }
}
