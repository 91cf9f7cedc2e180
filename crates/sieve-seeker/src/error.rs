//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when parsing datasets or editing predicate sets.
///
/// Per-row evaluation never produces an error: a missing field or a bad
/// number degrades to a defined boolean outcome instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeekerError {
    /// The payload could not be turned into a dataset.
    #[error("{0}")]
    Parse(String),

    /// A new predicate was requested while the last one is still incomplete.
    #[error("Please complete the current filter before adding a new one (filter {index} is incomplete)")]
    PredicateRejected { index: usize },

    /// A column name is not known to the schema or registry.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// Operator is not legal for the predicate's value kind.
    #[error("operator '{op}' is not valid for {kind} values")]
    IllegalOperator {
        op: &'static str,
        kind: &'static str,
    },

    /// A command referenced a predicate position that does not exist.
    #[error("filter index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Operator label did not match any known operator.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// Combinator label was neither AND nor OR.
    #[error("unknown combinator '{0}'")]
    UnknownCombinator(String),
}

impl SeekerError {
    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<csv::Error> for SeekerError {
    fn from(err: csv::Error) -> Self {
        SeekerError::Parse(err.to_string())
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
