//! Predicate sets, their editing commands and their evaluation.
//!
//! A [`PredicateSet`] is an ordered list of predicates plus one
//! [`Combinator`] applied across the whole list. Sets are values: every
//! [`Command`] produces a new set and leaves the old one untouched, so
//! callers can keep history for undo/redo.
//!
//! # Evaluation Semantics
//!
//! ```text
//! empty set                 → every row
//! any predicate incomplete  → every row
//! AND                       → rows matching all predicates
//! OR                        → rows matching at least one predicate
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SeekerError};
use crate::op::Operator;
use crate::predicate::Predicate;
use crate::registry::ColumnRegistry;
use crate::traits::Row;

/// Boolean mode joining the predicates of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Combinator {
    #[default]
    #[serde(rename = "AND", alias = "And")]
    And,
    #[serde(rename = "OR", alias = "Or")]
    Or,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

impl FromStr for Combinator {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Combinator::And),
            "OR" => Ok(Combinator::Or),
            _ => Err(SeekerError::UnknownCombinator(s.to_string())),
        }
    }
}

impl std::fmt::Display for Combinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edit to a predicate set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Append a predicate on `column` with kind inferred from the registry.
    AddPredicate { column: String },
    /// Set the operator of the predicate at `index`.
    SetOperator { index: usize, operator: Operator },
    /// Set the comparand of the predicate at `index`; empty clears it.
    SetValue { index: usize, value: String },
    /// Remove the predicate at `index`.
    RemovePredicate { index: usize },
    /// Switch the combinator for the whole set.
    SetCombinator(Combinator),
}

/// Authoring state of the filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringState {
    /// No predicates.
    Empty,
    /// At least one predicate.
    Editing,
}

/// Ordered predicates joined by a single combinator.
///
/// # Example
///
/// ```
/// use sieve_seeker::{ColumnRegistry, Command, Operator, PredicateSet, Record};
///
/// let registry = ColumnRegistry::default();
/// let set = PredicateSet::new()
///     .execute(Command::AddPredicate { column: "country".into() }, &registry)?
///     .execute(Command::SetOperator { index: 0, operator: Operator::Is }, &registry)?
///     .execute(Command::SetValue { index: 0, value: "US".into() }, &registry)?;
///
/// let rows = vec![
///     Record::new().with("country", "US"),
///     Record::new().with("country", "IN"),
/// ];
/// assert_eq!(set.filter(&rows).len(), 1);
/// # Ok::<(), sieve_seeker::SeekerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PredicateSet {
    predicates: Vec<Predicate>,
    combinator: Combinator,
}

impl PredicateSet {
    /// Creates an empty set. An empty set matches every row.
    pub fn new() -> Self {
        PredicateSet::default()
    }

    /// Creates a set from predicates and a combinator.
    pub fn from_parts(predicates: Vec<Predicate>, combinator: Combinator) -> Self {
        PredicateSet {
            predicates,
            combinator,
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns `true` if any predicate is still incomplete.
    pub fn has_incomplete(&self) -> bool {
        self.predicates.iter().any(|p| !p.is_complete())
    }

    pub fn state(&self) -> AuthoringState {
        if self.predicates.is_empty() {
            AuthoringState::Empty
        } else {
            AuthoringState::Editing
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Applies a command, returning the edited set.
    ///
    /// Fails with [`SeekerError::PredicateRejected`] when adding while the
    /// last predicate is incomplete, [`SeekerError::UnknownColumn`] when
    /// adding a column the registry does not know,
    /// [`SeekerError::IllegalOperator`] when the operator does not fit the
    /// predicate's kind, and [`SeekerError::IndexOutOfRange`] for a bad index.
    pub fn execute(&self, command: Command, registry: &ColumnRegistry) -> Result<PredicateSet> {
        let mut next = self.clone();
        match command {
            Command::AddPredicate { column } => {
                if let Some(last) = self.predicates.last() {
                    if !last.is_complete() {
                        return Err(SeekerError::PredicateRejected {
                            index: self.predicates.len() - 1,
                        });
                    }
                }
                let kind = registry.value_kind(&column)?;
                next.predicates.push(Predicate::new(column, kind));
            }
            Command::SetOperator { index, operator } => {
                let predicate = next.predicate_mut(index)?;
                if !operator.is_legal_for(predicate.kind) {
                    return Err(SeekerError::IllegalOperator {
                        op: operator.label(),
                        kind: predicate.kind.as_str(),
                    });
                }
                predicate.operator = Some(operator);
            }
            Command::SetValue { index, value } => {
                let predicate = next.predicate_mut(index)?;
                predicate.comparand = if value.is_empty() { None } else { Some(value) };
            }
            Command::RemovePredicate { index } => {
                next.predicate_mut(index)?;
                next.predicates.remove(index);
            }
            Command::SetCombinator(combinator) => {
                next.combinator = combinator;
            }
        }
        Ok(next)
    }

    fn predicate_mut(&mut self, index: usize) -> Result<&mut Predicate> {
        let len = self.predicates.len();
        self.predicates
            .get_mut(index)
            .ok_or(SeekerError::IndexOutOfRange { index, len })
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Tests a single row against the whole set.
    ///
    /// Does not apply the incomplete-set gate; see [`PredicateSet::filter`].
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        match self.combinator {
            Combinator::And => self.predicates.iter().all(|p| p.evaluate(row)),
            Combinator::Or => self.predicates.iter().any(|p| p.evaluate(row)),
        }
    }

    /// Filters rows, preserving their order.
    ///
    /// Returns every row unchanged when the set is empty or when any
    /// predicate is incomplete, so a half-built filter never hides data.
    pub fn filter<'a, R: Row>(&self, rows: &'a [R]) -> Vec<&'a R> {
        let refs: Vec<&'a R> = rows.iter().collect();
        self.filter_refs(&refs)
    }

    /// Like [`PredicateSet::filter`], for rows that are already borrowed.
    pub fn filter_refs<'a, R: Row>(&self, rows: &[&'a R]) -> Vec<&'a R> {
        if self.predicates.is_empty() {
            return rows.to_vec();
        }
        if self.has_incomplete() {
            debug!(predicates = self.predicates.len(), "incomplete filter, passing all rows");
            return rows.to_vec();
        }

        let kept: Vec<&'a R> = rows.iter().copied().filter(|row| self.matches(*row)).collect();
        debug!(
            combinator = %self.combinator,
            predicates = self.predicates.len(),
            kept = kept.len(),
            total = rows.len(),
            "applied filters"
        );
        kept
    }
}
