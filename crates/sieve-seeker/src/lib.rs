//! Sieve Seeker - filtering, searching and sorting for flat tabular data.
//!
//! Seeker turns delimited text into typed records and narrows them through a
//! composable set of predicates, then projects them into display order. It
//! provides:
//!
//! - A delimited-text parser that types cells against a column [`Schema`]
//! - A [`ColumnRegistry`] classifying columns into menu buckets
//! - [`Predicate`]s with type-aware evaluation
//! - [`PredicateSet`]s joined by AND/OR and edited through [`Command`]s
//! - A view pipeline: activity gate, per-column search, stable single-key sort
//!
//! # Quick Start
//!
//! ```rust
//! use sieve_seeker::{
//!     parse_csv, project, ColumnRegistry, Command, Operator, PredicateSet, SearchMap, SortSpec,
//! };
//!
//! let dataset = parse_csv(
//!     "creative_id,creative_name,country,impressions,ctr\n\
//!      1,A,US,100,0.05\n\
//!      2,B,IN,0,0.10\n\
//!      3,C,US,50,0.20",
//! )?;
//!
//! let registry = ColumnRegistry::default();
//! let filters = PredicateSet::new()
//!     .execute(Command::AddPredicate { column: "country".into() }, &registry)?
//!     .execute(Command::SetOperator { index: 0, operator: Operator::Is }, &registry)?
//!     .execute(Command::SetValue { index: 0, value: "US".into() }, &registry)?;
//!
//! let mut sort = SortSpec::new();
//! sort.request("impressions");
//!
//! let view = project(&dataset, &filters, &SearchMap::new(), &sort);
//! let ids: Vec<String> = view
//!     .rows
//!     .iter()
//!     .map(|row| row.get("creative_id").unwrap().to_string())
//!     .collect();
//! assert_eq!(ids, ["3", "1"]);
//! # Ok::<(), sieve_seeker::SeekerError>(())
//! ```
//!
//! # Predicate Semantics
//!
//! | Cell | Operators | Comparison |
//! |------|-----------|------------|
//! | Number | `Equals`, `LessThan`, `GreaterThan` | comparand parsed as float, exact |
//! | Text | `Is`, `IsNot`, `Contains`, `DoesNotContain` | case-insensitive |
//!
//! An incomplete predicate matches every row, a predicate on a column the
//! row lacks matches none, and a set containing any incomplete predicate
//! passes the dataset through untouched.

mod domain;
mod error;
mod op;
mod ordering;
mod parse;
mod predicate;
mod predicate_set;
mod registry;
mod schema;
mod traits;
mod value;
mod view;

// Re-export public API
pub use domain::{narrow_domain, DistinctValues, StaticVocabulary, ValueDomain};
pub use error::{Result, SeekerError};
pub use op::Operator;
pub use ordering::{compare_values, Dir, SortSpec};
pub use parse::{parse_csv, TabularParser};
pub use predicate::Predicate;
pub use predicate_set::{AuthoringState, Combinator, Command, PredicateSet};
pub use registry::{Bucket, ColumnRegistry};
pub use schema::{
    display_columns, ColumnKind, DisplayColumn, Schema, ValueKind, ACTIVITY_COLUMN, METRIC_COLUMNS,
    TAGS_COLUMN,
};
pub use traits::Row;
pub use value::{Dataset, Record, Value};
pub use view::{activity_gate, is_active, project, SearchMap, View, ViewStats};
