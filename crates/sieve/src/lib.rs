//! # Sieve - Filter, Search and Sort Campaign Reports
//!
//! Sieve loads a delimiter-separated performance report once and answers
//! the three questions a report table asks after every user action: which
//! rows pass the filters, which of those match the column searches, and in
//! what order to show them.
//!
//! The work is split across three crates, all re-exported here:
//!
//! - [`sieve_seeker`]: values, parser, column registry, predicates and the
//!   view pipeline. Pure and synchronous.
//! - [`sieve_source`]: one-shot fetch from a file or URL, YAML source
//!   configuration and the load-state machine.
//! - this crate: the [`Explorer`] session tying them together, plus
//!   [`telemetry`] for log output.
//!
//! ## Quick Start
//!
//! ```rust
//! use sieve::{Command, Explorer, ExplorerCommand, Operator, StaticSource, TabularParser};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = StaticSource::text(
//!     "creative_id,country,impressions,ctr\n1,US,100,0.05\n2,IN,0,0.10\n3,US,50,0.20",
//! );
//!
//! let mut explorer = Explorer::new();
//! explorer.load_from(&source, &TabularParser::default()).await;
//!
//! explorer.dispatch(Command::AddPredicate { column: "country".into() }.into()).unwrap();
//! explorer.dispatch(Command::SetOperator { index: 0, operator: Operator::Is }.into()).unwrap();
//! explorer.dispatch(Command::SetValue { index: 0, value: "US".into() }.into()).unwrap();
//! explorer.dispatch(ExplorerCommand::SetSort { column: "impressions".into() }).unwrap();
//!
//! let ids: Vec<String> = explorer
//!     .rows()
//!     .unwrap()
//!     .iter()
//!     .map(|row| row.get("creative_id").unwrap().to_string())
//!     .collect();
//! assert_eq!(ids, ["3", "1"]);
//! # });
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! source text ─▶ Dataset ─▶ predicate set ─▶ activity gate ─▶ search ─▶ sort ─▶ rows
//! ```
//!
//! A predicate set with any incomplete predicate passes every row. The
//! activity gate always drops rows whose `impressions` are not positive.

mod explorer;
pub mod telemetry;

pub use explorer::{Explorer, ExplorerCommand, ExplorerError, Result};

pub use sieve_seeker;
pub use sieve_source;

pub use sieve_seeker::{
    compare_values, display_columns, narrow_domain, parse_csv, project, AuthoringState, Bucket,
    ColumnKind, ColumnRegistry, Combinator, Command, Dataset, Dir, DisplayColumn, Operator,
    Predicate, PredicateSet, Record, Row, Schema, SearchMap, SeekerError, SortSpec,
    TabularParser, Value, ValueDomain, ValueKind, View, ViewStats,
};
pub use sieve_source::{
    load, load_config, FileSource, HttpSource, LoadState, Location, Source, SourceConfig,
    SourceError, StaticSource, TextSource,
};
