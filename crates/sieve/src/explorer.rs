//! The interactive query session.
//!
//! An [`Explorer`] owns everything a report table needs between user
//! actions: the load state, the column registry, the predicate set, the
//! search map and the sort spec. UI events arrive as [`ExplorerCommand`]s;
//! the rows to show are recomputed on demand by [`Explorer::view`].

use serde::{Deserialize, Serialize};
use sieve_seeker::{
    narrow_domain, project, ColumnRegistry, Command, Dataset, PredicateSet, Record, SearchMap,
    SeekerError, SortSpec, TabularParser, View, ViewStats,
};
use sieve_source::{load, LoadState, SourceError, TextSource};
use tracing::{debug, warn};

/// Errors surfaced by an [`Explorer`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Seeker(#[from] SeekerError),

    #[error(transparent)]
    Source(#[from] SourceError),

    /// The dataset is still loading.
    #[error("Dataset is not loaded yet")]
    NotReady,

    /// Loading failed; holds the load error message.
    #[error("{0}")]
    LoadFailed(String),
}

/// Result type for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// A user action on the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplorerCommand {
    /// Edit the predicate set.
    Filter(Command),
    /// Set the search query for a column; an empty query clears it.
    SetSearch { column: String, query: String },
    /// Header click: sort by `column`, or flip direction if already sorted by it.
    SetSort { column: String },
    /// Remove the sort.
    ClearSort,
}

impl From<Command> for ExplorerCommand {
    fn from(command: Command) -> Self {
        ExplorerCommand::Filter(command)
    }
}

/// Query session over one dataset.
///
/// # Example
///
/// ```
/// use sieve::{parse_csv, Command, Explorer, Operator};
///
/// let mut explorer = Explorer::new();
/// explorer.settle(Ok(parse_csv("id,country,impressions\n1,US,10\n2,IN,5").unwrap()));
///
/// explorer.dispatch(Command::AddPredicate { column: "country".into() }.into()).unwrap();
/// explorer.dispatch(Command::SetOperator { index: 0, operator: Operator::Is }.into()).unwrap();
/// explorer.dispatch(Command::SetValue { index: 0, value: "in".into() }.into()).unwrap();
///
/// let rows = explorer.rows().unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("id").unwrap().to_string(), "2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Explorer {
    registry: ColumnRegistry,
    state: LoadState,
    predicates: PredicateSet,
    search: SearchMap,
    sort: SortSpec,
}

impl Explorer {
    /// A loading session with the built-in column registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A loading session with a custom column registry.
    pub fn with_registry(registry: ColumnRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Records the load outcome. See [`LoadState::settle`].
    pub fn settle(&mut self, outcome: sieve_source::Result<Dataset>) -> bool {
        let settled = self.state.settle(outcome);
        if !settled {
            debug!("load outcome ignored, session already settled");
        }
        settled
    }

    /// Fetches and parses the dataset, then settles the session with the result.
    pub async fn load_from<S: TextSource>(&mut self, source: &S, parser: &TabularParser) -> bool {
        let outcome = load(source, parser).await;
        self.settle(outcome)
    }

    /// Puts the session back into `Loading` for a new, independent load.
    ///
    /// The old dataset is dropped. Predicates, searches and the sort are kept
    /// and apply to whatever dataset the new load settles with.
    pub fn begin_load(&mut self) {
        debug!(ready = self.state.is_ready(), "starting a fresh load");
        self.state = LoadState::new();
    }

    /// Re-fetches and replaces the dataset, keeping the query state.
    pub async fn reload<S: TextSource>(&mut self, source: &S, parser: &TabularParser) -> bool {
        self.begin_load();
        self.load_from(source, parser).await
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state
    }

    /// The loaded dataset.
    pub fn dataset(&self) -> Result<&Dataset> {
        match &self.state {
            LoadState::Ready(dataset) => Ok(dataset),
            LoadState::Loading => Err(ExplorerError::NotReady),
            LoadState::Error(message) => Err(ExplorerError::LoadFailed(message.clone())),
        }
    }

    // ========================================================================
    // Query state
    // ========================================================================

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    pub fn predicates(&self) -> &PredicateSet {
        &self.predicates
    }

    pub fn search(&self) -> &SearchMap {
        &self.search
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Applies a user action.
    ///
    /// A failed predicate edit leaves the session unchanged and returns the
    /// error so the caller can show it. Search and sort never fail; an
    /// unknown column simply has no effect on the view.
    pub fn dispatch(&mut self, command: ExplorerCommand) -> Result<()> {
        match command {
            ExplorerCommand::Filter(command) => {
                match self.predicates.execute(command, &self.registry) {
                    Ok(next) => self.predicates = next,
                    Err(err) => {
                        warn!(error = %err, "filter command rejected");
                        return Err(err.into());
                    }
                }
            }
            ExplorerCommand::SetSearch { column, query } => {
                self.search.set(column, query);
            }
            ExplorerCommand::SetSort { column } => {
                self.sort.request(&column);
            }
            ExplorerCommand::ClearSort => {
                self.sort.clear();
            }
        }
        Ok(())
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Rows to display with per-stage counts.
    pub fn view(&self) -> Result<View<'_>> {
        let dataset = self.dataset()?;
        Ok(project(dataset, &self.predicates, &self.search, &self.sort))
    }

    /// Rows to display, in display order.
    pub fn rows(&self) -> Result<Vec<&Record>> {
        self.view().map(|view| view.rows)
    }

    pub fn stats(&self) -> Result<ViewStats> {
        self.view().map(|view| view.stats)
    }

    /// Values offered for a predicate on `column`.
    pub fn value_domain(&self, column: &str) -> Result<Vec<String>> {
        let dataset = self.dataset()?;
        Ok(self.registry.value_domain(column, dataset))
    }

    /// [`Explorer::value_domain`] narrowed to values containing `query`.
    pub fn value_domain_matching(&self, column: &str, query: &str) -> Result<Vec<String>> {
        let values = self.value_domain(column)?;
        Ok(narrow_domain(&values, query)
            .into_iter()
            .map(str::to_string)
            .collect())
    }
}
