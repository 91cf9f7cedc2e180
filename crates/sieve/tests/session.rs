//! Integration tests for the explorer session.

use sieve::{
    load_config, Bucket, Combinator, Command, Explorer, ExplorerCommand, ExplorerError,
    FileSource, Operator, SourceConfig, StaticSource, TabularParser, ViewStats,
};

const REPORT: &str = "creative_id,creative_name,country,os,tags,impressions,clicks,ctr,spend\n\
1,Summer Hero,US,iOS,Hero;Urban,100,5,0.05,12.5\n\
2,Winter Villain,IN,Android,Villain,0,0,0.10,0\n\
3,Spring Sidekick,US,Android,Sidekick;Nature,50,10,0.20,\n\
4,Autumn Hero,DE,iOS,Hero,200,2,0.01,30\n\
5,Night Villain,US,iOS,Villain;Urban,75,,0.0,7.25\n";

async fn explorer() -> Explorer {
    let mut explorer = Explorer::new();
    assert!(
        explorer
            .load_from(&StaticSource::text(REPORT), &TabularParser::default())
            .await
    );
    explorer
}

fn ids(explorer: &Explorer) -> Vec<String> {
    explorer
        .rows()
        .unwrap()
        .iter()
        .map(|r| r.get("creative_id").unwrap().to_string())
        .collect()
}

fn apply(explorer: &mut Explorer, commands: impl IntoIterator<Item = Command>) {
    for command in commands {
        explorer.dispatch(command.into()).unwrap();
    }
}

// ============================================================================
// Test: Loading
// ============================================================================

#[tokio::test]
async fn loads_from_file_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, REPORT.as_bytes()).unwrap();

    let config = SourceConfig::new(file.path().display().to_string());
    let mut explorer = Explorer::new();
    explorer.settle(load_config(&config).await);

    assert_eq!(explorer.dataset().unwrap().len(), 5);
    assert_eq!(ids(&explorer), ["1", "3", "4", "5"]);
}

#[tokio::test]
async fn missing_file_puts_session_in_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut explorer = Explorer::new();
    explorer
        .load_from(&FileSource::new(dir.path().join("gone.csv")), &TabularParser::default())
        .await;

    assert!(explorer.load_state().is_error());
    assert!(matches!(explorer.rows(), Err(ExplorerError::LoadFailed(msg)) if msg.contains("gone.csv")));
}

#[tokio::test]
async fn settled_session_ignores_second_load() {
    let mut explorer = explorer().await;
    let reloaded = explorer
        .load_from(&StaticSource::failing("late"), &TabularParser::default())
        .await;
    assert!(!reloaded);
    assert!(explorer.load_state().is_ready());
}

#[tokio::test]
async fn reload_keeps_filters_on_new_rows() {
    let mut explorer = explorer().await;
    apply(
        &mut explorer,
        [
            Command::AddPredicate { column: "country".into() },
            Command::SetOperator { index: 0, operator: Operator::Is },
            Command::SetValue { index: 0, value: "US".into() },
        ],
    );
    assert_eq!(ids(&explorer), ["1", "3", "5"]);

    let refreshed = "creative_id,country,impressions\n10,US,4\n11,IN,9\n12,US,2\n";
    assert!(
        explorer
            .reload(&StaticSource::text(refreshed), &TabularParser::default())
            .await
    );
    assert_eq!(ids(&explorer), ["10", "12"]);
    assert_eq!(explorer.predicates().len(), 1);
}

#[tokio::test]
async fn failed_reload_reports_new_error() {
    let mut explorer = explorer().await;
    explorer
        .reload(&StaticSource::failing("Failed to fetch CSV: 404 Not Found"), &TabularParser::default())
        .await;
    assert_eq!(
        explorer.rows().unwrap_err(),
        ExplorerError::LoadFailed("Failed to fetch CSV: 404 Not Found".into())
    );
}

// ============================================================================
// Test: Filtering
// ============================================================================

#[tokio::test]
async fn numeric_and_text_filters_with_and() {
    let mut explorer = explorer().await;
    apply(
        &mut explorer,
        [
            Command::AddPredicate { column: "os".into() },
            Command::SetOperator { index: 0, operator: Operator::Is },
            Command::SetValue { index: 0, value: "ios".into() },
            Command::AddPredicate { column: "impressions".into() },
            Command::SetOperator { index: 1, operator: Operator::LessThan },
            Command::SetValue { index: 1, value: "150".into() },
        ],
    );
    assert_eq!(ids(&explorer), ["1", "5"]);
}

#[tokio::test]
async fn or_switch_widens_result() {
    let mut explorer = explorer().await;
    apply(
        &mut explorer,
        [
            Command::AddPredicate { column: "country".into() },
            Command::SetOperator { index: 0, operator: Operator::Is },
            Command::SetValue { index: 0, value: "DE".into() },
            Command::AddPredicate { column: "clicks".into() },
            Command::SetOperator { index: 1, operator: Operator::GreaterThan },
            Command::SetValue { index: 1, value: "4".into() },
        ],
    );
    assert_eq!(ids(&explorer), Vec::<String>::new());

    apply(&mut explorer, [Command::SetCombinator(Combinator::Or)]);
    assert_eq!(ids(&explorer), ["1", "3", "4"]);
}

#[tokio::test]
async fn empty_numeric_cell_reads_as_zero() {
    let mut explorer = explorer().await;
    apply(
        &mut explorer,
        [
            Command::AddPredicate { column: "clicks".into() },
            Command::SetOperator { index: 0, operator: Operator::Equals },
            Command::SetValue { index: 0, value: "0".into() },
        ],
    );
    // Row 2 also has zero clicks but no impressions
    assert_eq!(ids(&explorer), ["5"]);
}

#[tokio::test]
async fn tag_contains_filter() {
    let mut explorer = explorer().await;
    apply(
        &mut explorer,
        [
            Command::AddPredicate { column: "Character".into() },
            Command::SetOperator { index: 0, operator: Operator::Contains },
            Command::SetValue { index: 0, value: "hero".into() },
        ],
    );
    // No row has a "Character" column, so every row is excluded
    assert!(ids(&explorer).is_empty());
    assert_eq!(explorer.registry().bucket_of("Character"), Some(Bucket::Tags));
}

#[tokio::test]
async fn illegal_operator_is_rejected() {
    let mut explorer = explorer().await;
    apply(&mut explorer, [Command::AddPredicate { column: "ctr".into() }]);

    let err = explorer
        .dispatch(Command::SetOperator { index: 0, operator: Operator::Contains }.into())
        .unwrap_err();
    assert!(matches!(err, ExplorerError::Seeker(_)));
    assert_eq!(explorer.predicates().predicates()[0].operator, None);
}

// ============================================================================
// Test: Search and sort
// ============================================================================

#[tokio::test]
async fn search_sort_and_stats() {
    let mut explorer = explorer().await;
    explorer
        .dispatch(ExplorerCommand::SetSearch {
            column: "creative_name".into(),
            query: "hero".into(),
        })
        .unwrap();
    explorer
        .dispatch(ExplorerCommand::SetSort { column: "spend".into() })
        .unwrap();
    explorer
        .dispatch(ExplorerCommand::SetSort { column: "spend".into() })
        .unwrap();

    assert_eq!(ids(&explorer), ["4", "1"]);
    assert_eq!(
        explorer.stats().unwrap(),
        ViewStats { total: 5, active: 4, shown: 2 }
    );
    assert_eq!(explorer.sort().indicator("spend"), Some("↓"));
}

#[tokio::test]
async fn unknown_columns_do_not_disturb_view() {
    let mut explorer = explorer().await;
    explorer
        .dispatch(ExplorerCommand::SetSearch {
            column: "budget".into(),
            query: "1".into(),
        })
        .unwrap();
    explorer
        .dispatch(ExplorerCommand::SetSort { column: "budget".into() })
        .unwrap();
    assert_eq!(ids(&explorer), ["1", "3", "4", "5"]);
}

#[tokio::test]
async fn sort_is_stable_for_ties() {
    let mut explorer = explorer().await;
    explorer
        .dispatch(ExplorerCommand::SetSort { column: "os".into() })
        .unwrap();
    assert_eq!(ids(&explorer), ["3", "1", "4", "5"]);

    explorer
        .dispatch(ExplorerCommand::SetSort { column: "os".into() })
        .unwrap();
    assert_eq!(ids(&explorer), ["1", "4", "5", "3"]);
}
