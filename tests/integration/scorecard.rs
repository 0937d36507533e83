//! End-to-end report building through the public API.

use fairway::report::{Scorecard, PLACEHOLDER};
use fairway::stats::{StatsCalculator, StatsConfig};
use fairway::storage::{save_rounds, JsonRoundStore};

use crate::memory_store::{rated_round, season, unrated_round, MemoryRoundStore};

fn scorecard(store: MemoryRoundStore) -> Scorecard {
    Scorecard::new(
        Box::new(store),
        "Integration Player".to_string(),
        StatsCalculator::new(StatsConfig::default()),
    )
}

#[test]
fn test_report_tracks_newly_logged_rounds() {
    let store = MemoryRoundStore::new(vec![rated_round(0, 85, 70.0), rated_round(1, 88, 70.0)]);
    let card = scorecard(store.clone());

    let report = card.build().unwrap();
    assert_eq!(report.stats.handicap_index, None);
    assert!(report.handicap_history.is_empty());

    store.push(rated_round(2, 84, 70.0));
    let report = card.build().unwrap();
    // Differentials 15, 18, 14 → 14 - 2
    assert_eq!(report.stats.handicap_index, Some(12.0));
    assert_eq!(report.handicap_history.len(), 1);
    assert_eq!(report.handicap_history[0].label, "Mar 3");
}

#[test]
fn test_report_counts_unrated_rounds() {
    let rounds = season();
    let report = scorecard(MemoryRoundStore::new(rounds.clone())).build().unwrap();

    assert_eq!(report.stats.rounds_played, rounds.len());
    assert_eq!(report.ineligible_rounds, 2);
    assert_eq!(report.score_trend.len(), rounds.len());
    assert!(report.score_trend.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(report.stats.best_score, Some(78));
    assert_eq!(
        report.stats.handicap_index,
        report.handicap_history.last().map(|h| h.handicap)
    );
}

#[test]
fn test_text_report_shows_placeholder_without_handicap() {
    let store = MemoryRoundStore::new(vec![unrated_round(0, 90), unrated_round(1, 79)]);
    let report = scorecard(store).build().unwrap();
    let text = report.to_string();

    assert!(text.contains("Integration Player"));
    assert!(text.contains(PLACEHOLDER));
    assert!(text.contains("Not enough rounds with tee data"));
    assert!(text.contains("Score Progress"));
    assert!(text.contains("79 *"));
}

#[test]
fn test_store_failure_surfaces_as_error() {
    let store = MemoryRoundStore::new(Vec::new());
    store.set_error("connection reset");
    let err = scorecard(store).build().unwrap_err();
    assert!(format!("{err}").contains("connection reset"));
}

#[test]
fn test_report_from_json_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("fairway_it_rounds_{}.json", uuid::Uuid::new_v4()));
    let path = path.to_string_lossy().to_string();

    save_rounds(&season(), Some(&path)).unwrap();
    let card = Scorecard::new(
        Box::new(JsonRoundStore::new(path.clone())),
        "File Player".to_string(),
        StatsCalculator::new(StatsConfig { target_score: 85 }),
    );
    let report = card.build().unwrap();
    assert_eq!(report.stats.rounds_played, season().len());
    assert_eq!(report.stats.target_score, 85);
    assert!(report.stats.handicap_index.is_some());

    std::fs::remove_file(&path).unwrap();
}
