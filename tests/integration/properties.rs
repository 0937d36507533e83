//! Behavioural properties of the handicap engine over whole round sets.

use fairway::handicap::{compute_history, compute_index};
use fairway::types::{Round, Tee};

use crate::memory_store::{day, rated_round, season, unrated_round};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Deterministic permutation without pulling in a RNG.
fn shuffled(rounds: &[Round], stride: usize) -> Vec<Round> {
    let n = rounds.len();
    (0..n).map(|i| rounds[(i * stride + 3) % n].clone()).collect()
}

#[test]
fn test_threshold_below_three_eligible() {
    for n in 0..3 {
        let mut rounds: Vec<Round> = (0..n).map(|i| rated_round(i, 85, 70.0)).collect();
        // Unrated rounds never lift the count
        rounds.extend((10..15).map(|i| unrated_round(i, 80)));
        assert_eq!(compute_index(&rounds), None, "{n} eligible");
        assert!(compute_history(&rounds).is_empty(), "{n} eligible");
    }
}

#[test]
fn test_index_equals_last_history_point() {
    let rounds = season();
    for len in 0..=rounds.len() {
        let prefix = &rounds[..len];
        let history = compute_history(prefix);
        match (compute_index(prefix), history.last()) {
            (None, None) => {}
            (Some(index), Some(last)) => assert_close(index, last.handicap),
            (index, last) => panic!("index {index:?} disagrees with history tail {last:?}"),
        }
    }
}

#[test]
fn test_appending_later_round_extends_history_only() {
    let mut rounds = season();
    let before = compute_history(&rounds);

    rounds.push(rated_round(400, 77, 70.0));
    let after = compute_history(&rounds);

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.last().unwrap().date, day(400));
}

#[test]
fn test_unrated_rounds_excluded_wherever_they_sit() {
    let rated: Vec<Round> = (0..8).map(|i| rated_round(i * 2, 80 + i as u32, 70.0)).collect();

    let mut mixed = rated.clone();
    mixed.insert(0, unrated_round(-5, 60));
    mixed.insert(4, unrated_round(5, 61));
    mixed.push(unrated_round(100, 62));

    let mut partial = Tee::rated("Red", 113.0, 70.0, None);
    partial.rating = None;
    mixed.push(Round::new(day(50), "No Rating", 63, Some(partial)));

    assert_eq!(compute_index(&mixed), compute_index(&rated));
    assert_eq!(compute_history(&mixed), compute_history(&rated));
}

#[test]
fn test_truncation_positive_and_negative() {
    let mut rounds: Vec<Round> = (1..5).map(|i| rated_round(i, 95, 70.0)).collect();
    rounds.push(rated_round(0, 80, 74.73));
    assert_close(compute_index(&rounds).unwrap(), 5.2);

    let mut rounds: Vec<Round> = (1..5).map(|i| rated_round(i, 95, 70.0)).collect();
    rounds.push(rated_round(0, 70, 71.27));
    assert_close(compute_index(&rounds).unwrap(), -1.2);
}

#[test]
fn test_three_round_scenario() {
    let rounds = vec![
        rated_round(0, 80, 70.0),
        rated_round(1, 82, 69.5),
        rated_round(2, 85, 70.0),
    ];
    assert_close(compute_index(&rounds).unwrap(), 8.0);
}

#[test]
fn test_six_round_scenario() {
    let rounds: Vec<Round> = [8, 9, 10, 11, 12, 13]
        .iter()
        .enumerate()
        .map(|(i, d)| rated_round(i as i64, 70 + d, 70.0))
        .collect();
    assert_close(compute_index(&rounds).unwrap(), 7.5);
}

#[test]
fn test_input_order_does_not_matter() {
    let rounds = season();
    let index = compute_index(&rounds);
    let history = compute_history(&rounds);
    assert!(index.is_some());

    for stride in [5, 7, 11] {
        let reordered = shuffled(&rounds, stride);
        assert_eq!(reordered.len(), rounds.len());
        assert_eq!(compute_index(&reordered), index, "stride {stride}");
        assert_eq!(compute_history(&reordered), history, "stride {stride}");
    }
}

#[test]
fn test_season_history_shape() {
    let rounds = season();
    let history = compute_history(&rounds);
    // 25 rated rounds → one point from the third onward
    assert_eq!(history.len(), 23);
    assert!(history.windows(2).all(|w| w[0].date < w[1].date));
    // Index improves as scores come down over the season
    assert!(history.last().unwrap().handicap < history[0].handicap);
}
