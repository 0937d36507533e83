//! Round statistics for the summary panel and score-trend series.
//!
//! Unlike the handicap engine these figures use every round, rated tee or
//! not. Averages are `None` rather than zero when there is nothing to
//! average.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::handicap;
use crate::types::{HandicapPoint, Round, Transport};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Score the player is trying to break (drawn as the reference line).
    pub target_score: u32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self { target_score: 80 }
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Summary figures across all logged rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundStats {
    pub rounds_played: usize,
    pub best_score: Option<u32>,
    pub average_score: Option<f64>,
    /// Score of the most recently played round.
    pub latest_score: Option<u32>,
    pub handicap_index: Option<f64>,
    /// Mean strokes over par, across rounds whose tee has a par.
    pub avg_vs_par: Option<f64>,
    pub par_rounds: usize,
    pub walk_average: Option<f64>,
    pub walk_rounds: usize,
    pub cart_average: Option<f64>,
    pub cart_rounds: usize,
    pub target_score: u32,
    /// Rounds strictly below `target_score`.
    pub rounds_under_target: usize,
}

/// One point of the score trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub date: NaiveDate,
    pub score: u32,
}

fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

pub struct StatsCalculator {
    config: StatsConfig,
}

impl StatsCalculator {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Compute the summary for a set of rounds in any order.
    pub fn calculate(&self, rounds: &[Round]) -> RoundStats {
        let target = self.config.target_score;

        let transport_avg = |transport: Transport| {
            let scores: Vec<f64> = rounds
                .iter()
                .filter(|r| r.transport == transport)
                .map(|r| r.score as f64)
                .collect();
            (mean(scores.iter().copied()), scores.len())
        };
        let (walk_average, walk_rounds) = transport_avg(Transport::Walk);
        let (cart_average, cart_rounds) = transport_avg(Transport::Cart);

        let vs_par: Vec<f64> = rounds
            .iter()
            .filter_map(Round::vs_par)
            .map(|d| d as f64)
            .collect();

        RoundStats {
            rounds_played: rounds.len(),
            best_score: rounds.iter().map(|r| r.score).min(),
            average_score: mean(rounds.iter().map(|r| r.score as f64)),
            latest_score: latest_round(rounds).map(|r| r.score),
            handicap_index: handicap::compute_index(rounds),
            avg_vs_par: mean(vs_par.iter().copied()),
            par_rounds: vs_par.len(),
            walk_average,
            walk_rounds,
            cart_average,
            cart_rounds,
            target_score: target,
            rounds_under_target: rounds.iter().filter(|r| r.score < target).count(),
        }
    }
}

/// Most recently played round. Among rounds on the latest date, the first
/// one in input order wins.
pub fn latest_round(rounds: &[Round]) -> Option<&Round> {
    rounds.iter().fold(None, |latest: Option<&Round>, r| match latest {
        Some(l) if l.date_played >= r.date_played => Some(l),
        _ => Some(r),
    })
}

/// Every round's score in ascending date order (stable for same-day rounds).
pub fn score_trend(rounds: &[Round]) -> Vec<ScorePoint> {
    let mut points: Vec<ScorePoint> = rounds
        .iter()
        .map(|r| ScorePoint {
            date: r.date_played,
            score: r.score,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Lowest and highest index in a history series.
pub fn handicap_range(history: &[HandicapPoint]) -> Option<(f64, f64)> {
    let first = history.first()?.handicap;
    Some(history.iter().fold((first, first), |(lo, hi), p| {
        (lo.min(p.handicap), hi.max(p.handicap))
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
