//! Handicap engine: differentials, eligibility, and the index itself.
//!
//! Everything here is a pure function of the rounds handed in. Nothing is
//! cached between calls and the input slice is never modified, so callers
//! may share one snapshot across threads freely.

pub mod eligibility;
pub mod selection;

use tracing::debug;

use crate::types::{HandicapPoint, Round};
pub use eligibility::{
    classify, differential, ineligible_counts, select_eligible, Eligibility, EligibleRound,
    IneligibleReason,
};
pub use selection::{selection_params, SelectionParams, MIN_ROUNDS, WINDOW_SIZE};

/// Truncate toward zero at one decimal place (`8.79 → 8.7`, `-1.27 → -1.2`).
pub fn truncate_tenth(value: f64) -> f64 {
    (value * 10.0).trunc() / 10.0
}

/// Index for rounds already in ascending date order.
///
/// Only the trailing [`WINDOW_SIZE`] rounds count. Returns `None` when the
/// window is too short for the selection table.
fn index_for_sorted(eligible: &[EligibleRound]) -> Option<f64> {
    let start = eligible.len().saturating_sub(WINDOW_SIZE);
    let window = &eligible[start..];
    let params = selection_params(window.len())?;

    let mut differentials: Vec<f64> = window.iter().map(EligibleRound::differential).collect();
    differentials.sort_by(|a, b| a.total_cmp(b));

    let best = &differentials[..params.best_count];
    let average = best.iter().sum::<f64>() / best.len() as f64;

    Some(truncate_tenth(average + params.adjustment))
}

/// Current handicap index, or `None` with fewer than three eligible rounds.
pub fn compute_index(rounds: &[Round]) -> Option<f64> {
    let eligible = select_eligible(rounds);
    let index = index_for_sorted(&eligible);

    debug!(
        rounds = rounds.len(),
        eligible = eligible.len(),
        index = ?index,
        "Handicap index computed"
    );

    index
}

/// Handicap index as it stood after each eligible round, oldest first.
///
/// The first two eligible rounds produce no entry; from the third on there
/// is exactly one point per round, dated with that round's date.
pub fn compute_history(rounds: &[Round]) -> Vec<HandicapPoint> {
    let eligible = select_eligible(rounds);

    let history: Vec<HandicapPoint> = (1..=eligible.len())
        .filter_map(|len| {
            let prefix = &eligible[..len];
            index_for_sorted(prefix).map(|handicap| HandicapPoint {
                date: prefix[len - 1].date,
                handicap,
            })
        })
        .collect();

    debug!(
        eligible = eligible.len(),
        points = history.len(),
        "Handicap history computed"
    );

    history
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
