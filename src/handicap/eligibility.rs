//! Round eligibility.
//!
//! Splits rounds into those usable for a handicap (tee slope and rating
//! present and positive) and those that are not, so the index math only
//! ever sees rounds with both ratings in hand.

use chrono::NaiveDate;
use std::fmt;

use crate::types::Round;

/// Standard slope rating of a course of average difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Score differential: `(113 / slope) * (score - rating)`.
///
/// No rounding is applied. `slope` is not checked here; [`classify`] keeps
/// zero and negative slopes away from this formula.
pub fn differential(score: u32, slope: f64, rating: f64) -> f64 {
    (STANDARD_SLOPE / slope) * (score as f64 - rating)
}

/// A round whose tee carries a usable slope and course rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibleRound {
    pub date: NaiveDate,
    pub score: u32,
    pub slope: f64,
    pub rating: f64,
}

impl EligibleRound {
    pub fn differential(&self) -> f64 {
        differential(self.score, self.slope, self.rating)
    }
}

/// Why a round cannot count toward the handicap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibleReason {
    MissingTee,
    MissingSlope,
    MissingRating,
    /// Zero, negative or non-finite slope.
    NonPositiveSlope,
    /// Zero, negative or non-finite course rating.
    NonPositiveRating,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::MissingTee => write!(f, "no tee recorded"),
            IneligibleReason::MissingSlope => write!(f, "tee has no slope rating"),
            IneligibleReason::MissingRating => write!(f, "tee has no course rating"),
            IneligibleReason::NonPositiveSlope => write!(f, "slope rating is not positive"),
            IneligibleReason::NonPositiveRating => write!(f, "course rating is not positive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eligibility {
    Eligible(EligibleRound),
    Ineligible(IneligibleReason),
}

impl Eligibility {
    pub fn eligible(self) -> Option<EligibleRound> {
        match self {
            Eligibility::Eligible(round) => Some(round),
            Eligibility::Ineligible(_) => None,
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Classify a single round.
pub fn classify(round: &Round) -> Eligibility {
    let Some(tee) = &round.tee else {
        return Eligibility::Ineligible(IneligibleReason::MissingTee);
    };
    let Some(slope) = tee.slope else {
        return Eligibility::Ineligible(IneligibleReason::MissingSlope);
    };
    let Some(rating) = tee.rating else {
        return Eligibility::Ineligible(IneligibleReason::MissingRating);
    };
    if !is_positive(slope) {
        return Eligibility::Ineligible(IneligibleReason::NonPositiveSlope);
    }
    if !is_positive(rating) {
        return Eligibility::Ineligible(IneligibleReason::NonPositiveRating);
    }

    Eligibility::Eligible(EligibleRound {
        date: round.date_played,
        score: round.score,
        slope,
        rating,
    })
}

/// Count of ineligible rounds per reason, in declaration order, omitting
/// reasons with no rounds.
pub fn ineligible_counts(rounds: &[Round]) -> Vec<(IneligibleReason, usize)> {
    const REASONS: [IneligibleReason; 5] = [
        IneligibleReason::MissingTee,
        IneligibleReason::MissingSlope,
        IneligibleReason::MissingRating,
        IneligibleReason::NonPositiveSlope,
        IneligibleReason::NonPositiveRating,
    ];

    let mut counts = [0usize; REASONS.len()];
    for round in rounds {
        if let Eligibility::Ineligible(reason) = classify(round) {
            if let Some(slot) = REASONS.iter().position(|r| *r == reason) {
                counts[slot] += 1;
            }
        }
    }

    REASONS
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Eligible rounds in ascending date order.
///
/// The sort is stable: rounds sharing a date keep their input order.
pub fn select_eligible(rounds: &[Round]) -> Vec<EligibleRound> {
    let mut eligible: Vec<EligibleRound> = rounds
        .iter()
        .filter_map(|r| classify(r).eligible())
        .collect();
    eligible.sort_by_key(|r| r.date);
    eligible
}
