//! In-memory round store for integration testing.
//!
//! Provides a deterministic `RoundSource` whose rounds and failure mode
//! are fully controllable from test code, with no file system access.

use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate};
use std::sync::{Arc, Mutex};

use fairway::storage::RoundSource;
use fairway::types::{Round, Tee, Transport};

/// A round source backed by a shared vector.
#[derive(Clone)]
pub struct MemoryRoundStore {
    rounds: Arc<Mutex<Vec<Round>>>,
    /// If set, `load_rounds` returns this error.
    force_error: Arc<Mutex<Option<String>>>,
}

impl MemoryRoundStore {
    pub fn new(rounds: Vec<Round>) -> Self {
        Self {
            rounds: Arc::new(Mutex::new(rounds)),
            force_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Log another round, as the entry form would.
    pub fn push(&self, round: Round) {
        self.rounds.lock().unwrap().push(round);
    }

    /// Force subsequent loads to fail.
    pub fn set_error(&self, msg: &str) {
        *self.force_error.lock().unwrap() = Some(msg.to_string());
    }
}

impl RoundSource for MemoryRoundStore {
    fn load_rounds(&self) -> Result<Vec<Round>> {
        if let Some(msg) = self.force_error.lock().unwrap().clone() {
            return Err(anyhow!(msg));
        }
        Ok(self.rounds.lock().unwrap().clone())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + Duration::days(offset)
}

/// A rated round on a neutral (slope 113) tee: differential = score - rating.
pub fn rated_round(offset: i64, score: u32, rating: f64) -> Round {
    Round::new(
        day(offset),
        "Willow Bend",
        score,
        Some(Tee::rated("White", 113.0, rating, Some(72))),
    )
}

/// A round with no tee data at all.
pub fn unrated_round(offset: i64, score: u32) -> Round {
    Round::new(day(offset), "Muni Nine-and-Nine", score, None)
}

/// A realistic season: mixed tees, some unrated rounds, walk and cart.
pub fn season() -> Vec<Round> {
    let blue = Tee::rated("Blue", 131.0, 72.6, Some(72));
    let white = Tee::rated("White", 124.0, 70.1, Some(72));
    let scores = [
        92, 88, 95, 87, 90, 85, 91, 84, 89, 86, 93, 83, 88, 82, 90, 85, 87, 81, 86, 84, 88, 80,
        83, 79, 85,
    ];

    let mut rounds: Vec<Round> = scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let tee = if i % 3 == 0 { blue.clone() } else { white.clone() };
            let mut round = Round::new(day(i as i64 * 6), "Willow Bend", *score, Some(tee));
            if i % 2 == 1 {
                round.transport = Transport::Cart;
            }
            round
        })
        .collect();

    rounds.insert(4, unrated_round(20, 78));
    rounds.insert(11, unrated_round(61, 99));
    rounds
}
