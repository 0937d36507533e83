//! Round storage.
//!
//! Rounds live in a JSON file exported from the hosted database, one object
//! per round with its course and tee joined in. The tracker only reads
//! them; `save_rounds` exists for producing fixture files.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::types::{Round, TrackerError};

/// Default rounds file path.
const DEFAULT_ROUNDS_FILE: &str = "rounds.json";

/// Anything that can hand over the player's rounds.
#[cfg_attr(test, mockall::automock)]
pub trait RoundSource: Send + Sync {
    /// All rounds, in whatever order the source keeps them.
    fn load_rounds(&self) -> Result<Vec<Round>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Reject rounds outside the bounds the entry form allows.
pub fn validate_round(round: &Round) -> std::result::Result<(), TrackerError> {
    let invalid = |reason: String| TrackerError::InvalidRound {
        id: round.id.clone(),
        reason,
    };

    if !(1..=199).contains(&round.score) {
        return Err(invalid(format!("score {} outside 1..=199", round.score)));
    }
    if let Some(gir) = round.gir.filter(|g| *g > 18) {
        return Err(invalid(format!("greens in regulation {gir} above 18")));
    }
    if let Some(putts) = round.total_putts.filter(|p| *p > 99) {
        return Err(invalid(format!("total putts {putts} above 99")));
    }
    if let Some(penalties) = round.penalties.filter(|p| *p > 99) {
        return Err(invalid(format!("penalties {penalties} above 99")));
    }
    Ok(())
}

/// Keep valid rounds, logging and dropping the rest.
pub fn retain_valid(rounds: Vec<Round>) -> Vec<Round> {
    rounds
        .into_iter()
        .filter(|round| match validate_round(round) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Skipping invalid round");
                false
            }
        })
        .collect()
}

/// Convert raw rows to rounds, logging and dropping rows that don't fit
/// the round shape (negative or fractional scores, bad dates, ...).
fn parse_rows(rows: Vec<serde_json::Value>) -> Vec<Round> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let id = row
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("<no id>")
                .to_string();
            match serde_json::from_value::<Round>(row) {
                Ok(round) => Some(round),
                Err(e) => {
                    let err = TrackerError::InvalidRound {
                        id,
                        reason: e.to_string(),
                    };
                    warn!(row = index, error = %err, "Skipping unreadable round");
                    None
                }
            }
        })
        .collect()
}

/// Load rounds from a JSON file.
/// Returns an empty list if the file doesn't exist (nothing logged yet).
pub fn load_rounds(path: Option<&str>) -> Result<Vec<Round>> {
    let path = path.unwrap_or(DEFAULT_ROUNDS_FILE);

    if !Path::new(path).exists() {
        info!(path, "No rounds file found, starting with no rounds");
        return Ok(Vec::new());
    }

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rounds from {path}"))?;

    let rows: Vec<serde_json::Value> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse rounds from {path}"))?;

    let total = rows.len();
    let rounds = retain_valid(parse_rows(rows));

    info!(
        path,
        rounds = rounds.len(),
        skipped = total - rounds.len(),
        "Rounds loaded from disk"
    );

    Ok(rounds)
}

/// Save rounds to a JSON file.
pub fn save_rounds(rounds: &[Round], path: Option<&str>) -> Result<()> {
    let path = path.unwrap_or(DEFAULT_ROUNDS_FILE);
    let json = serde_json::to_string_pretty(rounds).context("Failed to serialise rounds")?;

    std::fs::write(path, &json).with_context(|| format!("Failed to write rounds to {path}"))?;

    debug!(path, rounds = rounds.len(), "Rounds saved");
    Ok(())
}

/// File-backed round source.
pub struct JsonRoundStore {
    path: String,
}

impl JsonRoundStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

}

impl RoundSource for JsonRoundStore {
    fn load_rounds(&self) -> Result<Vec<Round>> {
        load_rounds(Some(&self.path))
    }

    fn name(&self) -> &str {
        "json"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
