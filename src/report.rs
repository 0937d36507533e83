//! Scorecard report.
//!
//! Pulls rounds from an injected [`RoundSource`], runs the handicap engine
//! and the statistics over them, and packages the result for display.
//! Absent figures render as a neutral placeholder, never as zero.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use crate::handicap;
use crate::stats::{self, RoundStats, ScorePoint, StatsCalculator};
use crate::storage::RoundSource;
use crate::types::HandicapPoint;

/// Placeholder shown when a figure cannot be computed.
pub const PLACEHOLDER: &str = "—";

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Handicap index to one decimal, or the placeholder.
pub fn format_handicap(index: Option<f64>) -> String {
    format_average(index)
}

/// One-decimal figure, or the placeholder.
pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Strokes over par with an explicit `+` when over.
pub fn format_vs_par(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let text = format!("{v:.1}");
            if text.parse::<f64>().map(|t| t > 0.0).unwrap_or(false) {
                format!("+{text}")
            } else {
                text
            }
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Short chart label, e.g. `Mar 7`.
pub fn chart_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn format_score(score: Option<u32>) -> String {
    score.map_or_else(|| PLACEHOLDER.to_string(), |s| s.to_string())
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A handicap history point ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub label: String,
    pub handicap: f64,
}

impl From<HandicapPoint> for HistoryEntry {
    fn from(point: HandicapPoint) -> Self {
        Self {
            date: point.date,
            label: chart_label(point.date),
            handicap: point.handicap,
        }
    }
}

/// Rounds left out of the handicap for one reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcludedRounds {
    pub reason: String,
    pub rounds: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub player: String,
    pub generated_at: DateTime<Utc>,
    pub stats: RoundStats,
    /// Rounds left out of the handicap (no tee or unusable ratings).
    pub ineligible_rounds: usize,
    /// Breakdown of `ineligible_rounds` by reason.
    pub excluded: Vec<ExcludedRounds>,
    pub handicap_history: Vec<HistoryEntry>,
    pub score_trend: Vec<ScorePoint>,
}

impl Report {
    /// Label/value pairs for the summary panel, in display order.
    pub fn summary_rows(&self) -> Vec<(String, String)> {
        let s = &self.stats;
        vec![
            ("Rounds Played".to_string(), s.rounds_played.to_string()),
            ("Best Score".to_string(), format_score(s.best_score)),
            ("Average".to_string(), format_average(s.average_score)),
            ("Latest".to_string(), format_score(s.latest_score)),
            ("Handicap".to_string(), format_handicap(s.handicap_index)),
            (
                format!("Avg vs Par ({})", s.par_rounds),
                format_vs_par(s.avg_vs_par),
            ),
            (
                format!("Walk Avg ({})", s.walk_rounds),
                format_average(s.walk_average),
            ),
            (
                format!("Cart Avg ({})", s.cart_rounds),
                format_average(s.cart_average),
            ),
            (
                format!("Under {}", s.target_score),
                s.rounds_under_target.to_string(),
            ),
        ]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} — {}", self.player, self.generated_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f)?;
        for (label, value) in self.summary_rows() {
            writeln!(f, "  {label:<18} {value}")?;
        }
        writeln!(f)?;

        for excluded in &self.excluded {
            writeln!(f, "  ({} excluded from handicap: {})", excluded.rounds, excluded.reason)?;
        }
        if self.handicap_history.is_empty() {
            writeln!(f, "Not enough rounds with tee data to calculate handicap.")?;
        } else {
            writeln!(f, "Handicap Index")?;
            for entry in &self.handicap_history {
                writeln!(f, "  {:<8} {:.1}", entry.label, entry.handicap)?;
            }
        }
        writeln!(f)?;

        if self.score_trend.is_empty() {
            write!(f, "No rounds yet — add your first round to see the trend.")?;
        } else {
            writeln!(f, "Score Progress")?;
            for point in &self.score_trend {
                let marker = if point.score < self.stats.target_score { " *" } else { "" };
                writeln!(f, "  {:<8} {}{}", chart_label(point.date), point.score, marker)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Scorecard
// ---------------------------------------------------------------------------

/// Builds reports for one player from an injected round source.
pub struct Scorecard {
    source: Box<dyn RoundSource>,
    player: String,
    calculator: StatsCalculator,
}

impl Scorecard {
    pub fn new(source: Box<dyn RoundSource>, player: String, calculator: StatsCalculator) -> Self {
        Self {
            source,
            player,
            calculator,
        }
    }

    /// Load the rounds and compute everything shown on the dashboard.
    pub fn build(&self) -> Result<Report> {
        let rounds = self.source.load_rounds()?;

        let eligible = handicap::select_eligible(&rounds).len();
        let ineligible_rounds = rounds.len() - eligible;
        let excluded: Vec<ExcludedRounds> = handicap::ineligible_counts(&rounds)
            .into_iter()
            .map(|(reason, rounds)| {
                warn!(
                    source = self.source.name(),
                    rounds,
                    reason = %reason,
                    "Rounds left out of the handicap"
                );
                ExcludedRounds {
                    reason: reason.to_string(),
                    rounds,
                }
            })
            .collect();

        let stats = self.calculator.calculate(&rounds);
        let history = handicap::compute_history(&rounds);

        if let Some((low, high)) = stats::handicap_range(&history) {
            info!(low, high, points = history.len(), "Handicap trend range");
        }

        info!(
            source = self.source.name(),
            rounds = rounds.len(),
            eligible,
            handicap = %format_handicap(stats.handicap_index),
            "Report built"
        );

        Ok(Report {
            player: self.player.clone(),
            generated_at: Utc::now(),
            stats,
            ineligible_rounds,
            excluded,
            handicap_history: history.into_iter().map(HistoryEntry::from).collect(),
            score_trend: stats::score_trend(&rounds),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
