//! Shared types for the FAIRWAY tracker.
//!
//! These types form the data model used across all modules. Rounds arrive
//! from the store with their course and tee already joined, mirroring the
//! rows the hosted database hands back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Course & tee
// ---------------------------------------------------------------------------

/// A golf course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// A set of tees on a course, with its USGA ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tee {
    pub id: String,
    #[serde(default)]
    pub course_id: Option<String>,
    pub tee_name: String,
    #[serde(default)]
    pub yardage: Option<u32>,
    #[serde(default)]
    pub par: Option<u32>,
    /// Slope Rating (typically 55–155).
    #[serde(default)]
    pub slope: Option<f64>,
    /// Course Rating (typically 60–80).
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Tee {
    /// Build a tee carrying only the fields the handicap engine reads.
    pub fn rated(tee_name: &str, slope: f64, rating: f64, par: Option<u32>) -> Self {
        Tee {
            id: uuid::Uuid::new_v4().to_string(),
            course_id: None,
            tee_name: tee_name.to_string(),
            yardage: None,
            par,
            slope: Some(slope),
            rating: Some(rating),
        }
    }
}

impl fmt::Display for Tee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tee_name)?;
        if let Some(yardage) = self.yardage {
            write!(f, " | {yardage} yds")?;
        }
        if let Some(par) = self.par {
            write!(f, " | Par {par}")?;
        }
        if let Some(slope) = self.slope {
            write!(f, " | Slope {slope}")?;
        }
        if let Some(rating) = self.rating {
            write!(f, " | Rating {rating}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Round
// ---------------------------------------------------------------------------

/// How the round was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Walk,
    Cart,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Walk => write!(f, "Walk"),
            Transport::Cart => write!(f, "Cart"),
        }
    }
}

/// One logged 18-hole round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub date_played: NaiveDate,
    pub course_name: String,
    /// Gross 18-hole score.
    pub score: u32,
    #[serde(default)]
    pub notes: Option<String>,
    /// Scorecard image location. Opaque to the tracker.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Greens in regulation (0–18).
    #[serde(default)]
    pub gir: Option<u32>,
    #[serde(default)]
    pub total_putts: Option<u32>,
    #[serde(default)]
    pub penalties: Option<u32>,
    #[serde(default)]
    pub transport: Transport,
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub tee: Option<Tee>,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} — {} ({})",
            self.date_played.format("%a, %b %-d, %Y"),
            self.course_name,
            self.score,
            self.transport,
        )?;
        if let Some(tee) = &self.tee {
            write!(f, " [{tee}]")?;
        }
        Ok(())
    }
}

impl Round {
    /// Create a round with a fresh id and no optional detail.
    pub fn new(date_played: NaiveDate, course_name: &str, score: u32, tee: Option<Tee>) -> Self {
        Round {
            id: uuid::Uuid::new_v4().to_string(),
            date_played,
            course_name: course_name.to_string(),
            score,
            notes: None,
            image_url: None,
            gir: None,
            total_putts: None,
            penalties: None,
            transport: Transport::Walk,
            course: None,
            tee,
        }
    }

    /// Par of the tee played, when known and positive.
    pub fn par(&self) -> Option<u32> {
        self.tee.as_ref().and_then(|t| t.par).filter(|p| *p > 0)
    }

    /// Strokes relative to par, when par is known.
    pub fn vs_par(&self) -> Option<i64> {
        self.par().map(|par| self.score as i64 - par as i64)
    }
}

// ---------------------------------------------------------------------------
// Handicap history
// ---------------------------------------------------------------------------

/// One point of the handicap-index history: the index as it stood after
/// the round played on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandicapPoint {
    pub date: NaiveDate,
    pub handicap: f64,
}

impl fmt::Display for HandicapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.1}", self.date, self.handicap)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for FAIRWAY.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Invalid round ({id}): {reason}")]
    InvalidRound { id: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
