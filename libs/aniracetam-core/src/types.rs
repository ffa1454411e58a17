//! Core types for the review scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Ease factor given to a freshly added sentence.
pub const INITIAL_EASE: f64 = 2.5;

/// Interval, in days, given to a freshly added sentence.
pub const INITIAL_INTERVAL_DAYS: u32 = 1;

/// Reviewer's self-reported recall for one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quality {
    /// Incorrect response.
    Again,
    /// Correct response after difficulty.
    Hard,
    /// Correct response after hesitation.
    Good,
    /// Perfect response.
    Easy,
}

impl Quality {
    /// All grades, lowest first.
    pub const ALL: [Quality; 4] = [Self::Again, Self::Hard, Self::Good, Self::Easy];

    /// Numeric grade (0-3).
    pub fn value(self) -> u8 {
        match self {
            Self::Again => 0,
            Self::Hard => 1,
            Self::Good => 2,
            Self::Easy => 3,
        }
    }

    /// Create from numeric grade, rejecting anything outside 0-3.
    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Again),
            1 => Ok(Self::Hard),
            2 => Ok(Self::Good),
            3 => Ok(Self::Easy),
            other => Err(ScheduleError::InvalidQualityGrade(other)),
        }
    }

    /// Short label shown next to the grade in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Again => "Again",
            Self::Hard => "Hard",
            Self::Good => "Good",
            Self::Easy => "Easy",
        }
    }

    /// Longer description of what the grade means.
    pub fn description(self) -> &'static str {
        match self {
            Self::Again => "Incorrect response",
            Self::Hard => "Correct response after difficulty",
            Self::Good => "Correct response after hesitation",
            Self::Easy => "Perfect response",
        }
    }
}

impl TryFrom<u8> for Quality {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_value(value)
    }
}

/// A sentence pair under spaced repetition.
///
/// Older collections used `original`, `translated`, `language`, `nextReview`
/// and `interval` as keys; those are still accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewableItem {
    pub id: i64,
    #[serde(alias = "original")]
    pub source_text: String,
    #[serde(alias = "translated")]
    pub target_text: String,
    #[serde(alias = "language")]
    pub target_language: String,
    #[serde(alias = "nextReview")]
    pub next_review_at: DateTime<Utc>,
    #[serde(alias = "interval")]
    pub interval_days: u32,
    pub ease: f64,
    pub repetitions: u32,
}

impl ReviewableItem {
    /// Create a new item that is due immediately.
    pub fn new(
        id: i64,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
        target_language: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_text: source_text.into(),
            target_text: target_text.into(),
            target_language: target_language.into(),
            next_review_at: now,
            interval_days: INITIAL_INTERVAL_DAYS,
            ease: INITIAL_EASE,
            repetitions: 0,
        }
    }

    /// Whether the item should be reviewed at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now
    }
}
