//! Error types for aniracetam-core.

use thiserror::Error;

/// Result type alias using ScheduleError.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur while scheduling a review.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid quality grade {0}: expected 0, 1, 2 or 3")]
    InvalidQualityGrade(u8),
}
