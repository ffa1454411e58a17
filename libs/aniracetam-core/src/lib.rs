//! Core review scheduling shared by the aniracetam front-ends.
//!
//! Provides:
//! - The reviewable sentence model (`ReviewableItem`)
//! - Quality grades reported by the reviewer (`Quality`)
//! - The simplified SM-2 scheduler (`select_due`, `record_review`)

pub mod error;
pub mod scheduler;
pub mod types;

pub use error::{Result, ScheduleError};
pub use scheduler::{record_review, schedule, select_due};
pub use types::{Quality, ReviewableItem};
