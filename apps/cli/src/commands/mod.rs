//! Commands exposed on the command line and in the interactive menu.

pub mod add;
pub mod due;
pub mod language;
pub mod menu;
pub mod review;
pub mod stats;

use crate::config::ConfigError;
use crate::prompt::PromptError;
use crate::store::StoreError;
use crate::translate::TranslateError;
use aniracetam_core::ScheduleError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
