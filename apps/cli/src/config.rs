//! JSON-based application configuration.
//!
//! Everything lives under one data directory:
//! - `config.json`: target language, storage backend, translation endpoint
//! - `sentences.json` or `sentences.db`: the collection
//!
//! The directory is `$ANIRACETAM_HOME` when set, `~/.aniracetam` otherwise.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::StorageKind;
use crate::translate::DEFAULT_TRANSLATE_URL;

/// Overrides the data directory.
pub const HOME_ENV: &str = "ANIRACETAM_HOME";

/// Overrides the translation endpoint.
pub const TRANSLATE_URL_ENV: &str = "ANIRACETAM_TRANSLATE_URL";

const DIR_NAME: &str = ".aniracetam";
const FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory; set ANIRACETAM_HOME")]
    NoHomeDir,

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolve the data directory without creating it.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    resolve_data_dir(std::env::var_os(HOME_ENV).map(PathBuf::from), dirs::home_dir())
}

fn resolve_data_dir(
    override_dir: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    match override_dir.filter(|p| !p.as_os_str().is_empty()) {
        Some(dir) => Ok(dir),
        None => home.map(|h| h.join(DIR_NAME)).ok_or(ConfigError::NoHomeDir),
    }
}

/// Application configuration, serialized to `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Language code being learned (e.g. "es", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_url: Option<String>,
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(FILE_NAME)
    }

    /// Load from `data_dir`, falling back to defaults.
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config, using defaults");
                return Self::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "malformed config, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        let path = Self::path(data_dir);
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(data_dir).map_err(io_err)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(io_err)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Target language, if one has been chosen.
    pub fn language(&self) -> Option<&str> {
        self.target_language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Translation endpoint: environment, then config, then the public default.
    pub fn translate_url(&self) -> String {
        pick_translate_url(
            std::env::var(TRANSLATE_URL_ENV).ok(),
            self.translate_url.as_deref(),
        )
    }
}

fn pick_translate_url(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|u| !u.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string())
}
