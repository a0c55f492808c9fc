//! User preference persistence for the scck prompts.
//!
//! A tiny JSON-backed store for presentation settings: the maximum frame
//! width of the prompt widgets and the symbol printed in front of the input
//! line. The file lives in the standard configuration directory
//! (`~/.config/scck/preferences.json` on most platforms) unless
//! `SCCK_PREFERENCES_PATH` points elsewhere.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "SCCK_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Narrowest frame the prompts will draw.
pub const MIN_FRAME_WIDTH: u16 = 20;

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesPayload {
    /// Upper bound on the width of the bordered prompt frames, in columns.
    pub max_width: u16,
    /// Printed before the editable line.
    pub prompt_symbol: String,
}

impl Default for PreferencesPayload {
    fn default() -> Self {
        Self {
            max_width: 64,
            prompt_symbol: "> ".to_string(),
        }
    }
}

/// Preferences store backed by a JSON file.
#[derive(Debug, Default, Clone)]
pub struct UserPreferences {
    path: PathBuf,
    payload: PreferencesPayload,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Load from the default location (or `SCCK_PREFERENCES_PATH`).
    pub fn new() -> Result<Self, PreferencesError> {
        Self::load_from(default_preferences_path())
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self {
            path,
            payload,
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: PreferencesPayload::default(),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn payload(&self) -> &PreferencesPayload {
        &self.payload
    }

    /// Frame width cap, never below [`MIN_FRAME_WIDTH`].
    pub fn max_width(&self) -> u16 {
        self.payload.max_width.max(MIN_FRAME_WIDTH)
    }

    pub fn prompt_symbol(&self) -> &str {
        &self.payload.prompt_symbol
    }

    pub fn set_max_width(&mut self, width: u16) -> Result<(), PreferencesError> {
        self.payload.max_width = width;
        self.save()
    }

    pub fn set_prompt_symbol(&mut self, symbol: impl Into<String>) -> Result<(), PreferencesError> {
        self.payload.prompt_symbol = symbol.into();
        self.save()
    }

    fn save(&self) -> Result<(), PreferencesError> {
        if !self.persist_to_disk {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_home(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scck")
        .join(PREFERENCES_FILE_NAME)
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}
