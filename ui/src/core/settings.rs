//! Application tunables. Read-only: loaded once by the launcher and handed to
//! the views through context.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dioxus::logger::tracing::{debug, warn};

use super::platform::Platform;
use crate::tools::generator::GenerationConfig;
use crate::tools::translator::languages;

pub const DEFAULT_AUTO_GENERATE_INTERVAL_MS: u64 = 2_000;
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
/// Upper bound for `history_capacity` coming from a settings file.
pub const MAX_HISTORY_CAPACITY: usize = 100;
pub const DEFAULT_TRANSLATE_DEBOUNCE_MS: u64 = 1_000;
pub const DEFAULT_MOCK_TRANSLATION_DELAY_MS: u64 = 1_000;

/// Lower bound for any timer period coming from a settings file.
const MIN_TIMER_MS: u64 = 100;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("couldn't read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("couldn't parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub auto_generate_interval_ms: u64,
    pub history_capacity: usize,
    pub translate_debounce_ms: u64,
    pub mock_translation_delay_ms: u64,
    pub default_target_language: String,
    pub generation: GenerationConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_generate_interval_ms: DEFAULT_AUTO_GENERATE_INTERVAL_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            translate_debounce_ms: DEFAULT_TRANSLATE_DEBOUNCE_MS,
            mock_translation_delay_ms: DEFAULT_MOCK_TRANSLATION_DELAY_MS,
            default_target_language: languages::DEFAULT_TARGET.to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

impl AppSettings {
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let parsed: AppSettings = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    /// Pull every field back into its valid range.
    pub fn sanitized(mut self) -> Self {
        self.history_capacity = self.history_capacity.clamp(1, MAX_HISTORY_CAPACITY);
        self.auto_generate_interval_ms = self.auto_generate_interval_ms.max(MIN_TIMER_MS);
        self.translate_debounce_ms = self.translate_debounce_ms.max(MIN_TIMER_MS);
        let length = self.generation.length;
        self.generation.set_length(length);
        if languages::find(&self.default_target_language).is_none() {
            self.default_target_language = languages::DEFAULT_TARGET.to_string();
        }
        self
    }

    /// Load `settings.json` from the platform config directory, falling back to
    /// defaults when it is missing or malformed.
    pub fn load() -> Self {
        let platform = Platform::current().label();
        match Self::read_from_disk() {
            Ok(Some(settings)) => {
                debug!(platform, "loaded settings from disk");
                settings
            }
            Ok(None) => {
                debug!(platform, "no settings file; using defaults");
                Self::default()
            }
            Err(err) => {
                warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_from_disk() -> Result<Option<Self>, SettingsError> {
        let Some(dirs) = directories::ProjectDirs::from("com", "TextTools", "TextTools") else {
            return Ok(None);
        };
        let path = dirs.config_dir().join(SETTINGS_FILENAME);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        Self::from_json(&raw).map(Some)
    }

    #[cfg(target_arch = "wasm32")]
    fn read_from_disk() -> Result<Option<Self>, SettingsError> {
        let _ = SETTINGS_FILENAME;
        Ok(None)
    }
}
