use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::language::Language;
use crate::translate::DEFAULT_MYMEMORY_BASE_URL;

// Default configuration
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User settings, read from `settings.json` in the platform config dir.
///
/// The file is optional and never written by the application.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Language preselected in the translate selector.
    pub default_language: Language,
    pub translate_base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_language: Language::Es,
            translate_base_url: DEFAULT_MYMEMORY_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Settings file, then environment overrides, then defaults.
    pub fn load() -> Self {
        let mut settings = load_settings().unwrap_or_default();
        settings.apply_env(|key| std::env::var(key).ok());
        settings
    }

    /// Apply overrides:
    /// - `AI_HUB_TRANSLATE_URL`
    /// - `AI_HUB_REQUEST_TIMEOUT_SECS`
    /// - `AI_HUB_CONNECT_TIMEOUT_SECS`
    /// - `AI_HUB_LANGUAGE` (language code)
    ///
    /// Unparseable values are ignored.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("AI_HUB_TRANSLATE_URL") {
            if !url.trim().is_empty() {
                self.translate_base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        if let Some(secs) = var("AI_HUB_REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.request_timeout_secs = secs;
        }
        if let Some(secs) = var("AI_HUB_CONNECT_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.connect_timeout_secs = secs;
        }
        if let Some(code) = var("AI_HUB_LANGUAGE") {
            match Language::from_code(&code) {
                Some(lang) => self.default_language = lang,
                None => tracing::warn!(%code, "ignoring unknown AI_HUB_LANGUAGE"),
            }
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "ai-hub", "ai-hub").map(|proj| proj.config_dir().join("settings.json"))
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(&path).ok()?;
    parse_settings(&content)
        .map_err(|e| tracing::warn!(path = %path.display(), error = %e, "invalid settings file"))
        .ok()
}

pub fn parse_settings(content: &str) -> Result<Settings, serde_json::Error> {
    serde_json::from_str(content)
}
