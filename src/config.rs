use std::path::PathBuf;

use tracing::warn;

use crate::{content::Language, http::DEFAULT_ENDPOINT, ui::theme::Theme};

pub const ENDPOINT_ENV: &str = "SILENTTRACK_CONTACT_ENDPOINT";
pub const AUDIO_ENV: &str = "SILENTTRACK_AUDIO";
pub const LANG_ENV: &str = "SILENTTRACK_LANG";
pub const THEME_ENV: &str = "SILENTTRACK_THEME";

const DEFAULT_AUDIO: &str = "assets/intro.mp3";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub contact_endpoint: String,
    pub audio_path: PathBuf,
    pub language: Language,
    pub theme: Theme,
    pub volume_step: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_ENDPOINT.to_string(),
            audio_path: PathBuf::from(DEFAULT_AUDIO),
            language: Language::default(),
            theme: Theme::default(),
            volume_step: 5,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset or blank keys keep
    /// their defaults; unrecognised values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(endpoint) = get(ENDPOINT_ENV) {
            config.contact_endpoint = endpoint;
        }
        if let Some(path) = get(AUDIO_ENV) {
            config.audio_path = PathBuf::from(path);
        }
        if let Some(code) = get(LANG_ENV) {
            match Language::from_code(&code) {
                Some(language) => config.language = language,
                None => warn!(key = LANG_ENV, value = %code, "config_value_ignored"),
            }
        }
        if let Some(name) = get(THEME_ENV) {
            match Theme::from_name(&name) {
                Some(theme) => config.theme = theme,
                None => warn!(key = THEME_ENV, value = %name, "config_value_ignored"),
            }
        }

        config
    }
}
