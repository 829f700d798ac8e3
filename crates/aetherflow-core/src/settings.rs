//! Runtime settings
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Built-in defaults
//! 2. A JSON settings file (`--config <path>`, or
//!    `<config dir>/aetherflow/settings.json` when present)
//! 3. Environment: `GEMINI_API_KEY`, `AETHERFLOW_MODEL`
//!
//! Command-line flags are applied on top by the binaries.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ThemeError, ThemeResult};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "AETHERFLOW_MODEL";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Which theme resolver backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// Keyword tables, no network
    #[default]
    Offline,
    /// Gemini `generateContent`
    Gemini,
}

impl ResolverKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolverKind::Offline => "offline",
            ResolverKind::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResolverKind {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offline" | "keyword" => Ok(ResolverKind::Offline),
            "gemini" => Ok(ResolverKind::Gemini),
            other => Err(ThemeError::UnknownResolver(other.to_string())),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme resolver backend; switches to Gemini when a key is found and
    /// the file did not pin one
    pub resolver: Option<ResolverKind>,
    /// Gemini model name
    pub gemini_model: String,
    /// Gemini API key (never written back out)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// HTTP timeout for theme requests
    pub request_timeout_secs: u64,
    /// Whether the hand tracker starts active
    pub tracker_enabled: bool,
    /// Tracker frame rate
    pub tracker_fps: u32,
    /// Seed for particle layout
    pub particle_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolver: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            api_key: None,
            request_timeout_secs: 30,
            tracker_enabled: true,
            tracker_fps: 30,
            particle_seed: 0xae7e_5f10,
        }
    }
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aetherflow").join("settings.json"))
    }

    /// Load settings from `path` (must exist), or from the default location
    /// if present, then overlay the process environment.
    pub fn load(path: Option<&Path>) -> ThemeResult<Settings> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => {
                    debug!("No settings file, using defaults");
                    Settings::default()
                }
            },
        };
        Ok(settings.with_env(|key| std::env::var(key).ok()))
    }

    /// Parse a JSON settings file
    pub fn from_file(path: &Path) -> ThemeResult<Settings> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ThemeError::Config(format!("{}: {}", path.display(), e)))?;
        let settings: Settings = serde_json::from_str(&text)
            .map_err(|e| ThemeError::Config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Overlay values found through `lookup` (normally the environment)
    pub fn with_env<F>(mut self, lookup: F) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(model) = lookup(MODEL_VAR).filter(|m| !m.trim().is_empty()) {
            self.gemini_model = model.trim().to_string();
        }
        self
    }

    /// Backend to use: the pinned one, else Gemini when a key is available
    pub fn resolver_kind(&self) -> ResolverKind {
        match self.resolver {
            Some(kind) => kind,
            None if self.api_key.is_some() => ResolverKind::Gemini,
            None => ResolverKind::Offline,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resolver_kind_parse() {
        assert_eq!("Gemini".parse::<ResolverKind>().unwrap(), ResolverKind::Gemini);
        assert_eq!("keyword".parse::<ResolverKind>().unwrap(), ResolverKind::Offline);
        assert!(matches!(
            "openai".parse::<ResolverKind>(),
            Err(ThemeError::UnknownResolver(_))
        ));
    }

    #[test]
    fn key_switches_default_backend() {
        let settings = Settings::default();
        assert_eq!(settings.resolver_kind(), ResolverKind::Offline);

        let settings = settings.with_env(|k| (k == API_KEY_VAR).then(|| "secret".to_string()));
        assert_eq!(settings.resolver_kind(), ResolverKind::Gemini);
    }

    #[test]
    fn pinned_backend_wins_over_key() {
        let settings = Settings {
            resolver: Some(ResolverKind::Offline),
            api_key: Some("secret".to_string()),
            ..Settings::default()
        };
        assert_eq!(settings.resolver_kind(), ResolverKind::Offline);
    }

    #[test]
    fn env_overrides_model_and_ignores_blank_key() {
        let settings = Settings::default().with_env(|k| match k {
            MODEL_VAR => Some("gemini-pro".to_string()),
            API_KEY_VAR => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(settings.gemini_model, "gemini-pro");
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"resolver": "gemini", "tracker_fps": 60}}"#).unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.resolver, Some(ResolverKind::Gemini));
        assert_eq!(settings.tracker_fps, 60);
        assert_eq!(settings.gemini_model, DEFAULT_MODEL);
        assert!(settings.tracker_enabled);
    }

    #[test]
    fn broken_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Settings::from_file(file.path()),
            Err(ThemeError::Config(_))
        ));
    }

    #[test]
    fn api_key_is_not_serialized() {
        let settings = Settings {
            api_key: Some("secret".to_string()),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("secret"));
    }
}
