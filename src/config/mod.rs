//! Configuration loading.
//!
//! Settings live in `<config dir>/tomato/config.json`:
//!
//! ```json
//! {
//!   "intervals": { "work_minutes": 25, "short_break_minutes": 5 },
//!   "style": "styled",
//!   "notifications": true
//! }
//! ```
//!
//! Every field is optional. Command-line flags override file values.

mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

use crate::cli::display::DisplayStyle;
use crate::types::IntervalConfig;

const APP_DIR: &str = "tomato";
const CONFIG_FILE: &str = "config.json";

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Interval lengths
    pub intervals: IntervalConfig,
    /// Front-end
    pub style: DisplayStyle,
    /// Whether to raise desktop notifications
    pub notifications: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            intervals: IntervalConfig::default(),
            style: DisplayStyle::default(),
            notifications: true,
        }
    }
}

impl AppConfig {
    /// Loads and validates the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds
    /// out-of-range values.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used and a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::load_from_path`].
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Checks the interval lengths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for out-of-range durations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.intervals.validate().map_err(ConfigError::Invalid)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Default configuration file location, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.intervals, IntervalConfig::default());
        assert_eq!(config.style, DisplayStyle::Styled);
        assert!(config.notifications);
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"{
                "intervals": { "work_minutes": 50, "short_break_minutes": 10 },
                "style": "plain",
                "notifications": false
            }"#,
        );

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.intervals.work_minutes, 50);
        assert_eq!(config.intervals.short_break_minutes, 10);
        assert_eq!(config.style, DisplayStyle::Plain);
        assert!(!config.notifications);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_config(r#"{ "style": "plain" }"#);

        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.intervals, IntervalConfig::default());
        assert_eq!(config.style, DisplayStyle::Plain);
        assert!(config.notifications);
    }

    #[test]
    fn test_load_invalid_json() {
        let file = write_config("{ not json");
        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_out_of_range() {
        let file = write_config(r#"{ "intervals": { "work_minutes": 0 } }"#);
        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_json_round_trip_shape() {
        let json = AppConfig::default().to_json().unwrap();
        assert!(json.contains("\"work_minutes\": 25"));
        assert!(json.contains("\"style\": \"styled\""));
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("tomato/config.json"));
        }
    }
}
