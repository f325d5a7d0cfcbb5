//! Configuration file support
//!
//! Loads settings from ~/.rapid-recall.toml (or %USERPROFILE%\.rapid-recall.toml
//! on Windows). Missing keys take their defaults; an unreadable or invalid
//! file is ignored as a whole.
//!
//! Example:
//! ```text
//! # rapid-recall configuration
//! data-dir = "/home/me/.local/share/rapid-recall"
//! theme = "dark"
//! log-level = "debug"
//! sentence-pause = 2.0
//! ```

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::theme::Theme;

/// Shortest allowed sentence pause multiplier
const SENTENCE_PAUSE_MIN: f64 = 1.0;
/// Longest allowed sentence pause multiplier
const SENTENCE_PAUSE_MAX: f64 = 4.0;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Where word sets and the theme are stored (defaults to ~/.rapid-recall)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Theme used until one is chosen in the reader
    pub theme: Theme,
    /// Log filter used when RAPID_RECALL_LOG is unset
    pub log_level: String,
    /// How much longer a word ending a sentence stays on screen
    pub sentence_pause: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            theme: Theme::Light,
            log_level: "info".to_string(),
            sentence_pause: 1.5,
        }
    }
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }

    #[cfg(not(windows))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".rapid-recall.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return Config::default();
        };

        match Self::parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config");
                Config::default()
            }
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.normalize();
        Ok(config)
    }

    /// Pull out-of-range values back into bounds
    fn normalize(&mut self) {
        if self.sentence_pause.is_nan() {
            self.sentence_pause = Config::default().sentence_pause;
        }
        self.sentence_pause = self
            .sentence_pause
            .clamp(SENTENCE_PAUSE_MIN, SENTENCE_PAUSE_MAX);
        if self.log_level.trim().is_empty() {
            self.log_level = Config::default().log_level;
        }
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| home_dir().map(|home| home.join(".rapid-recall")))
            .unwrap_or_else(|| PathBuf::from(".rapid-recall"))
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            let contents = format!(
                "# rapid-recall configuration\n# Generated automatically\n\n{}",
                self.to_toml()?
            );
            fs::write(path, contents)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
data-dir = "/tmp/recall"
theme = "dark"
log-level = "debug"
sentence-pause = 2.5
        "#;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/recall")));
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/recall"));
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.sentence_pause, 2.5);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("theme = \"dark\"\n").unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sentence_pause, 1.5);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_parse_clamps_values() {
        let config = Config::parse("sentence-pause = 10.0\nlog-level = \"\"").unwrap();
        assert_eq!(config.sentence_pause, 4.0);
        assert_eq!(config.log_level, "info");

        let config = Config::parse("sentence-pause = 0.2").unwrap();
        assert_eq!(config.sentence_pause, 1.0);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Config::parse("theme = \"purple\"").is_err());
        assert!(Config::parse("sentence-pause = \"slow\"").is_err());
        assert!(Config::parse("not toml at all [").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = Config {
            data_dir: Some(PathBuf::from("/data")),
            theme: Theme::Dark,
            log_level: "trace".to_string(),
            sentence_pause: 3.0,
        };
        let text = config.to_toml().unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }
}
