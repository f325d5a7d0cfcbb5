//! Light/dark theme preference
//!
//! Stored next to the word sets as the plain string `light` or `dark`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Storage key for the theme preference
pub const THEME_KEY: &str = "rapid-recall:theme";

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Name as stored
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Persisted theme preference
#[derive(Debug)]
pub struct ThemeStore<S> {
    storage: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Load the saved theme, or use `fallback` if none is saved
    pub fn init(storage: S, fallback: Theme) -> Self {
        let saved = match storage.get(THEME_KEY) {
            Ok(Some(bytes)) => String::from_utf8_lossy(&bytes).parse().ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme");
                None
            }
        };

        Self {
            storage,
            theme: saved.unwrap_or(fallback),
        }
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Change and save the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.set(THEME_KEY, theme.name().as_bytes()) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    /// The underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
