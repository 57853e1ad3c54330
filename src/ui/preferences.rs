//! Persisted UI preferences
//!
//! Theme and sidebar state live in an explicit value that is loaded once
//! at startup, passed to the renderer, and saved back when it changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::{PreferencesError, PreferencesResult};

/// Colour theme
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

    /// Value for the document's theme attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI state that survives restarts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl UiPreferences {
    /// Default preferences file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("bankview").join("preferences.toml"))
            .unwrap_or_else(|| PathBuf::from("./bankview-preferences.toml"))
    }

    /// Load preferences; a missing file yields the defaults
    pub fn load(path: &Path) -> PreferencesResult<Self> {
        if !path.exists() {
            tracing::debug!("No preferences at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| PreferencesError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| PreferencesError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load preferences, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preferences: {}", e);
                Self::default()
            }
        }
    }

    /// Write preferences, creating parent directories as needed
    pub fn save(&self, path: &Path) -> PreferencesResult<()> {
        let content = toml::to_string_pretty(self)?;

        let io_err = |e: std::io::Error| PreferencesError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, content).map_err(io_err)?;

        tracing::debug!("Saved preferences to {:?}", path);
        Ok(())
    }

    /// Switch between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Collapse or expand the sidebar
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }

    /// Expand the sidebar (opening a submenu while collapsed)
    pub fn expand_sidebar(&mut self) {
        self.sidebar_collapsed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let prefs = UiPreferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert!(!prefs.sidebar_collapsed);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let prefs = UiPreferences::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(prefs, UiPreferences::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut prefs = UiPreferences::default();
        assert_eq!(prefs.toggle_theme(), Theme::Dark);
        assert!(prefs.toggle_sidebar());
        prefs.save(&path).unwrap();

        let loaded = UiPreferences::load(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Dark);
        assert!(loaded.sidebar_collapsed);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = \"dark\"\n").unwrap();

        let prefs = UiPreferences::load(&path).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(!prefs.sidebar_collapsed);
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = \"sepia\"\n").unwrap();

        assert!(matches!(
            UiPreferences::load(&path),
            Err(PreferencesError::Parse { .. })
        ));
        assert_eq!(UiPreferences::load_or_default(&path), UiPreferences::default());
    }

    #[test]
    fn test_expand_sidebar() {
        let mut prefs = UiPreferences {
            sidebar_collapsed: true,
            ..Default::default()
        };
        prefs.expand_sidebar();
        assert!(!prefs.sidebar_collapsed);
    }
}
