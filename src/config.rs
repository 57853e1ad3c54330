//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::chart::ChartMetric;
use crate::palette::Palette;
use crate::ui::UiPreferences;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub preferences: PreferencesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chart defaults
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_ratings_palette")]
    pub ratings_palette: Palette,

    #[serde(default = "default_installs_palette")]
    pub installs_palette: Palette,
}

fn default_ratings_palette() -> Palette {
    Palette::Multicolor
}

fn default_installs_palette() -> Palette {
    Palette::Blue
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ratings_palette: default_ratings_palette(),
            installs_palette: default_installs_palette(),
        }
    }
}

/// Where UI preferences are persisted
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_preferences_path")]
    pub path: PathBuf,
}

fn default_preferences_path() -> PathBuf {
    UiPreferences::default_path()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("bankview").join("config.toml")),
            Some(PathBuf::from("./bankview.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Palette for a chart metric
    pub fn palette_for(&self, metric: ChartMetric) -> Palette {
        match metric {
            ChartMetric::Rating => self.dashboard.ratings_palette,
            ChartMetric::Installs => self.dashboard.installs_palette,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Dashboard overrides
        if let Some(palette) = lookup("BANKVIEW_RATINGS_PALETTE") {
            self.dashboard.ratings_palette = Palette::from_name(&palette);
        }
        if let Some(palette) = lookup("BANKVIEW_INSTALLS_PALETTE") {
            self.dashboard.installs_palette = Palette::from_name(&palette);
        }

        // Preferences overrides
        if let Some(path) = lookup("BANKVIEW_PREFERENCES_PATH") {
            self.preferences.path = PathBuf::from(path);
        }

        // Logging overrides
        if let Some(level) = lookup("BANKVIEW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BANKVIEW_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Bankview Configuration
#
# Environment variables override these settings:
# - BANKVIEW_RATINGS_PALETTE
# - BANKVIEW_INSTALLS_PALETTE
# - BANKVIEW_PREFERENCES_PATH
# - BANKVIEW_LOG_LEVEL
# - BANKVIEW_LOG_FORMAT

[dashboard]
# Palette for the ratings chart: multicolor, blue, green
# (anything else renders in gray)
ratings_palette = "multicolor"

# Palette for the installs chart
installs_palette = "blue"

[preferences]
# Where theme and sidebar state are stored
# path = "~/.config/bankview/preferences.toml"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/bankview/bankview.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dashboard.ratings_palette, Palette::Multicolor);
        assert_eq!(config.dashboard.installs_palette, Palette::Blue);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.dashboard.ratings_palette, Palette::Multicolor);
        assert_eq!(config.dashboard.installs_palette, Palette::Blue);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[dashboard]\ninstalls_palette = \"green\"\nratings_palette = \"sepia\"\n\n[logging]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.palette_for(ChartMetric::Installs), Palette::Green);
        assert_eq!(config.palette_for(ChartMetric::Rating), Palette::Gray);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[dashboard\n").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BANKVIEW_RATINGS_PALETTE", "green"),
            ("BANKVIEW_PREFERENCES_PATH", "/tmp/prefs.toml"),
            ("BANKVIEW_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dashboard.ratings_palette, Palette::Green);
        assert_eq!(config.dashboard.installs_palette, Palette::Blue);
        assert_eq!(config.preferences.path, PathBuf::from("/tmp/prefs.toml"));
        assert_eq!(config.logging.level, "debug");
    }
}
