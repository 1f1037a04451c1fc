//! Chatmark Config
//!
//! TOML configuration for chatmark.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/chatmark/config.toml`
//! - macOS: `~/Library/Application Support/chatmark/config.toml`
//! - Windows: `%APPDATA%\chatmark\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use chatmark_config::Config;
//!
//! let config = Config::load().unwrap();
//! let config = Config::load_with_override(Some("[features]\nLineNumbers = true")).unwrap();
//! ```

mod features;
mod palette;
mod style;

pub use features::FeaturesConfig;
pub use palette::Palette;
pub use style::StyleConfig;

use chatmark_core::{ChatmarkError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[features]
LineNumbers    = false
Highlight      = true
Clipboard      = false
MaxInlineDepth = 50

[style]
Width          = 0
Margin         = 2
Heading        = "#7aa2f7"
Quote          = "#9aa5ce"
Code           = "#e0af68"
CodeBackground = "#1f2335"
Link           = "#7dcfff"
Keyword        = "#bb9af7"
String         = "#9ece6a"
Number         = "#ff9e64"
Comment        = "#565f89"
Builtin        = "#2ac3de"
Gutter         = "#3b4261"
"##;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub features: FeaturesConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    /// The default configuration as TOML, e.g. for writing a fresh file.
    ///
    /// ```
    /// use chatmark_config::Config;
    /// assert!(Config::default_toml().contains("[features]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chatmark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Create the config file with defaults if it does not exist yet.
    ///
    /// Returns the path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| ChatmarkError::Config("Could not determine config directory".into()))?;
        Self::ensure_config_file_in(&config_dir)
    }

    /// Like [`Config::ensure_config_file`], but inside `config_dir`.
    pub fn ensure_config_file_in(config_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            debug!("writing default config to {}", config_path.display());
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load from the default path, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        debug!("loaded config from {}", path.display());
        toml::from_str(&content).map_err(|e| {
            ChatmarkError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Load the base config, then merge an override on top.
    ///
    /// The override is a path to a TOML file if such a file exists, and is
    /// otherwise parsed as inline TOML.
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;

        if let Some(override_str) = override_config {
            let override_path = Path::new(override_str);
            let override_toml = if override_path.is_file() {
                std::fs::read_to_string(override_path)?
            } else {
                override_str.to_string()
            };

            let other: Config = toml::from_str(&override_toml)
                .map_err(|e| ChatmarkError::Config(format!("Override parse error: {}", e)))?;
            config.merge(&other);
        }

        Ok(config)
    }

    /// Merge another config into this one; values from `other` win.
    pub fn merge(&mut self, other: &Config) {
        self.features.merge(&other.features);
        self.style.merge(&other.style);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ChatmarkError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Colors parsed from the style section.
    pub fn palette(&self) -> Palette {
        Palette::from_config(&self.style)
    }
}

impl StyleConfig {
    /// Colors parsed from this section.
    pub fn palette(&self) -> Palette {
        Palette::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_matches_default() {
        let parsed: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        let other: Config = toml::from_str(
            r#"
            [features]
            LineNumbers = true
            [style]
            Margin = 4
        "#,
        )
        .unwrap();

        base.merge(&other);
        assert!(base.features.line_numbers);
        assert_eq!(base.style.margin, 4);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = toml::from_str::<Config>("[features]\nHighlight = 3")
            .map_err(|e| ChatmarkError::Config(e.to_string()))
            .unwrap_err();
        assert!(matches!(err, ChatmarkError::Config(_)));
    }

    #[test]
    fn test_save_and_load_from() {
        let path =
            std::env::temp_dir().join(format!("chatmark-config-{}.toml", std::process::id()));
        let mut config = Config::default();
        config.features.clipboard = true;
        config.style.width = 72;

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ensure_config_file_writes_defaults_once() {
        let dir = std::env::temp_dir().join(format!("chatmark-ensure-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let path = Config::ensure_config_file_in(&dir).unwrap();
        assert_eq!(path, dir.join("config.toml"));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        std::fs::write(&path, "[style]\nMargin = 7\n").unwrap();
        Config::ensure_config_file_in(&dir).unwrap();
        let kept = Config::load_from(&path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(kept.style.margin, 7);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = Config::load_from(Path::new("/nonexistent/chatmark.toml")).unwrap_err();
        assert!(matches!(err, ChatmarkError::Io(_)));
    }

    #[test]
    fn test_config_path() {
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("chatmark"));
        }
    }

    #[test]
    fn test_palette() {
        assert_eq!(Config::default().palette(), Palette::default());
    }
}
