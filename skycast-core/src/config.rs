use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::theme::ThemeName;

/// Persisted user preferences.
///
/// Currently a single key: the selected theme, stored as its string name so
/// the file stays forward-compatible with themes added later.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// theme = "dark"
    pub theme: Option<String>,
}

impl Config {
    /// The saved theme, falling back to the default for a missing or
    /// unrecognized name. Never errors: a stale preference must not take the
    /// dashboard down.
    pub fn theme(&self) -> ThemeName {
        self.theme
            .as_deref()
            .and_then(|s| ThemeName::try_from(s).ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.theme = Some(theme.as_str().to_string());
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_default_theme() {
        let cfg = Config::default();
        assert_eq!(cfg.theme(), ThemeName::White);
    }

    #[test]
    fn set_theme_roundtrips() {
        let mut cfg = Config::default();
        cfg.set_theme(ThemeName::Dark);

        assert_eq!(cfg.theme, Some("dark".to_string()));
        assert_eq!(cfg.theme(), ThemeName::Dark);
    }

    #[test]
    fn unrecognized_stored_theme_falls_back_to_default() {
        let cfg = Config { theme: Some("sepia".to_string()) };
        assert_eq!(cfg.theme(), ThemeName::White);
    }

    #[test]
    fn config_serializes_to_a_single_theme_key() {
        let mut cfg = Config::default();
        cfg.set_theme(ThemeName::Pink);

        let toml = toml::to_string_pretty(&cfg).expect("serialize");
        assert_eq!(toml.trim(), r#"theme = "pink""#);

        let back: Config = toml::from_str(&toml).expect("parse");
        assert_eq!(back.theme(), ThemeName::Pink);
    }
}
