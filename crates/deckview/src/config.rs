use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "deckview";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// "light" or "dark"; overrides the deck's own theme hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// "first" or a 1-based slide number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_mode: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `deckview config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# deckview configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.start_mode" => {
                if value != "first" && value.parse::<usize>().is_err() {
                    anyhow::bail!(
                        "Invalid start_mode: {value}. Must be 'first' or a slide number."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_mode = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.start_mode"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_validates() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_ok());
        assert_eq!(
            config.defaults.as_ref().unwrap().theme.as_deref(),
            Some("dark")
        );
        assert!(config.set("defaults.theme", "sepia").is_err());
    }

    #[test]
    fn set_start_mode_validates() {
        let mut config = Config::default();
        assert!(config.set("defaults.start_mode", "first").is_ok());
        assert!(config.set("defaults.start_mode", "7").is_ok());
        assert!(config.set("defaults.start_mode", "overview").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("defaults.aspect", "16:9").is_err());
    }

    #[test]
    fn round_trips_through_yaml() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.start_mode", "3").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        let defaults = back.defaults.unwrap();
        assert_eq!(defaults.theme.as_deref(), Some("dark"));
        assert_eq!(defaults.start_mode.as_deref(), Some("3"));
    }
}
