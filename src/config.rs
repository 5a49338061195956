use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::vm::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Include completed migrations without passing `--all`
    #[serde(default)]
    pub show_all: bool,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_all: false,
            max_depth: default_max_depth(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Default location, `$XDG_CONFIG_HOME/xcp2incus/config.toml` on Linux
    pub fn get_config_path() -> Option<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()?.join("xcp2incus")
        } else {
            dirs::home_dir()?.join(".xcp2incus")
        };
        Some(config_dir.join("config.toml"))
    }

    /// Load settings from `path`, or from the default location when `None`
    ///
    /// A missing default file gives the defaults. An explicitly requested file
    /// must exist. The config file is never created.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file does not exist: {}", path.display());
                }
                path.to_path_buf()
            }
            None => match Self::get_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Loading config from: {:?}", config_path);
        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config = Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_empty() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.get_settings().max_depth, 2);
        assert!(config.get_settings().color);
        assert!(!config.get_settings().show_all);
    }

    #[test]
    fn test_partial_settings() {
        let config = Config::from_toml("[settings]\nshow_all = true\n").unwrap();
        assert!(config.settings.show_all);
        assert_eq!(config.settings.max_depth, 2);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("[settings]\nmax_depth = \"deep\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[settings]\nmax_depth = 3\ncolor = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.settings.max_depth, 3);
        assert!(!config.settings.color);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
