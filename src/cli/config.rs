//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
///
/// The core algorithms never read ambient process state; everything
/// path-like is resolved here and passed down explicitly.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// The Zettelkasten directory
    pub dir: Option<PathBuf>,

    /// Staging directory for freshly imported notes
    pub input_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/zettel/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zettel")
            .join("config.toml")
    }

    /// Resolve the Zettelkasten directory, with CLI argument taking
    /// precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn kasten_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the staging input directory.
    ///
    /// Precedence order:
    /// 1. CLI `--input` argument
    /// 2. Config file `input_dir` setting
    /// 3. `input/` inside the Zettelkasten directory
    pub fn input_dir(&self, cli_input: Option<&PathBuf>, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_input
            .cloned()
            .or_else(|| self.input_dir.clone())
            .unwrap_or_else(|| self.kasten_dir(cli_dir).join("input"))
    }
}
