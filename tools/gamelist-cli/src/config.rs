//! Configuration file (config.toml)
//!
//! Optional defaults for the command line. Lives in the platform config
//! directory unless `--config` points elsewhere.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Defaults read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SD card path used when none is given on the command line
    #[serde(default)]
    pub drive: Option<PathBuf>,

    /// Skip the disclaimer prompt (default: false)
    #[serde(default)]
    pub skip_confirmation: bool,
}

/// Returns the platform-specific path of `config.toml`.
///
/// On Windows: `%APPDATA%\Gamelist\config\config.toml`
/// On macOS: `~/Library/Application Support/io.gamelist.Gamelist/config.toml`
/// On Linux: `~/.config/gamelist/config.toml`
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.gamelist", "", "Gamelist")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Parse a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Load from `explicit` if given, else from the platform default location.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(default_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
