//! Window and logging settings, persisted as TOML
//!
//! Gallery contents and timing are compiled in and deliberately absent here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::config::{APP_DIR, ENV_PREFIX, FILENAME};
use crate::constants::validation::{MAX_WINDOW_DIMENSION, MIN_WINDOW_DIMENSION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// error, warn, info, debug or trace
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_window_width")]
    pub window_width: u16,

    #[serde(default = "default_window_height")]
    pub window_height: u16,

    /// Directory the gallery's relative image paths resolve against
    #[serde(default = "default_asset_root")]
    pub asset_root: PathBuf,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> u16 {
    960
}

fn default_window_height() -> u16 {
    720
}

fn default_asset_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            asset_root: default_asset_root(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Read settings from disk. `Ok(None)` means the file does not exist yet.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings = Self::parse(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(settings))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Apply `CAROUSEL_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(format!("{ENV_PREFIX}{key}")).ok());
    }

    /// Apply overrides from `lookup`, keyed without the env prefix.
    /// Unparseable numbers are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level.trim().to_lowercase();
        }
        if let Some(width) = lookup("WINDOW_WIDTH").and_then(|s| s.trim().parse().ok()) {
            self.window_width = width;
        }
        if let Some(height) = lookup("WINDOW_HEIGHT").and_then(|s| s.trim().parse().ok()) {
            self.window_height = height;
        }
        if let Some(root) = lookup("ASSET_ROOT") {
            self.asset_root = PathBuf::from(root);
        }
    }

    /// Clamp values to safe ranges, logging each correction
    pub fn validate_and_clamp(&mut self) {
        let clamp = |name: &str, value: u16| -> u16 {
            let clamped = value.clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
            if clamped != value {
                warn!(
                    setting = name,
                    value,
                    min = MIN_WINDOW_DIMENSION,
                    max = MAX_WINDOW_DIMENSION,
                    "window dimension out of range, clamping"
                );
            }
            clamped
        };
        self.window_width = clamp("window_width", self.window_width);
        self.window_height = clamp("window_height", self.window_height);
    }
}
