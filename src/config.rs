//! Site configuration loaded from TOML.
//!
//! Stored as TOML at `$XDG_CONFIG_HOME/furnions-site/config.toml`
//! (default `~/.config/furnions-site/config.toml`).  Missing keys fall
//! back to their defaults; a missing file means all defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::sections::MotionSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{key} must be greater than zero")]
    ZeroInterval { key: &'static str },
    #[error("smooth_scroll_speed must be within (0, 1), got {0}")]
    Speed(f64),
}

// ───────────────────────────────────────── tables ────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reduced_motion: bool,
    pub catalogue_interval_ms: u64,
    pub day_night_interval_ms: u64,
    pub day_night_fade_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            catalogue_interval_ms: 3000,
            day_night_interval_ms: 6000,
            day_night_fade_ms: 600,
        }
    }
}

impl MotionConfig {
    pub fn to_settings(&self) -> MotionSettings {
        MotionSettings {
            reduced_motion: self.reduced_motion,
            catalogue_interval: Duration::from_millis(self.catalogue_interval_ms),
            day_night_interval: Duration::from_millis(self.day_night_interval_ms),
            day_night_fade: Duration::from_millis(self.day_night_fade_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Event-loop tick; also the timer resolution of every cycle.
    pub tick_rate_ms: u64,
    /// Rows scrolled per arrow key or wheel notch.
    pub scroll_step: u16,
    /// Fraction of the remaining distance covered per tick.
    pub smooth_scroll_speed: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            scroll_step: 3,
            smooth_scroll_speed: 0.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Simulated processing time before a signup is acknowledged.
    pub signup_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            signup_delay_ms: 500,
        }
    }
}

// ───────────────────────────────────────── root ──────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub motion: MotionConfig,
    pub preview: PreviewConfig,
    pub server: ServerConfig,
}

impl SiteConfig {
    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("motion.catalogue_interval_ms", self.motion.catalogue_interval_ms),
            ("motion.day_night_interval_ms", self.motion.day_night_interval_ms),
            ("motion.day_night_fade_ms", self.motion.day_night_fade_ms),
            ("preview.tick_rate_ms", self.preview.tick_rate_ms),
        ];
        for (key, value) in intervals {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { key });
            }
        }
        let speed = self.preview.smooth_scroll_speed;
        if !(speed > 0.0 && speed < 1.0) {
            return Err(ConfigError::Speed(speed));
        }
        Ok(())
    }

    /// Persist to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = String::from("# furnions-site configuration\n\n");
        out.push_str(&toml::to_string_pretty(self)?);
        std::fs::write(path, out)?;
        Ok(())
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/furnions-site/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("furnions-site").join("config.toml")
}
