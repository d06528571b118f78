//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/skillgrep/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/skillgrep/` (~/.config/skillgrep/)
//! - State/Logs: `$XDG_STATE_HOME/skillgrep/` (~/.local/state/skillgrep/)
//!
//! The simulated product itself consumes no configuration (the "API key"
//! on the onboarding screen is cosmetic); what lives here are host-side
//! knobs: the demo latency durations and the log level.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Simulated latency durations
    #[serde(default)]
    pub demo: DemoConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fixed durations (in milliseconds) for the timers that stand in for
/// network and AI latency. They are UI affordances, not scheduling: each
/// one is a single cancellable one-shot deadline.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DemoConfig {
    /// SSO sign-in delay on the auth screen
    #[serde(default = "default_sign_in_ms")]
    pub sign_in_ms: u64,

    /// ATS connect delay on the onboarding screen
    #[serde(default = "default_connect_ms")]
    pub connect_ms: u64,

    /// Assistant typing delay before a scripted reply
    #[serde(default = "default_typing_ms")]
    pub typing_ms: u64,

    /// "Test on 5 candidates" delay
    #[serde(default = "default_sample_ms")]
    pub sample_ms: u64,

    /// "Run on all" delay before the results screen
    #[serde(default = "default_run_all_ms")]
    pub run_all_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sign_in_ms: default_sign_in_ms(),
            connect_ms: default_connect_ms(),
            typing_ms: default_typing_ms(),
            sample_ms: default_sample_ms(),
            run_all_ms: default_run_all_ms(),
        }
    }
}

impl DemoConfig {
    /// All delays zeroed; used by `--instant` and the UI tests.
    pub fn instant() -> Self {
        Self {
            sign_in_ms: 0,
            connect_ms: 0,
            typing_ms: 0,
            sample_ms: 0,
            run_all_ms: 0,
        }
    }
}

fn default_sign_in_ms() -> u64 {
    800
}

fn default_connect_ms() -> u64 {
    1500
}

fn default_typing_ms() -> u64 {
    1000
}

fn default_sample_ms() -> u64 {
    1500
}

fn default_run_all_ms() -> u64 {
    2000
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/skillgrep/config.toml`
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("skillgrep").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/skillgrep/`
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("skillgrep")
    }

    /// Returns the log file path
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("skillgrep.log")
    }
}
