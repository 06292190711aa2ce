//! Bot configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::BotError;

/// Configuration for the SafeFolks bot.
///
/// Can be loaded from a TOML file via [`BotConfig::from_toml_file`] or built
/// programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BotConfig {
    /// Telegram bot token. Deliberately optional in the file so it can come
    /// from the `SAFEFOLKS_BOT_TOKEN` environment variable instead of being
    /// committed next to the rest of the config.
    #[serde(default)]
    pub bot_token: Option<String>,

    /// Path of the JSON ledger file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Long-poll timeout for getUpdates, in seconds.
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_data_file() -> PathBuf {
    PathBuf::from("./safefolks_data.json")
}

fn default_poll_timeout() -> u64 {
    30
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl BotConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, BotError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| BotError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, BotError> {
        toml::from_str(s).map_err(|e| BotError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("BotConfig is always serializable to TOML")
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            data_file: default_data_file(),
            poll_timeout_secs: default_poll_timeout(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
