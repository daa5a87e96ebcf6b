//! Shared configuration for the klima CLI and TUI.
//!
//! One TOML file merged with `KLIMA_`-prefixed environment variables, and
//! translation to `klima_core::ConsoleConfig`. The API base URL resolves
//! in order: explicit flag (handled by the binaries) → config/`KLIMA_API_URL`
//! → the fixed localhost fallback.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use klima_core::config::DEFAULT_BASE_URL;
use klima_core::ConsoleConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// API base URL. Env: `KLIMA_API_URL`. Falls back to localhost.
    pub api_url: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "klima", "klima").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("klima");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("KLIMA_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning defaults when no file exists.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `ConsoleConfig` from loaded configuration, applying the fixed
/// localhost fallback when no base URL is configured anywhere.
pub fn to_console_config(cfg: &Config, url_override: Option<&str>) -> Result<ConsoleConfig, ConfigError> {
    let raw = url_override
        .or(cfg.api_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);

    let base_url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;

    Ok(ConsoleConfig {
        base_url,
        timeout: Duration::from_secs(cfg.defaults.timeout),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn fallback_url_applies_when_nothing_is_configured() {
        let cfg = Config::default();
        let console = to_console_config(&cfg, None).unwrap();
        assert_eq!(console.base_url.as_str(), "https://localhost:7063/");
        assert_eq!(console.timeout, Duration::from_secs(30));
    }

    #[test]
    fn override_beats_config_file_value() {
        let cfg = Config {
            api_url: Some("https://fleet.example.com".into()),
            defaults: Defaults::default(),
        };

        let console = to_console_config(&cfg, Some("http://10.0.0.5:8080")).unwrap();
        assert_eq!(console.base_url.as_str(), "http://10.0.0.5:8080/");

        let console = to_console_config(&cfg, None).unwrap();
        assert_eq!(console.base_url.as_str(), "https://fleet.example.com/");
    }

    #[test]
    fn invalid_url_is_a_validation_error() {
        let cfg = Config {
            api_url: Some("not a url".into()),
            defaults: Defaults::default(),
        };
        let err = to_console_config(&cfg, None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn env_var_provides_the_base_url() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("KLIMA_API_URL", "http://env.example:9000");

            let figment = Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Env::prefixed("KLIMA_"));
            let cfg: Config = figment.extract()?;

            assert_eq!(cfg.api_url.as_deref(), Some("http://env.example:9000"));
            Ok(())
        });
    }
}
