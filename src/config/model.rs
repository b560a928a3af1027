//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("recipient must not be empty")]
    EmptyRecipient,
    #[error("ui.tick_rate_ms must be between 10 and 1000, got {0}")]
    TickRateOutOfRange(u64),
    #[error("unknown logging.level {0:?} (expected trace, debug, info, warn or error)")]
    UnknownLogLevel(String),
}

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipient: default_recipient(),
            ui: UiConfig::default(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recipient.trim().is_empty() {
            return Err(ConfigError::EmptyRecipient);
        }
        let rate = self.ui.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&rate) {
            return Err(ConfigError::TickRateOutOfRange(rate));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::UnknownLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}

fn default_recipient() -> String {
    "Fifi".into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Animation frame interval.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Draw the floating hearts on the intro screen.
    #[serde(default = "default_true")]
    pub particles: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            particles: true,
        }
    }
}

fn default_tick_rate() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Ring the terminal bell each time the negative button is pressed.
    #[serde(default)]
    pub bell_on_decline: bool,
}

/// Session log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// `log_dir` with a leading `~` expanded to the home directory.
    pub fn resolved_dir(&self) -> PathBuf {
        match self.log_dir.strip_prefix("~/") {
            Some(rest) => match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => PathBuf::from(&self.log_dir),
            },
            None => PathBuf::from(&self.log_dir),
        }
    }

    pub fn max_level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

fn default_log_dir() -> String {
    "~/.local/share/valentine/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.recipient, "Fifi");
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert!(cfg.ui.particles);
        assert!(!cfg.behavior.bell_on_decline);
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            recipient = "Alex"

            [behavior]
            bell_on_decline = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.recipient, "Alex");
        assert!(cfg.behavior.bell_on_decline);
        assert_eq!(cfg.ui, UiConfig::default());
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn rejects_blank_recipient() {
        let cfg = AppConfig {
            recipient: "  ".into(),
            ..AppConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyRecipient));
    }

    #[test]
    fn rejects_tick_rate_out_of_range() {
        let mut cfg = AppConfig::default();
        cfg.ui.tick_rate_ms = 5;
        assert_eq!(cfg.validate(), Err(ConfigError::TickRateOutOfRange(5)));
        cfg.ui.tick_rate_ms = 5000;
        assert_eq!(cfg.validate(), Err(ConfigError::TickRateOutOfRange(5000)));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut cfg = AppConfig::default();
        cfg.logging.level = "loud".into();
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnknownLogLevel("loud".into()))
        );
    }

    #[test]
    fn log_level_parses() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.max_level(), tracing::Level::INFO);
        logging.level = "debug".into();
        assert_eq!(logging.max_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn absolute_log_dir_is_untouched() {
        let logging = LoggingConfig {
            log_dir: "/var/log/valentine".into(),
            ..LoggingConfig::default()
        };
        assert_eq!(logging.resolved_dir(), PathBuf::from("/var/log/valentine"));
    }
}
