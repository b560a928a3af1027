pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("valentine")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "recipient = \"Robin\"\n[ui]\ntick_rate_ms = 100").unwrap();
        let cfg = load_config_from(file.path()).unwrap();
        assert_eq!(cfg.recipient, "Robin");
        assert_eq!(cfg.ui.tick_rate_ms, 100);
    }

    #[test]
    fn invalid_values_are_reported_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "recipient = \"\"").unwrap();
        let err = load_config_from(file.path()).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid config"), "{chain}");
        assert!(chain.contains("recipient must not be empty"), "{chain}");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "recipient = ").unwrap();
        assert!(load_config_from(file.path()).is_err());
    }
}
