//! Configuration loading from TOML files

mod constants;

pub use constants::{CombatConstants, FrenzyConstants, InputConstants, StateDurations};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate game constants from a TOML file
pub fn load_constants(path: &Path) -> Result<FrenzyConstants, ConfigError> {
    let constants: FrenzyConstants = load_toml(path)?;
    constants.validate()?;
    tracing::debug!(path = %path.display(), "loaded game constants");
    Ok(constants)
}

/// Parse and validate game constants from a TOML string
pub fn parse_constants(content: &str) -> Result<FrenzyConstants, ConfigError> {
    let constants: FrenzyConstants = parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

/// Get the constants shipped with the crate
pub fn default_constants() -> FrenzyConstants {
    let toml = include_str!("../../config/default.toml");
    parse_constants(toml).unwrap_or_else(|err| {
        tracing::warn!(%err, "embedded config rejected, using built-in defaults");
        FrenzyConstants::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let embedded = default_constants();
        let defaults = FrenzyConstants::default();
        assert_eq!(embedded, defaults);
    }

    #[test]
    fn test_parse_rejects_invalid_chip() {
        let toml = r#"
[combat]
chip_damage_percent = 1.5
"#;
        let err = parse_constants(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_parse_reports_bad_toml() {
        let err = parse_constants("[combat\nbase_damage = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_constants(Path::new("/nonexistent/frenzy.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
