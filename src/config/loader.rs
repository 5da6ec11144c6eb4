//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{ApiKey, RelayConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the upstream credential.
pub const API_KEY_ENV: &str = "DOG_API_KEY";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RelayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the runtime configuration.
///
/// Defaults, then the optional TOML file, then `.env`, then `DOG_API_KEY`.
/// The credential is read exactly once here; handlers receive it through
/// the constructed client.
pub fn resolve(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
        }
    }

    let config = apply_env_overrides(config, std::env::var(API_KEY_ENV).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply the environment credential on top of file configuration.
///
/// Blank keys are dropped so no empty `x-api-key` header is ever sent.
pub fn apply_env_overrides(mut config: RelayConfig, env_key: Option<String>) -> RelayConfig {
    if let Some(key) = env_key.and_then(ApiKey::new) {
        config.upstream.api_key = Some(key);
    }
    config.upstream.api_key = config
        .upstream
        .api_key
        .take()
        .and_then(|key| ApiKey::new(key.expose()));
    config
}
