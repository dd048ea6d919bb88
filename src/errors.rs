use thiserror::Error;

use vault_config::ConfigError;
use vault_wizard::{GatewayError, WizardError};

/// Error type covering every failure a vault host can surface.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
