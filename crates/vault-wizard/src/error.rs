use thiserror::Error;

/// Failures raised while interpreting host input (step keys, action scripts).
///
/// Step validation never produces one of these; it only flips `can_proceed`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Unknown wizard step: {0}")]
    UnknownStep(String),
    #[error("Invalid action script: {0}")]
    Script(String),
}

impl From<serde_json::Error> for WizardError {
    fn from(err: serde_json::Error) -> Self {
        WizardError::Script(err.to_string())
    }
}

/// Typed failures reported by the profile backend collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),
    #[error("A vault already exists for this account")]
    Conflict,
    #[error("No vault found for this account")]
    NotFound,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("A submission is already in progress")]
    AlreadySubmitting,
}
