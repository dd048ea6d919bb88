//! Seam to the profile backend. The wizard never talks to a network itself;
//! hosts plug in an implementation (HTTP client, JSON store, test double).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use vault_domain::{SubmissionPayload, VaultProfile};

use crate::{hydrate_with_rules, GatewayError, WizardRules, WizardState};

/// Whether a submission creates the vault or replaces an existing one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    #[default]
    Create,
    Update,
}

pub trait ProfileGateway {
    /// Stored profile for the signed-in account, `None` if no vault exists.
    fn fetch_profile(&self) -> Result<Option<VaultProfile>, GatewayError>;

    fn submit_profile(
        &self,
        payload: &SubmissionPayload,
        mode: SubmitMode,
    ) -> Result<(), GatewayError>;
}

/// Runs one submission round trip against `gateway`.
///
/// The state's submitting flag brackets the call and the outcome lands in its
/// error fields either way. A second call while one is in flight is refused.
pub fn submit_with<G: ProfileGateway + ?Sized>(
    state: &mut WizardState,
    gateway: &G,
    mode: SubmitMode,
) -> Result<SubmissionPayload, GatewayError> {
    if !state.begin_submission() {
        debug!("submission ignored, one is already running");
        return Err(GatewayError::AlreadySubmitting);
    }
    let payload = state.submission_payload();
    info!(
        ?mode,
        milestones = payload.milestones.len(),
        "submitting vault profile"
    );
    let result = gateway.submit_profile(&payload, mode);
    state.finish_submission(result.clone());
    result.map(|()| payload)
}

/// Loads the stored profile and hydrates an edit session from it.
pub fn fetch_for_edit<G: ProfileGateway + ?Sized>(
    gateway: &G,
    rules: WizardRules,
) -> Result<Option<WizardState>, GatewayError> {
    let profile = gateway.fetch_profile()?;
    Ok(profile.map(|profile| hydrate_with_rules(&profile, rules)))
}
