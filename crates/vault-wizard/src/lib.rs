//! vault-wizard
//!
//! Multi-step wizard engine behind vault onboarding, profile editing and
//! budget configuration: step registry, per-step validation, payload
//! synthesis and edit-mode hydration.
//! Depends on vault-domain. No UI, no network, no storage.

pub mod action;
pub mod error;
pub mod gateway;
pub mod hydrate;
pub mod payload;
pub mod rules;
pub mod selection;
pub mod state;
pub mod step;
pub mod validation;

#[cfg(test)]
mod tests;

pub use action::{apply_action, parse_script, ActionEffect, ActionOutcome, WizardAction};
pub use error::{GatewayError, WizardError};
pub use gateway::{fetch_for_edit, submit_with, ProfileGateway, SubmitMode};
pub use hydrate::{hydrate, hydrate_with_rules};
pub use payload::build_submission_payload;
pub use rules::WizardRules;
pub use selection::{Rejection, SelectionChange, TierBudget};
pub use state::WizardState;
pub use step::{progress, WizardStep, TOTAL_STEPS};
pub use validation::StepIssue;
