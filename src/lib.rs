#![doc(test(attr(deny(warnings))))]

//! Vault Core drives the partner-vault wizard: onboarding, profile editing and
//! budget configuration all run through the same step engine. This facade adds
//! the pieces a host binary needs around it (tracing, configuration, drafts and
//! a file-backed profile store).

pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

use vault_config::Config;
use vault_domain::{BudgetTier, CurrencyCode};
use vault_wizard::WizardRules;

pub use errors::VaultError;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Vault Core tracing initialized.");
    });
}

/// Wizard limits derived from persisted preferences.
///
/// An unrecognised milestone tier keeps the default tier rather than failing,
/// so an older config file never blocks the wizard.
pub fn rules_from_config(config: &Config) -> WizardRules {
    let defaults = WizardRules::default();
    let custom_milestone_tier =
        match BudgetTier::from_occasion_type(&config.custom_milestone_budget_tier) {
            Some(tier) => tier,
            None => {
                tracing::warn!(
                    tier = %config.custom_milestone_budget_tier,
                    "unknown custom milestone tier in config, using default"
                );
                defaults.custom_milestone_tier
            }
        };
    WizardRules {
        required_interests: config.required_interests,
        required_dislikes: config.required_dislikes,
        currency: CurrencyCode::new(&config.currency),
        custom_milestone_tier,
    }
}
