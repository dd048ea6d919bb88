use serde::{Deserialize, Serialize};
use vault_domain::{BudgetTier, CurrencyCode};

/// Tunables for a wizard session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WizardRules {
    /// Exact number of interests needed to leave the interests step.
    pub required_interests: usize,
    /// Exact number of dislikes needed to leave the dislikes step.
    pub required_dislikes: usize,
    /// Currency attached to every budget entry of the payload.
    pub currency: CurrencyCode,
    /// Tier tag sent with custom milestones.
    pub custom_milestone_tier: BudgetTier,
}

impl Default for WizardRules {
    fn default() -> Self {
        Self {
            required_interests: 5,
            required_dislikes: 5,
            currency: CurrencyCode::default(),
            custom_milestone_tier: BudgetTier::MinorOccasion,
        }
    }
}
