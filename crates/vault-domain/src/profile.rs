//! Wire shapes shared with the backend: the submission payload sent when a
//! vault is created or updated, and the stored profile returned on fetch.
//!
//! Field names follow the backend contract and must not be renamed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetTier;
use crate::common::{CohabitationStatus, CurrencyCode};
use crate::love_language::LoveLanguage;
use crate::milestone::{MilestoneRecurrence, MilestoneType};

/// One-shot snapshot of a wizard session, ready to be posted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionPayload {
    pub partner_name: String,
    pub relationship_tenure_months: u32,
    pub cohabitation_status: CohabitationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_country: Option<String>,
    pub interests: Vec<String>,
    pub dislikes: Vec<String>,
    pub milestones: Vec<MilestonePayload>,
    pub vibes: Vec<String>,
    pub budgets: Vec<BudgetPayload>,
    pub love_languages: LoveLanguagesPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestonePayload {
    pub milestone_type: MilestoneType,
    pub milestone_name: String,
    /// Month and day in the placeholder year (`2000-MM-DD`).
    pub milestone_date: NaiveDate,
    pub recurrence: MilestoneRecurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_tier: Option<BudgetTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetPayload {
    pub occasion_type: BudgetTier,
    pub min_amount: i64,
    pub max_amount: i64,
    pub currency: CurrencyCode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoveLanguagesPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<LoveLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<LoveLanguage>,
}

/// Profile as returned by the fetch endpoint.
///
/// Enumerated values are kept as raw strings where the backend may hold values
/// this client does not know yet; hydration decides how to degrade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VaultProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault_id: Option<String>,
    pub partner_name: String,
    #[serde(default)]
    pub relationship_tenure_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohabitation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_country: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<ProfileMilestone>,
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub budgets: Vec<ProfileBudget>,
    #[serde(default)]
    pub love_languages: Vec<ProfileLoveLanguage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileMilestone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub milestone_type: MilestoneType,
    pub milestone_name: String,
    pub milestone_date: NaiveDate,
    #[serde(default)]
    pub recurrence: MilestoneRecurrence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_tier: Option<BudgetTier>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileBudget {
    pub occasion_type: BudgetTier,
    pub min_amount: i64,
    pub max_amount: i64,
    #[serde(default)]
    pub currency: CurrencyCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileLoveLanguage {
    pub language: String,
    pub priority: u8,
}

impl VaultProfile {
    /// Profile the backend would store for `payload`.
    pub fn from_payload(payload: &SubmissionPayload) -> Self {
        let milestones = payload
            .milestones
            .iter()
            .map(|milestone| ProfileMilestone {
                id: None,
                milestone_type: milestone.milestone_type,
                milestone_name: milestone.milestone_name.clone(),
                milestone_date: milestone.milestone_date,
                recurrence: milestone.recurrence,
                budget_tier: milestone.budget_tier,
            })
            .collect();

        let budgets = payload
            .budgets
            .iter()
            .map(|budget| ProfileBudget {
                occasion_type: budget.occasion_type,
                min_amount: budget.min_amount,
                max_amount: budget.max_amount,
                currency: budget.currency.clone(),
            })
            .collect();

        let ranked = [
            (payload.love_languages.primary, 1),
            (payload.love_languages.secondary, 2),
        ];
        let love_languages = ranked
            .into_iter()
            .filter_map(|(language, priority)| {
                language.map(|language| ProfileLoveLanguage {
                    language: language.key().to_string(),
                    priority,
                })
            })
            .collect();

        Self {
            vault_id: None,
            partner_name: payload.partner_name.clone(),
            relationship_tenure_months: payload.relationship_tenure_months,
            cohabitation_status: Some(payload.cohabitation_status.key().to_string()),
            location_city: payload.location_city.clone(),
            location_state: payload.location_state.clone(),
            location_country: payload.location_country.clone(),
            interests: payload.interests.clone(),
            dislikes: payload.dislikes.clone(),
            milestones,
            vibes: payload.vibes.clone(),
            budgets,
            love_languages,
        }
    }
}
