//! Builds the backend submission payload from a wizard session.

use vault_domain::{
    non_blank, BudgetPayload, BudgetTier, LoveLanguagesPayload, MilestonePayload,
    MilestoneRecurrence, MilestoneType, SubmissionPayload, HOLIDAY_CATALOG,
};

use crate::WizardState;

/// Snapshot of `state` in the backend contract's shape.
///
/// Total: every field has a safe default, so a barely-filled session still
/// yields a structurally valid payload. Milestones are ordered birthday,
/// anniversary (when enabled), selected holidays in catalog order, then custom
/// milestones in list order. Budgets always carry the three tiers.
pub fn build_submission_payload(state: &WizardState) -> SubmissionPayload {
    let partner_name = state.partner_name.trim().to_string();

    let mut milestones = Vec::with_capacity(
        2 + state.holidays.len() + state.custom_milestones.len(),
    );
    milestones.push(MilestonePayload {
        milestone_type: MilestoneType::Birthday,
        milestone_name: format!("{partner_name}'s Birthday"),
        milestone_date: state.birthday.placeholder_date(),
        recurrence: MilestoneRecurrence::Yearly,
        budget_tier: None,
    });

    if state.anniversary_enabled {
        milestones.push(MilestonePayload {
            milestone_type: MilestoneType::Anniversary,
            milestone_name: "Anniversary".to_string(),
            milestone_date: state.anniversary.placeholder_date(),
            recurrence: MilestoneRecurrence::Yearly,
            budget_tier: None,
        });
    }

    milestones.extend(
        HOLIDAY_CATALOG
            .iter()
            .filter(|holiday| state.holidays.contains(holiday.id))
            .map(|holiday| MilestonePayload {
                milestone_type: MilestoneType::Holiday,
                milestone_name: holiday.name.to_string(),
                milestone_date: holiday.month_day().placeholder_date(),
                recurrence: MilestoneRecurrence::Yearly,
                budget_tier: None,
            }),
    );

    milestones.extend(state.custom_milestones.iter().map(|custom| MilestonePayload {
        milestone_type: MilestoneType::Custom,
        milestone_name: custom.trimmed_name().to_string(),
        milestone_date: custom.month_day().placeholder_date(),
        recurrence: custom.recurrence,
        budget_tier: Some(state.rules.custom_milestone_tier),
    }));

    let budgets = BudgetTier::ALL
        .into_iter()
        .map(|tier| {
            let budget = state.budgets.tier(tier);
            BudgetPayload {
                occasion_type: tier,
                min_amount: budget.min_cents(),
                max_amount: budget.max_cents(),
                currency: state.rules.currency.clone(),
            }
        })
        .collect();

    SubmissionPayload {
        partner_name,
        relationship_tenure_months: state.relationship_tenure_months,
        cohabitation_status: state.cohabitation_status,
        location_city: non_blank(&state.location_city),
        location_state: non_blank(&state.location_state),
        location_country: non_blank(&state.location_country),
        interests: state.interests.iter().cloned().collect(),
        dislikes: state.dislikes.iter().cloned().collect(),
        milestones,
        vibes: state.vibes.iter().cloned().collect(),
        budgets,
        love_languages: LoveLanguagesPayload {
            primary: state.love_languages.primary,
            secondary: state.love_languages.secondary,
        },
    }
}

impl WizardState {
    pub fn submission_payload(&self) -> SubmissionPayload {
        build_submission_payload(self)
    }
}
