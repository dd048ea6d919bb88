//! Edit-mode hydration: rebuilds a wizard session from a stored profile so the
//! same steps and rules can be reused for editing.

use tracing::{debug, warn};
use uuid::Uuid;

use vault_domain::{
    holiday_on, BudgetRangeOption, CohabitationStatus, CustomMilestone, LoveLanguage,
    MilestoneType, MonthDay, VaultProfile,
};

use crate::selection::TierBudget;
use crate::{WizardRules, WizardState};

pub fn hydrate(profile: &VaultProfile) -> WizardState {
    hydrate_with_rules(profile, WizardRules::default())
}

/// Populates a fresh session from `profile`.
///
/// Budgets come back as a single synthetic `"{min}-{max}"` range per tier, so
/// a multi-range selection collapses to its effective bounds. Holidays are
/// matched to the catalog by date, first match wins.
pub fn hydrate_with_rules(profile: &VaultProfile, rules: WizardRules) -> WizardState {
    let mut state = WizardState::with_rules(rules);

    state.partner_name = profile.partner_name.clone();
    state.relationship_tenure_months = profile.relationship_tenure_months;
    state.cohabitation_status = match profile.cohabitation_status.as_deref() {
        None => CohabitationStatus::default(),
        Some(raw) => CohabitationStatus::from_key(raw).unwrap_or_else(|| {
            warn!(status = raw, "unknown cohabitation status, using default");
            CohabitationStatus::default()
        }),
    };
    state.location_city = profile.location_city.clone().unwrap_or_default();
    state.location_state = profile.location_state.clone().unwrap_or_default();
    state.location_country = profile.location_country.clone().unwrap_or_default();

    state.interests = clean_tags(&profile.interests);
    state.dislikes = clean_tags(&profile.dislikes);
    let overlap: Vec<String> = state.dislikes.intersection(&state.interests).cloned().collect();
    for tag in overlap {
        warn!(tag = %tag, "dislike also listed as interest, dropping dislike");
        state.dislikes.remove(&tag);
    }
    state.vibes = clean_tags(&profile.vibes);

    let mut seen_birthday = false;
    for milestone in &profile.milestones {
        let date = MonthDay::from_date(milestone.milestone_date);
        match milestone.milestone_type {
            MilestoneType::Birthday if !seen_birthday => {
                state.birthday = date;
                seen_birthday = true;
            }
            MilestoneType::Birthday => {
                warn!(name = %milestone.milestone_name, "extra birthday milestone ignored");
            }
            MilestoneType::Anniversary => {
                state.anniversary_enabled = true;
                state.anniversary = date;
            }
            MilestoneType::Holiday => match holiday_on(date) {
                Some(holiday) => {
                    state.holidays.insert(holiday.id.to_string());
                }
                None => {
                    warn!(
                        name = %milestone.milestone_name,
                        date = %date,
                        "holiday date not in catalog, dropping"
                    );
                }
            },
            MilestoneType::Custom => {
                let mut custom = CustomMilestone::new(
                    milestone.milestone_name.clone(),
                    date.month,
                    date.day,
                    milestone.recurrence,
                );
                if let Some(id) = milestone
                    .id
                    .as_deref()
                    .and_then(|raw| Uuid::parse_str(raw).ok())
                {
                    custom.id = id;
                }
                state.custom_milestones.push(custom);
            }
        }
    }
    if !seen_birthday {
        warn!("profile has no birthday milestone, keeping default date");
    }

    for budget in &profile.budgets {
        let (min, max) = if budget.max_amount >= budget.min_amount {
            (budget.min_amount, budget.max_amount)
        } else {
            warn!(
                occasion = budget.occasion_type.occasion_type(),
                "budget stored with max below min, swapping"
            );
            (budget.max_amount, budget.min_amount)
        };
        *state.budgets.tier_mut(budget.occasion_type) =
            TierBudget::single(BudgetRangeOption::new(min.max(0), max.max(0)));
    }

    let mut ranked: Vec<_> = profile.love_languages.iter().collect();
    ranked.sort_by_key(|entry| entry.priority);
    for entry in ranked {
        let Some(language) = LoveLanguage::from_key(&entry.language) else {
            warn!(language = %entry.language, "unknown love language ignored");
            continue;
        };
        match entry.priority {
            1 if state.love_languages.primary.is_none() => {
                state.love_languages.primary = Some(language);
            }
            2 if state.love_languages.primary != Some(language) => {
                state.love_languages.secondary = Some(language);
            }
            other => {
                debug!(priority = other, language = language.key(), "love language skipped");
            }
        }
    }
    if state.love_languages.primary.is_none() {
        state.love_languages.secondary = None;
    }

    state.validate_current_step();
    state
}

fn clean_tags(tags: &[String]) -> std::collections::BTreeSet<String> {
    tags.iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
