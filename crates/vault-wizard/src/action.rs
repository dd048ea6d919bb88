//! Serializable host commands for a wizard session.
//!
//! The CLI replays scripts of these and the C ABI accepts them one at a time,
//! so both surfaces drive the exact same mutators.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vault_domain::{BudgetTier, CohabitationStatus, LoveLanguage, LoveLanguageTap, MilestoneRecurrence};

use crate::selection::{Rejection, SelectionChange};
use crate::{WizardError, WizardState, WizardStep};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Previous,
    JumpTo {
        step: WizardStep,
    },
    SetPartnerName {
        value: String,
    },
    SetTenureMonths {
        value: u32,
    },
    SetCohabitation {
        value: CohabitationStatus,
    },
    SetLocation {
        #[serde(default)]
        city: String,
        #[serde(default)]
        state: String,
        #[serde(default)]
        country: String,
    },
    ToggleInterest {
        tag: String,
    },
    ToggleDislike {
        tag: String,
    },
    ToggleVibe {
        tag: String,
    },
    ToggleHoliday {
        id: String,
    },
    SetBirthday {
        month: u32,
        day: u32,
    },
    SetAnniversaryEnabled {
        enabled: bool,
    },
    SetAnniversary {
        month: u32,
        day: u32,
    },
    AddCustomMilestone {
        name: String,
        month: u32,
        day: u32,
        #[serde(default)]
        recurrence: MilestoneRecurrence,
    },
    RemoveCustomMilestone {
        id: Uuid,
    },
    ToggleBudgetRange {
        tier: BudgetTier,
        range: String,
    },
    TapLoveLanguage {
        language: LoveLanguage,
    },
}

/// What one action did.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionEffect {
    Navigated { moved: bool },
    Updated,
    Added,
    Removed,
    Rejected { reason: Rejection },
    LoveLanguage { tap: LoveLanguageTap },
    MilestoneAdded { id: Uuid },
}

impl From<SelectionChange> for ActionEffect {
    fn from(change: SelectionChange) -> Self {
        match change {
            SelectionChange::Added => ActionEffect::Added,
            SelectionChange::Removed => ActionEffect::Removed,
            SelectionChange::Rejected(reason) => ActionEffect::Rejected { reason },
        }
    }
}

/// Result of [`apply_action`], taken after the step was re-validated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActionOutcome {
    pub step: WizardStep,
    pub can_proceed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    pub effect: ActionEffect,
}

/// Applies `action` and re-validates the active step so the outcome always
/// reflects the new answers.
pub fn apply_action(state: &mut WizardState, action: WizardAction) -> ActionOutcome {
    let effect = match action {
        WizardAction::Next => ActionEffect::Navigated {
            moved: state.go_to_next_step(),
        },
        WizardAction::Previous => ActionEffect::Navigated {
            moved: state.go_to_previous_step(),
        },
        WizardAction::JumpTo { step } => {
            let moved = state.current_step() != step;
            state.jump_to(step);
            ActionEffect::Navigated { moved }
        }
        WizardAction::SetPartnerName { value } => {
            state.set_partner_name(value);
            ActionEffect::Updated
        }
        WizardAction::SetTenureMonths { value } => {
            state.set_relationship_tenure_months(value);
            ActionEffect::Updated
        }
        WizardAction::SetCohabitation { value } => {
            state.set_cohabitation_status(value);
            ActionEffect::Updated
        }
        WizardAction::SetLocation {
            city,
            state: region,
            country,
        } => {
            state.set_location_city(city);
            state.set_location_state(region);
            state.set_location_country(country);
            ActionEffect::Updated
        }
        WizardAction::ToggleInterest { tag } => state.toggle_interest(&tag).into(),
        WizardAction::ToggleDislike { tag } => state.toggle_dislike(&tag).into(),
        WizardAction::ToggleVibe { tag } => state.toggle_vibe(&tag).into(),
        WizardAction::ToggleHoliday { id } => state.toggle_holiday(&id).into(),
        WizardAction::SetBirthday { month, day } => {
            state.set_birthday(month, day);
            ActionEffect::Updated
        }
        WizardAction::SetAnniversaryEnabled { enabled } => {
            state.set_anniversary_enabled(enabled);
            ActionEffect::Updated
        }
        WizardAction::SetAnniversary { month, day } => {
            state.set_anniversary(month, day);
            ActionEffect::Updated
        }
        WizardAction::AddCustomMilestone {
            name,
            month,
            day,
            recurrence,
        } => match state.add_custom_milestone(&name, month, day, recurrence) {
            Ok(id) => ActionEffect::MilestoneAdded { id },
            Err(reason) => ActionEffect::Rejected { reason },
        },
        WizardAction::RemoveCustomMilestone { id } => {
            if state.remove_custom_milestone(id) {
                ActionEffect::Removed
            } else {
                ActionEffect::Rejected {
                    reason: Rejection::UnknownMilestone,
                }
            }
        }
        WizardAction::ToggleBudgetRange { tier, range } => {
            state.toggle_budget_range(tier, &range).into()
        }
        WizardAction::TapLoveLanguage { language } => ActionEffect::LoveLanguage {
            tap: state.select_love_language(language),
        },
    };

    state.validate_current_step();
    ActionOutcome {
        step: state.current_step(),
        can_proceed: state.can_proceed(),
        validation_message: state.validation_message(),
        effect,
    }
}

/// Parses a JSON array of actions.
pub fn parse_script(source: &str) -> Result<Vec<WizardAction>, WizardError> {
    Ok(serde_json::from_str(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_parses_tagged_actions() {
        let script = r#"[
            {"action": "next"},
            {"action": "set_partner_name", "value": "Alex"},
            {"action": "toggle_budget_range", "tier": "just_because", "range": "1000-2000"},
            {"action": "tap_love_language", "language": "quality_time"},
            {"action": "add_custom_milestone", "name": "First date", "month": 4, "day": 31}
        ]"#;
        let actions = parse_script(script).unwrap();
        assert_eq!(actions.len(), 5);
        assert_eq!(
            actions[2],
            WizardAction::ToggleBudgetRange {
                tier: BudgetTier::JustBecause,
                range: "1000-2000".into(),
            }
        );
        assert!(matches!(
            actions[4],
            WizardAction::AddCustomMilestone {
                recurrence: MilestoneRecurrence::Yearly,
                ..
            }
        ));
    }

    #[test]
    fn unknown_action_is_a_script_error() {
        let err = parse_script(r#"[{"action": "teleport"}]"#).unwrap_err();
        assert!(matches!(err, WizardError::Script(_)));
    }

    #[test]
    fn outcome_reflects_revalidation() {
        let mut state = WizardState::new();
        apply_action(&mut state, WizardAction::Next);
        assert!(!state.can_proceed());

        let outcome = apply_action(
            &mut state,
            WizardAction::SetPartnerName {
                value: "Alex".into(),
            },
        );
        assert_eq!(outcome.step, WizardStep::BasicInfo);
        assert!(outcome.can_proceed);
        assert_eq!(outcome.validation_message, None);
        assert_eq!(outcome.effect, ActionEffect::Updated);
    }

    #[test]
    fn blank_milestone_is_rejected() {
        let mut state = WizardState::new();
        let outcome = apply_action(
            &mut state,
            WizardAction::AddCustomMilestone {
                name: "   ".into(),
                month: 5,
                day: 1,
                recurrence: MilestoneRecurrence::OneTime,
            },
        );
        assert_eq!(
            outcome.effect,
            ActionEffect::Rejected {
                reason: Rejection::BlankName
            }
        );
        assert!(state.custom_milestones().is_empty());
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let mut state = WizardState::new();
        let outcome = apply_action(
            &mut state,
            WizardAction::ToggleBudgetRange {
                tier: BudgetTier::JustBecause,
                range: "2000-5000".into(),
            },
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["effect"]["kind"], "rejected");
        assert_eq!(json["effect"]["reason"], "last_budget_range");
        assert_eq!(json["step"], "welcome");
    }
}
