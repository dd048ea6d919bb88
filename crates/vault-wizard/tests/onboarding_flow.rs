use vault_domain::{BudgetTier, LoveLanguage, MilestoneType};
use vault_wizard::{
    apply_action, parse_script, ActionEffect, Rejection, WizardRules, WizardState, WizardStep,
};

const ONBOARDING: &str = r#"[
    {"action": "next"},
    {"action": "set_partner_name", "value": "Riley"},
    {"action": "set_tenure_months", "value": 18},
    {"action": "set_cohabitation", "value": "living_together"},
    {"action": "set_location", "city": "Denver", "state": "CO"},
    {"action": "next"},
    {"action": "toggle_interest", "tag": "Travel"},
    {"action": "toggle_interest", "tag": "Cooking"},
    {"action": "toggle_interest", "tag": "Music"},
    {"action": "next"},
    {"action": "toggle_dislike", "tag": "Music"},
    {"action": "toggle_dislike", "tag": "Golf"},
    {"action": "toggle_dislike", "tag": "Yoga"},
    {"action": "toggle_dislike", "tag": "Wine"},
    {"action": "next"},
    {"action": "set_birthday", "month": 11, "day": 31},
    {"action": "toggle_holiday", "id": "halloween"},
    {"action": "toggle_holiday", "id": "arbor_day"},
    {"action": "next"},
    {"action": "toggle_vibe", "tag": "vintage"},
    {"action": "next"},
    {"action": "toggle_budget_range", "tier": "minor_occasion", "range": "5000-10000"},
    {"action": "next"},
    {"action": "tap_love_language", "language": "words_of_affirmation"},
    {"action": "tap_love_language", "language": "physical_touch"},
    {"action": "next"}
]"#;

fn small_rules() -> WizardRules {
    WizardRules {
        required_interests: 3,
        required_dislikes: 3,
        ..WizardRules::default()
    }
}

#[test]
fn scripted_onboarding_reaches_completion() {
    let mut state = WizardState::with_rules(small_rules());
    let actions = parse_script(ONBOARDING).expect("script parses");

    let outcomes: Vec<_> = actions
        .into_iter()
        .map(|action| apply_action(&mut state, action))
        .collect();

    let rejected: Vec<Rejection> = outcomes
        .iter()
        .filter_map(|outcome| match outcome.effect {
            ActionEffect::Rejected { reason } => Some(reason),
            _ => None,
        })
        .collect();
    assert_eq!(
        rejected,
        vec![Rejection::ConflictsWithInterests, Rejection::UnknownHoliday]
    );

    assert_eq!(state.current_step(), WizardStep::Completion);
    assert!(state.can_proceed());
    assert!(state.incomplete_steps().is_empty());
    assert_eq!(state.birthday().day, 30);

    let payload = state.submission_payload();
    assert_eq!(payload.partner_name, "Riley");
    assert_eq!(payload.location_country, None);
    assert_eq!(payload.milestones.len(), 2);
    assert_eq!(payload.milestones[1].milestone_type, MilestoneType::Holiday);
    assert_eq!(payload.milestones[1].milestone_name, "Halloween");
    assert_eq!(payload.love_languages.primary, Some(LoveLanguage::WordsOfAffirmation));
    assert_eq!(payload.love_languages.secondary, Some(LoveLanguage::PhysicalTouch));

    let minor = payload
        .budgets
        .iter()
        .find(|budget| budget.occasion_type == BudgetTier::MinorOccasion)
        .expect("minor tier present");
    assert_eq!((minor.min_amount, minor.max_amount), (5000, 15000));
}

#[test]
fn blocked_step_reports_message_until_fixed() {
    let mut state = WizardState::with_rules(small_rules());
    state.jump_to(WizardStep::Dislikes);
    state.toggle_dislike("Golf");
    let outcome = apply_action(
        &mut state,
        parse_script(r#"[{"action": "toggle_dislike", "tag": "Yoga"}]"#)
            .expect("script")
            .remove(0),
    );
    assert!(!outcome.can_proceed);
    assert_eq!(
        outcome.validation_message.as_deref(),
        Some("Pick exactly 3 dislikes (2 selected).")
    );
}

#[test]
fn draft_snapshot_restores_identical_state() {
    let mut state = WizardState::new();
    for action in parse_script(ONBOARDING).expect("script") {
        apply_action(&mut state, action);
    }
    let json = serde_json::to_string(&state).expect("serialize");
    let restored: WizardState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);
}
