use insta::assert_snapshot;

use vault_domain::{BudgetTier, LoveLanguage, LoveLanguageTap, MilestoneRecurrence, VaultProfile};

use crate::{
    build_submission_payload, hydrate, Rejection, SelectionChange, StepIssue, WizardState,
    WizardStep,
};

const FIVE_INTERESTS: [&str; 5] = ["Travel", "Cooking", "Music", "Hiking", "Photography"];
const FIVE_DISLIKES: [&str; 5] = ["Camping", "Gaming", "Fishing", "Golf", "Yoga"];

fn at(step: WizardStep) -> WizardState {
    let mut state = WizardState::new();
    state.jump_to(step);
    state
}

fn filled_state() -> WizardState {
    let mut state = WizardState::new();
    state.set_partner_name("  Alex ");
    state.set_relationship_tenure_months(30);
    state.set_location_city("Portland");
    state.set_location_country("USA");
    for tag in FIVE_INTERESTS {
        state.toggle_interest(tag);
    }
    for tag in FIVE_DISLIKES {
        state.toggle_dislike(tag);
    }
    state.set_birthday(2, 29);
    state.set_anniversary_enabled(true);
    state.set_anniversary(10, 12);
    state.toggle_holiday("christmas");
    state.toggle_holiday("valentines_day");
    state
        .add_custom_milestone("First date", 4, 3, MilestoneRecurrence::Yearly)
        .expect("named milestone");
    state.toggle_vibe("romantic");
    state.toggle_vibe("outdoorsy");
    state.toggle_budget_range(BudgetTier::MajorMilestone, "50000-100000");
    state.select_love_language(LoveLanguage::QualityTime);
    state.select_love_language(LoveLanguage::ReceivingGifts);
    state
}

#[test]
fn partner_name_unlocks_basic_info() {
    let mut state = WizardState::new();
    state.set_partner_name("Alex");
    state.go_to_next_step();
    assert_eq!(state.current_step(), WizardStep::BasicInfo);
    assert!(state.can_proceed());
    assert_eq!(state.validation_message(), None);
}

#[test]
fn whitespace_name_is_rejected() {
    let mut state = WizardState::new();
    state.set_partner_name("   ");
    state.go_to_next_step();
    assert!(!state.can_proceed());
    assert_eq!(
        state.validation_message().as_deref(),
        Some("Please enter your partner's name.")
    );
    assert_eq!(state.current_issue(), Some(StepIssue::PartnerNameRequired));
}

#[test]
fn sixth_interest_is_rejected() {
    let mut state = at(WizardStep::Interests);
    for tag in FIVE_INTERESTS {
        assert_eq!(state.toggle_interest(tag), SelectionChange::Added);
    }
    assert!(state.validate_current_step());

    let change = state.toggle_interest("Art");
    assert_eq!(
        change,
        SelectionChange::Rejected(Rejection::AtCapacity { limit: 5 })
    );
    assert_eq!(state.interests().len(), 5);
    assert!(!state.interests().contains("Art"));
}

#[test]
fn dislikes_refuse_existing_interests() {
    let mut state = at(WizardStep::Dislikes);
    state.toggle_interest("Music");
    assert_eq!(
        state.toggle_dislike("Music"),
        SelectionChange::Rejected(Rejection::ConflictsWithInterests)
    );
    state.toggle_dislike("Golf");
    assert_eq!(
        state.toggle_interest("Golf"),
        SelectionChange::Rejected(Rejection::ConflictsWithDislikes)
    );
    assert!(state.interests().is_disjoint(state.dislikes()));
}

#[test]
fn toggle_sequences_keep_interests_and_dislikes_disjoint() {
    let mut state = WizardState::new();
    let tags = ["Art", "Music", "Golf", "Yoga", "Wine", "Dance", "Art", "Golf"];
    for (round, tag) in tags.iter().cycle().take(40).enumerate() {
        if round % 3 == 0 {
            state.toggle_dislike(tag);
        } else {
            state.toggle_interest(tag);
        }
        assert!(state.interests().is_disjoint(state.dislikes()));
        assert!(state.interests().len() <= 5);
        assert!(state.dislikes().len() <= 5);
    }
}

#[test]
fn last_budget_range_cannot_be_removed() {
    let mut state = at(WizardStep::Budget);
    let before = state.budget(BudgetTier::JustBecause).clone();
    assert_eq!(before.selected_ids(), vec!["2000-5000".to_string()]);

    let change = state.toggle_budget_range(BudgetTier::JustBecause, "2000-5000");
    assert_eq!(change, SelectionChange::Rejected(Rejection::LastBudgetRange));

    let after = state.budget(BudgetTier::JustBecause);
    assert_eq!(after, &before);
    assert_eq!((after.min_cents(), after.max_cents()), (2000, 5000));
}

#[test]
fn budget_toggles_keep_tiers_consistent() {
    let mut state = at(WizardStep::Budget);
    let ids = ["1000-2000", "2000-5000", "5000-10000", "bogus", "1000-2000"];
    for id in ids.iter().cycle().take(25) {
        state.toggle_budget_range(BudgetTier::JustBecause, id);
        let tier = state.budget(BudgetTier::JustBecause);
        assert!(tier.max_cents() >= tier.min_cents());
        assert!(tier.selected().next().is_some());
    }
    assert!(state.validate_current_step());
}

#[test]
fn love_language_tap_sequence() {
    let mut state = at(WizardStep::LoveLanguages);
    assert_eq!(
        state.select_love_language(LoveLanguage::QualityTime),
        LoveLanguageTap::SetPrimary
    );
    assert_eq!(state.primary_love_language(), Some(LoveLanguage::QualityTime));

    assert_eq!(
        state.select_love_language(LoveLanguage::ReceivingGifts),
        LoveLanguageTap::SetSecondary
    );
    assert_eq!(
        state.secondary_love_language(),
        Some(LoveLanguage::ReceivingGifts)
    );
    assert!(state.validate_current_step());

    assert_eq!(
        state.select_love_language(LoveLanguage::QualityTime),
        LoveLanguageTap::ClearedAll
    );
    assert_eq!(state.primary_love_language(), None);
    assert_eq!(state.secondary_love_language(), None);
    assert!(!state.validate_current_step());
}

#[test]
fn love_language_taps_never_duplicate() {
    let mut state = WizardState::new();
    for language in LoveLanguage::ALL.iter().chain(LoveLanguage::ALL.iter().rev()).cycle().take(33) {
        state.select_love_language(*language);
        let selection = state.love_languages();
        if selection.primary.is_some() || selection.secondary.is_some() {
            assert_ne!(selection.primary, selection.secondary);
        }
        if selection.primary.is_none() {
            assert!(selection.secondary.is_none());
        }
    }
}

#[test]
fn navigation_stops_at_both_ends() {
    let mut state = WizardState::new();
    assert!(!state.go_to_previous_step());
    assert_eq!(state.current_step(), WizardStep::Welcome);

    let mut moves = 0;
    while state.go_to_next_step() {
        moves += 1;
    }
    assert_eq!(moves, 8);
    assert_eq!(state.current_step(), WizardStep::Completion);
    assert!(state.can_proceed());
    assert_eq!(state.progress(), 1.0);
}

#[test]
fn mutations_wait_for_explicit_validation() {
    let mut state = at(WizardStep::Vibes);
    assert!(!state.can_proceed());
    state.toggle_vibe("minimalist");
    assert!(!state.can_proceed());
    assert!(state.validate_current_step());
    assert!(state.can_proceed());
}

#[test]
fn unnamed_milestones_cannot_be_added() {
    let mut state = at(WizardStep::Milestones);
    assert_eq!(
        state.add_custom_milestone("  ", 3, 3, MilestoneRecurrence::OneTime),
        Err(Rejection::BlankName)
    );
    let id = state
        .add_custom_milestone("Gotcha day", 2, 31, MilestoneRecurrence::OneTime)
        .unwrap();
    assert_eq!(state.custom_milestones()[0].day, 29);

    state
        .update_custom_milestone(id, "Adoption day", 11, 31, MilestoneRecurrence::Yearly)
        .unwrap();
    let updated = &state.custom_milestones()[0];
    assert_eq!(updated.id, id);
    assert_eq!((updated.name.as_str(), updated.month, updated.day), ("Adoption day", 11, 30));
    assert!(state.validate_current_step());

    assert!(state.remove_custom_milestone(id));
    assert!(!state.remove_custom_milestone(id));
}

#[test]
fn payload_orders_milestones() {
    let payload = build_submission_payload(&filled_state());
    let names: Vec<&str> = payload
        .milestones
        .iter()
        .map(|milestone| milestone.milestone_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Alex's Birthday",
            "Anniversary",
            "Valentine's Day",
            "Christmas",
            "First date"
        ]
    );
    assert_eq!(payload.milestones[0].milestone_date.to_string(), "2000-02-29");
    assert_eq!(payload.milestones[4].budget_tier, Some(BudgetTier::MinorOccasion));
    assert_eq!(payload.partner_name, "Alex");
    assert_eq!(payload.location_state, None);

    let major = payload
        .budgets
        .iter()
        .find(|budget| budget.occasion_type == BudgetTier::MajorMilestone)
        .unwrap();
    assert_eq!((major.min_amount, major.max_amount), (25000, 100000));
}

#[test]
fn payload_round_trips_through_stored_profile() {
    let state = filled_state();
    let payload = build_submission_payload(&state);
    let restored = hydrate(&VaultProfile::from_payload(&payload));

    assert_eq!(restored.partner_name(), "Alex");
    assert_eq!(restored.relationship_tenure_months(), 30);
    assert_eq!(restored.cohabitation_status(), state.cohabitation_status());
    assert_eq!(restored.location_city(), "Portland");
    assert_eq!(restored.location_country(), "USA");
    assert_eq!(restored.interests(), state.interests());
    assert_eq!(restored.dislikes(), state.dislikes());
    assert_eq!(restored.vibes(), state.vibes());
    assert_eq!(restored.love_languages(), state.love_languages());
    assert_eq!(restored.birthday(), state.birthday());
    assert_eq!(restored.anniversary(), state.anniversary());
    assert_eq!(restored.holidays(), state.holidays());
    assert_eq!(restored.custom_milestones().len(), 1);

    for tier in BudgetTier::ALL {
        let (original, back) = (state.budget(tier), restored.budget(tier));
        assert_eq!(original.min_cents(), back.min_cents());
        assert_eq!(original.max_cents(), back.max_cents());
    }
    let major = restored.budget(BudgetTier::MajorMilestone);
    assert_eq!(major.selected_ids(), vec!["25000-100000".to_string()]);
    assert_eq!(restored.current_step(), WizardStep::Welcome);
}

#[test]
fn step_titles_snapshot() {
    let listing = WizardStep::ALL
        .iter()
        .map(|step| format!("{} {} {}", step.index() + 1, step.key(), step.title()))
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(listing, @r###"
    1 welcome Welcome
    2 basic_info The Basics
    3 interests Interests
    4 dislikes Dislikes
    5 milestones Milestones
    6 vibes Aesthetic Vibes
    7 budget Budget
    8 love_languages Love Languages
    9 completion All Set
    "###);
}
