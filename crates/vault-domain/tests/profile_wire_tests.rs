use serde_json::{json, Value};
use vault_domain::{
    BudgetPayload, BudgetTier, CohabitationStatus, CurrencyCode, LoveLanguage,
    LoveLanguagesPayload, MilestonePayload, MilestoneRecurrence, MilestoneType, MonthDay,
    SubmissionPayload, VaultProfile,
};

fn sample_payload() -> SubmissionPayload {
    SubmissionPayload {
        partner_name: "Alex".into(),
        relationship_tenure_months: 14,
        cohabitation_status: CohabitationStatus::LongDistance,
        location_city: Some("Austin".into()),
        location_state: None,
        location_country: None,
        interests: vec!["Music".into()],
        dislikes: vec!["Golf".into()],
        milestones: vec![MilestonePayload {
            milestone_type: MilestoneType::Custom,
            milestone_name: "First date".into(),
            milestone_date: MonthDay::new(4, 3).placeholder_date(),
            recurrence: MilestoneRecurrence::OneTime,
            budget_tier: Some(BudgetTier::MinorOccasion),
        }],
        vibes: vec!["romantic".into()],
        budgets: vec![BudgetPayload {
            occasion_type: BudgetTier::JustBecause,
            min_amount: 2000,
            max_amount: 5000,
            currency: CurrencyCode::default(),
        }],
        love_languages: LoveLanguagesPayload {
            primary: Some(LoveLanguage::QualityTime),
            secondary: None,
        },
    }
}

#[test]
fn payload_uses_backend_field_names() {
    let value = serde_json::to_value(sample_payload()).expect("serialize");

    assert_eq!(value["partner_name"], "Alex");
    assert_eq!(value["cohabitation_status"], "long_distance");
    assert_eq!(value["location_city"], "Austin");
    assert!(value.get("location_state").is_none());

    assert_eq!(
        value["milestones"][0],
        json!({
            "milestone_type": "custom",
            "milestone_name": "First date",
            "milestone_date": "2000-04-03",
            "recurrence": "one_time",
            "budget_tier": "minor_occasion"
        })
    );
    assert_eq!(
        value["budgets"][0],
        json!({
            "occasion_type": "just_because",
            "min_amount": 2000,
            "max_amount": 5000,
            "currency": "USD"
        })
    );
    assert_eq!(value["love_languages"], json!({"primary": "quality_time"}));
}

#[test]
fn stored_profile_tolerates_sparse_and_unknown_values() {
    let raw = json!({
        "vault_id": "v-123",
        "partner_name": "Sam",
        "cohabitation_status": "roommates",
        "milestones": [{
            "id": "m-1",
            "milestone_type": "birthday",
            "milestone_name": "Sam's Birthday",
            "milestone_date": "2000-02-29"
        }],
        "love_languages": [{"language": "dance_battles", "priority": 1}]
    });

    let profile: VaultProfile = serde_json::from_value(raw).expect("deserialize");
    assert_eq!(profile.vault_id.as_deref(), Some("v-123"));
    assert_eq!(profile.cohabitation_status.as_deref(), Some("roommates"));
    assert_eq!(profile.milestones[0].recurrence, MilestoneRecurrence::Yearly);
    assert!(profile.interests.is_empty());
    assert!(profile.budgets.is_empty());
    assert_eq!(profile.love_languages[0].language, "dance_battles");
}

#[test]
fn profile_from_payload_ranks_love_languages() {
    let profile = VaultProfile::from_payload(&sample_payload());

    assert_eq!(profile.cohabitation_status.as_deref(), Some("long_distance"));
    assert_eq!(profile.love_languages.len(), 1);
    assert_eq!(profile.love_languages[0].language, "quality_time");
    assert_eq!(profile.love_languages[0].priority, 1);

    let value: Value = serde_json::to_value(&profile).expect("serialize");
    assert!(value.get("vault_id").is_none());
    assert_eq!(value["budgets"][0]["currency"], "USD");
}
