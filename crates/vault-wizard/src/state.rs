//! The wizard state engine.
//!
//! One [`WizardState`] is owned by each editing session (onboarding, profile
//! edit, budget configuration) and passed explicitly to whatever reads or
//! writes it.
//!
//! Mutators never re-validate on their own. After changing a field that the
//! active step depends on, the host calls [`WizardState::validate_current_step`];
//! step navigation is the only place that re-validates automatically.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use vault_domain::{
    holiday_by_id, BudgetRangeOption, BudgetTier, CohabitationStatus, CustomMilestone, Identifiable,
    LoveLanguage, LoveLanguageSelection, LoveLanguageTap, MilestoneRecurrence, MonthDay,
};

use crate::selection::{toggle_capped, toggle_open, Rejection, SelectionChange, TierBudget};
use crate::{GatewayError, WizardRules, WizardStep};

/// Effective budget selection for the three tiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetSelection {
    pub(crate) just_because: TierBudget,
    pub(crate) minor_occasion: TierBudget,
    pub(crate) major_milestone: TierBudget,
}

impl Default for BudgetSelection {
    fn default() -> Self {
        Self {
            just_because: TierBudget::for_tier(BudgetTier::JustBecause),
            minor_occasion: TierBudget::for_tier(BudgetTier::MinorOccasion),
            major_milestone: TierBudget::for_tier(BudgetTier::MajorMilestone),
        }
    }
}

impl BudgetSelection {
    pub fn tier(&self, tier: BudgetTier) -> &TierBudget {
        match tier {
            BudgetTier::JustBecause => &self.just_because,
            BudgetTier::MinorOccasion => &self.minor_occasion,
            BudgetTier::MajorMilestone => &self.major_milestone,
        }
    }

    pub(crate) fn tier_mut(&mut self, tier: BudgetTier) -> &mut TierBudget {
        match tier {
            BudgetTier::JustBecause => &mut self.just_because,
            BudgetTier::MinorOccasion => &mut self.minor_occasion,
            BudgetTier::MajorMilestone => &mut self.major_milestone,
        }
    }
}

/// All answers collected by the vault wizard plus navigation and submission
/// status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WizardState {
    pub(crate) current_step: WizardStep,
    pub(crate) can_proceed: bool,
    #[serde(default)]
    pub(crate) rules: WizardRules,

    pub(crate) partner_name: String,
    pub(crate) relationship_tenure_months: u32,
    pub(crate) cohabitation_status: CohabitationStatus,
    pub(crate) location_city: String,
    pub(crate) location_state: String,
    pub(crate) location_country: String,

    pub(crate) interests: BTreeSet<String>,
    pub(crate) dislikes: BTreeSet<String>,

    pub(crate) birthday: MonthDay,
    pub(crate) anniversary_enabled: bool,
    pub(crate) anniversary: MonthDay,
    pub(crate) holidays: BTreeSet<String>,
    pub(crate) custom_milestones: Vec<CustomMilestone>,

    pub(crate) vibes: BTreeSet<String>,
    pub(crate) budgets: BudgetSelection,
    pub(crate) love_languages: LoveLanguageSelection,

    #[serde(default)]
    pub(crate) is_submitting: bool,
    #[serde(default)]
    pub(crate) error_message: Option<String>,
    #[serde(default)]
    pub(crate) show_error: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::with_rules(WizardRules::default())
    }

    pub fn with_rules(rules: WizardRules) -> Self {
        let mut state = Self {
            current_step: WizardStep::Welcome,
            can_proceed: false,
            rules,
            partner_name: String::new(),
            relationship_tenure_months: 0,
            cohabitation_status: CohabitationStatus::default(),
            location_city: String::new(),
            location_state: String::new(),
            location_country: String::new(),
            interests: BTreeSet::new(),
            dislikes: BTreeSet::new(),
            birthday: MonthDay::default(),
            anniversary_enabled: false,
            anniversary: MonthDay::default(),
            holidays: BTreeSet::new(),
            custom_milestones: Vec::new(),
            vibes: BTreeSet::new(),
            budgets: BudgetSelection::default(),
            love_languages: LoveLanguageSelection::default(),
            is_submitting: false,
            error_message: None,
            show_error: false,
        };
        state.validate_current_step();
        state
    }

    // ---- navigation -------------------------------------------------------

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn can_proceed(&self) -> bool {
        self.can_proceed
    }

    pub fn progress(&self) -> f64 {
        self.current_step.progress()
    }

    pub fn rules(&self) -> &WizardRules {
        &self.rules
    }

    /// Moves forward one step (no-op on the last step) and re-validates.
    ///
    /// Navigation is always allowed; blocking the forward action while
    /// `can_proceed` is false is the host's decision.
    pub fn go_to_next_step(&mut self) -> bool {
        let moved = match self.current_step.next() {
            Some(next) => {
                debug!(from = self.current_step.key(), to = next.key(), "wizard step forward");
                self.current_step = next;
                true
            }
            None => false,
        };
        self.validate_current_step();
        moved
    }

    /// Moves back one step (no-op on the first step) and re-validates.
    pub fn go_to_previous_step(&mut self) -> bool {
        let moved = match self.current_step.previous() {
            Some(previous) => {
                debug!(from = self.current_step.key(), to = previous.key(), "wizard step back");
                self.current_step = previous;
                true
            }
            None => false,
        };
        self.validate_current_step();
        moved
    }

    /// Opens `step` directly, e.g. when an edit screen targets one section.
    pub fn jump_to(&mut self, step: WizardStep) {
        debug!(from = self.current_step.key(), to = step.key(), "wizard step jump");
        self.current_step = step;
        self.validate_current_step();
    }

    /// Recomputes `can_proceed` for the active step and returns it.
    pub fn validate_current_step(&mut self) -> bool {
        self.can_proceed = self.current_issue().is_none();
        self.can_proceed
    }

    /// Why the active step cannot be left yet; `None` while `can_proceed`.
    pub fn validation_message(&self) -> Option<String> {
        if self.can_proceed {
            return None;
        }
        self.current_issue().map(|issue| issue.to_string())
    }

    // ---- basic info -------------------------------------------------------

    pub fn partner_name(&self) -> &str {
        &self.partner_name
    }

    pub fn set_partner_name(&mut self, name: impl Into<String>) {
        self.partner_name = name.into();
    }

    pub fn relationship_tenure_months(&self) -> u32 {
        self.relationship_tenure_months
    }

    pub fn set_relationship_tenure_months(&mut self, months: u32) {
        self.relationship_tenure_months = months;
    }

    pub fn cohabitation_status(&self) -> CohabitationStatus {
        self.cohabitation_status
    }

    pub fn set_cohabitation_status(&mut self, status: CohabitationStatus) {
        self.cohabitation_status = status;
    }

    pub fn location_city(&self) -> &str {
        &self.location_city
    }

    pub fn location_state(&self) -> &str {
        &self.location_state
    }

    pub fn location_country(&self) -> &str {
        &self.location_country
    }

    pub fn set_location_city(&mut self, city: impl Into<String>) {
        self.location_city = city.into();
    }

    pub fn set_location_state(&mut self, state: impl Into<String>) {
        self.location_state = state.into();
    }

    pub fn set_location_country(&mut self, country: impl Into<String>) {
        self.location_country = country.into();
    }

    // ---- interests & dislikes ---------------------------------------------

    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    pub fn dislikes(&self) -> &BTreeSet<String> {
        &self.dislikes
    }

    /// Adds or removes an interest. Refused when the set is full or the tag is
    /// already a dislike.
    pub fn toggle_interest(&mut self, tag: &str) -> SelectionChange {
        let change = toggle_capped(
            &mut self.interests,
            tag,
            self.rules.required_interests,
            &self.dislikes,
            Rejection::ConflictsWithDislikes,
        );
        log_change("interest", tag, change);
        change
    }

    /// Adds or removes a dislike. Refused when the set is full or the tag is
    /// already an interest.
    pub fn toggle_dislike(&mut self, tag: &str) -> SelectionChange {
        let change = toggle_capped(
            &mut self.dislikes,
            tag,
            self.rules.required_dislikes,
            &self.interests,
            Rejection::ConflictsWithInterests,
        );
        log_change("dislike", tag, change);
        change
    }

    // ---- milestones -------------------------------------------------------

    pub fn birthday(&self) -> MonthDay {
        self.birthday
    }

    pub fn set_birthday(&mut self, month: u32, day: u32) {
        self.birthday = MonthDay::new(month, day);
    }

    /// Changes the birthday month, clamping the stored day to the new month.
    pub fn set_birthday_month(&mut self, month: u32) {
        self.birthday = self.birthday.with_month(month);
    }

    pub fn set_birthday_day(&mut self, day: u32) {
        self.birthday = self.birthday.with_day(day);
    }

    pub fn anniversary_enabled(&self) -> bool {
        self.anniversary_enabled
    }

    /// The anniversary date, only meaningful while enabled.
    pub fn anniversary(&self) -> MonthDay {
        self.anniversary
    }

    pub fn set_anniversary_enabled(&mut self, enabled: bool) {
        self.anniversary_enabled = enabled;
    }

    pub fn set_anniversary(&mut self, month: u32, day: u32) {
        self.anniversary = MonthDay::new(month, day);
    }

    pub fn set_anniversary_month(&mut self, month: u32) {
        self.anniversary = self.anniversary.with_month(month);
    }

    pub fn set_anniversary_day(&mut self, day: u32) {
        self.anniversary = self.anniversary.with_day(day);
    }

    pub fn holidays(&self) -> &BTreeSet<String> {
        &self.holidays
    }

    /// Selects or deselects a catalog holiday. Unknown ids are refused.
    pub fn toggle_holiday(&mut self, id: &str) -> SelectionChange {
        let change = if holiday_by_id(id.trim()).is_none() {
            SelectionChange::Rejected(Rejection::UnknownHoliday)
        } else {
            toggle_open(&mut self.holidays, id)
        };
        log_change("holiday", id, change);
        change
    }

    pub fn custom_milestones(&self) -> &[CustomMilestone] {
        &self.custom_milestones
    }

    /// Appends a custom milestone from the add form; blank names are refused.
    pub fn add_custom_milestone(
        &mut self,
        name: &str,
        month: u32,
        day: u32,
        recurrence: MilestoneRecurrence,
    ) -> Result<Uuid, Rejection> {
        if name.trim().is_empty() {
            debug!("custom milestone rejected: blank name");
            return Err(Rejection::BlankName);
        }
        let milestone = CustomMilestone::new(name.trim(), month, day, recurrence);
        let id = milestone.id;
        self.custom_milestones.push(milestone);
        Ok(id)
    }

    /// Replaces the milestone `id` in place, keeping its position and id.
    pub fn update_custom_milestone(
        &mut self,
        id: Uuid,
        name: &str,
        month: u32,
        day: u32,
        recurrence: MilestoneRecurrence,
    ) -> Result<(), Rejection> {
        if name.trim().is_empty() {
            return Err(Rejection::BlankName);
        }
        let entry = self
            .custom_milestones
            .iter_mut()
            .find(|milestone| milestone.id() == id)
            .ok_or(Rejection::UnknownMilestone)?;
        let mut replacement = CustomMilestone::new(name.trim(), month, day, recurrence);
        replacement.id = id;
        *entry = replacement;
        Ok(())
    }

    pub fn remove_custom_milestone(&mut self, id: Uuid) -> bool {
        let before = self.custom_milestones.len();
        self.custom_milestones.retain(|milestone| milestone.id() != id);
        before != self.custom_milestones.len()
    }

    // ---- vibes ------------------------------------------------------------

    pub fn vibes(&self) -> &BTreeSet<String> {
        &self.vibes
    }

    pub fn toggle_vibe(&mut self, tag: &str) -> SelectionChange {
        let change = toggle_open(&mut self.vibes, tag);
        log_change("vibe", tag, change);
        change
    }

    // ---- budgets ----------------------------------------------------------

    pub fn budgets(&self) -> &BudgetSelection {
        &self.budgets
    }

    pub fn budget(&self, tier: BudgetTier) -> &TierBudget {
        self.budgets.tier(tier)
    }

    /// Selects or deselects a range (by `"{min}-{max}"` id) for `tier`.
    ///
    /// Removing the last selected range of a tier is refused.
    pub fn toggle_budget_range(&mut self, tier: BudgetTier, range_id: &str) -> SelectionChange {
        let change = match BudgetRangeOption::parse_id(range_id) {
            Some(range) => self.budgets.tier_mut(tier).toggle(range),
            None => SelectionChange::Rejected(Rejection::InvalidRange),
        };
        log_change(tier.occasion_type(), range_id, change);
        change
    }

    // ---- love languages ---------------------------------------------------

    pub fn love_languages(&self) -> LoveLanguageSelection {
        self.love_languages
    }

    pub fn primary_love_language(&self) -> Option<LoveLanguage> {
        self.love_languages.primary
    }

    pub fn secondary_love_language(&self) -> Option<LoveLanguage> {
        self.love_languages.secondary
    }

    pub fn select_love_language(&mut self, language: LoveLanguage) -> LoveLanguageTap {
        let tap = self.love_languages.tap(language);
        debug!(language = language.key(), ?tap, "love language tapped");
        tap
    }

    // ---- submission -------------------------------------------------------

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn show_error(&self) -> bool {
        self.show_error
    }

    /// Marks a submission as started. Returns `false` if one is already running.
    pub fn begin_submission(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        self.error_message = None;
        self.show_error = false;
        true
    }

    /// Records the collaborator's answer; failures are kept for display and
    /// retried only when the user submits again.
    pub fn finish_submission(&mut self, result: Result<(), GatewayError>) {
        self.is_submitting = false;
        match result {
            Ok(()) => {
                info!("vault submission succeeded");
                self.error_message = None;
                self.show_error = false;
            }
            Err(err) => {
                info!(error = %err, "vault submission failed");
                self.error_message = Some(err.to_string());
                self.show_error = true;
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.show_error = false;
    }
}

fn log_change(field: &str, value: &str, change: SelectionChange) {
    if let SelectionChange::Rejected(reason) = change {
        debug!(field, value, ?reason, "selection rejected");
    }
}
