//! Per-step rules gating forward navigation.

use thiserror::Error;
use vault_domain::BudgetTier;

use crate::{WizardState, WizardStep};

/// Reason the active step cannot be left yet. The `Display` text is what the
/// host shows under the forward button.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepIssue {
    #[error("Please enter your partner's name.")]
    PartnerNameRequired,
    #[error("Pick exactly {required} interests ({selected} selected).")]
    InterestCount { required: usize, selected: usize },
    #[error("Pick exactly {required} dislikes ({selected} selected).")]
    DislikeCount { required: usize, selected: usize },
    #[error("Dislikes can't include something they're interested in.")]
    DislikeOverlap,
    #[error("Every custom milestone needs a name.")]
    UnnamedMilestone,
    #[error("Pick at least one vibe.")]
    NoVibes,
    #[error("The {tier} budget needs a maximum at least as large as its minimum.")]
    InvalidBudget { tier: BudgetTier },
    #[error("Choose a primary and a secondary love language.")]
    LoveLanguagesIncomplete,
}

impl WizardState {
    /// First rule the active step currently violates.
    pub fn current_issue(&self) -> Option<StepIssue> {
        self.issue_for(self.current_step)
    }

    /// Evaluates the rules of `step` against the current answers.
    pub fn issue_for(&self, step: WizardStep) -> Option<StepIssue> {
        match step {
            WizardStep::Welcome | WizardStep::Completion => None,
            WizardStep::BasicInfo => self
                .partner_name
                .trim()
                .is_empty()
                .then_some(StepIssue::PartnerNameRequired),
            WizardStep::Interests => {
                let required = self.rules.required_interests;
                let selected = self.interests.len();
                (selected != required).then_some(StepIssue::InterestCount { required, selected })
            }
            WizardStep::Dislikes => {
                let required = self.rules.required_dislikes;
                let selected = self.dislikes.len();
                if selected != required {
                    Some(StepIssue::DislikeCount { required, selected })
                } else if !self.dislikes.is_disjoint(&self.interests) {
                    Some(StepIssue::DislikeOverlap)
                } else {
                    None
                }
            }
            WizardStep::Milestones => self
                .custom_milestones
                .iter()
                .any(|milestone| !milestone.has_name())
                .then_some(StepIssue::UnnamedMilestone),
            WizardStep::Vibes => self.vibes.is_empty().then_some(StepIssue::NoVibes),
            WizardStep::Budget => BudgetTier::ALL
                .into_iter()
                .find(|tier| !self.budgets.tier(*tier).is_consistent())
                .map(|tier| StepIssue::InvalidBudget { tier }),
            WizardStep::LoveLanguages => (!self.love_languages.is_complete())
                .then_some(StepIssue::LoveLanguagesIncomplete),
        }
    }

    /// Steps whose rules currently fail, in wizard order.
    pub fn incomplete_steps(&self) -> Vec<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|step| self.issue_for(*step).is_some())
            .collect()
    }
}
