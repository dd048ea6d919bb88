//! Ordered registry of wizard steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::WizardError;

/// Number of steps in the vault wizard.
pub const TOTAL_STEPS: usize = WizardStep::ALL.len();

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Welcome,
    BasicInfo,
    Interests,
    Dislikes,
    Milestones,
    Vibes,
    Budget,
    LoveLanguages,
    Completion,
}

impl WizardStep {
    pub const ALL: [WizardStep; 9] = [
        WizardStep::Welcome,
        WizardStep::BasicInfo,
        WizardStep::Interests,
        WizardStep::Dislikes,
        WizardStep::Milestones,
        WizardStep::Vibes,
        WizardStep::Budget,
        WizardStep::LoveLanguages,
        WizardStep::Completion,
    ];

    /// Zero-based position in [`WizardStep::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Welcome => "Welcome",
            WizardStep::BasicInfo => "The Basics",
            WizardStep::Interests => "Interests",
            WizardStep::Dislikes => "Dislikes",
            WizardStep::Milestones => "Milestones",
            WizardStep::Vibes => "Aesthetic Vibes",
            WizardStep::Budget => "Budget",
            WizardStep::LoveLanguages => "Love Languages",
            WizardStep::Completion => "All Set",
        }
    }

    /// Snake-case key used by drafts, scripts and the FFI surface.
    pub fn key(self) -> &'static str {
        match self {
            WizardStep::Welcome => "welcome",
            WizardStep::BasicInfo => "basic_info",
            WizardStep::Interests => "interests",
            WizardStep::Dislikes => "dislikes",
            WizardStep::Milestones => "milestones",
            WizardStep::Vibes => "vibes",
            WizardStep::Budget => "budget",
            WizardStep::LoveLanguages => "love_languages",
            WizardStep::Completion => "completion",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|step| step.key() == normalized)
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() + 1 == TOTAL_STEPS
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Fraction of the wizard completed when `self` is showing.
    pub fn progress(self) -> f64 {
        progress(self.index(), TOTAL_STEPS)
    }
}

/// `index / (total - 1)`, or `1.0` for single-step (or empty) flows.
pub fn progress(index: usize, total: usize) -> f64 {
    if total <= 1 {
        return 1.0;
    }
    (index.min(total - 1)) as f64 / (total - 1) as f64
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for WizardStep {
    type Err = WizardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_key(value).ok_or_else(|| WizardError::UnknownStep(value.to_string()))
    }
}
