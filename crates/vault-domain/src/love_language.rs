//! Love languages and the ranked primary/secondary selection.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum LoveLanguage {
    WordsOfAffirmation,
    ActsOfService,
    ReceivingGifts,
    QualityTime,
    PhysicalTouch,
}

impl LoveLanguage {
    pub const ALL: [LoveLanguage; 5] = [
        LoveLanguage::WordsOfAffirmation,
        LoveLanguage::ActsOfService,
        LoveLanguage::ReceivingGifts,
        LoveLanguage::QualityTime,
        LoveLanguage::PhysicalTouch,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LoveLanguage::WordsOfAffirmation => "words_of_affirmation",
            LoveLanguage::ActsOfService => "acts_of_service",
            LoveLanguage::ReceivingGifts => "receiving_gifts",
            LoveLanguage::QualityTime => "quality_time",
            LoveLanguage::PhysicalTouch => "physical_touch",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.key() == normalized)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LoveLanguage::WordsOfAffirmation => "Words of Affirmation",
            LoveLanguage::ActsOfService => "Acts of Service",
            LoveLanguage::ReceivingGifts => "Receiving Gifts",
            LoveLanguage::QualityTime => "Quality Time",
            LoveLanguage::PhysicalTouch => "Physical Touch",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LoveLanguage::WordsOfAffirmation => "Compliments, notes, and saying it out loud",
            LoveLanguage::ActsOfService => "Taking something off their plate",
            LoveLanguage::ReceivingGifts => "Thoughtful things that show you were listening",
            LoveLanguage::QualityTime => "Undivided attention and time together",
            LoveLanguage::PhysicalTouch => "Hugs, hand-holding, closeness",
        }
    }
}

impl fmt::Display for LoveLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// What a tap on a language card did to the selection.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoveLanguageTap {
    SetPrimary,
    SetSecondary,
    ReplacedSecondary,
    ClearedSecondary,
    ClearedAll,
}

/// Ranked pair of love languages. `primary` and `secondary` never hold the
/// same language, and `secondary` is only set while `primary` is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoveLanguageSelection {
    pub primary: Option<LoveLanguage>,
    pub secondary: Option<LoveLanguage>,
}

impl LoveLanguageSelection {
    /// Applies one tap.
    ///
    /// Tapping the primary resets both slots; tapping the secondary clears it;
    /// any other language fills the primary when empty, otherwise fills or
    /// replaces the secondary.
    pub fn tap(&mut self, language: LoveLanguage) -> LoveLanguageTap {
        if self.primary == Some(language) {
            self.primary = None;
            self.secondary = None;
            return LoveLanguageTap::ClearedAll;
        }
        if self.secondary == Some(language) {
            self.secondary = None;
            return LoveLanguageTap::ClearedSecondary;
        }
        match (self.primary, self.secondary) {
            (None, _) => {
                self.primary = Some(language);
                self.secondary = None;
                LoveLanguageTap::SetPrimary
            }
            (Some(_), None) => {
                self.secondary = Some(language);
                LoveLanguageTap::SetSecondary
            }
            (Some(_), Some(_)) => {
                self.secondary = Some(language);
                LoveLanguageTap::ReplacedSecondary
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!((self.primary, self.secondary), (Some(p), Some(s)) if p != s)
    }

    /// Rank of `language` in the selection (1 = primary, 2 = secondary).
    pub fn rank_of(&self, language: LoveLanguage) -> Option<u8> {
        if self.primary == Some(language) {
            Some(1)
        } else if self.secondary == Some(language) {
            Some(2)
        } else {
            None
        }
    }
}
