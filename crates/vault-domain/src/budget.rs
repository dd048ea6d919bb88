//! Budget tiers and their preset spending ranges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three spending categories configured on the budget step.
///
/// Serialized names double as the backend's occasion type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    JustBecause,
    MinorOccasion,
    MajorMilestone,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [
        BudgetTier::JustBecause,
        BudgetTier::MinorOccasion,
        BudgetTier::MajorMilestone,
    ];

    /// Backend occasion type.
    pub fn occasion_type(self) -> &'static str {
        match self {
            BudgetTier::JustBecause => "just_because",
            BudgetTier::MinorOccasion => "minor_occasion",
            BudgetTier::MajorMilestone => "major_milestone",
        }
    }

    pub fn from_occasion_type(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.occasion_type() == normalized)
    }

    pub fn title(self) -> &'static str {
        match self {
            BudgetTier::JustBecause => "Just Because",
            BudgetTier::MinorOccasion => "Minor Occasions",
            BudgetTier::MajorMilestone => "Major Milestones",
        }
    }

    /// Preset ranges offered for this tier, cheapest first.
    pub fn presets(self) -> &'static [BudgetRangeOption] {
        match self {
            BudgetTier::JustBecause => JUST_BECAUSE_RANGES,
            BudgetTier::MinorOccasion => MINOR_OCCASION_RANGES,
            BudgetTier::MajorMilestone => MAJOR_MILESTONE_RANGES,
        }
    }

    /// Range selected on a fresh session.
    pub fn default_range(self) -> BudgetRangeOption {
        let presets = self.presets();
        presets[presets.len() / 2]
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A `(min, max)` pair in cents. The id is derived from the pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BudgetRangeOption {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl BudgetRangeOption {
    pub const fn new(min_cents: i64, max_cents: i64) -> Self {
        Self {
            min_cents,
            max_cents,
        }
    }

    /// Stable identifier, `"{min}-{max}"`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.min_cents, self.max_cents)
    }

    /// Parses an identifier produced by [`BudgetRangeOption::id`].
    ///
    /// Synthetic ids (not in any preset list) are accepted as long as they are
    /// well formed and `min <= max`.
    pub fn parse_id(id: &str) -> Option<Self> {
        let (min, max) = id.trim().split_once('-')?;
        let min_cents = min.trim().parse::<i64>().ok()?;
        let max_cents = max.trim().parse::<i64>().ok()?;
        if min_cents < 0 || max_cents < min_cents {
            return None;
        }
        Some(Self::new(min_cents, max_cents))
    }

    /// Human label such as `$20 - $50`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            format_dollars(self.min_cents),
            format_dollars(self.max_cents)
        )
    }
}

/// Formats cents as dollars, dropping zero cents (`2000` -> `$20`).
pub fn format_dollars(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    if abs % 100 == 0 {
        format!("{sign}${}", abs / 100)
    } else {
        format!("{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

const JUST_BECAUSE_RANGES: &[BudgetRangeOption] = &[
    BudgetRangeOption::new(1000, 2000),
    BudgetRangeOption::new(2000, 5000),
    BudgetRangeOption::new(5000, 10000),
];

const MINOR_OCCASION_RANGES: &[BudgetRangeOption] = &[
    BudgetRangeOption::new(5000, 10000),
    BudgetRangeOption::new(10000, 15000),
    BudgetRangeOption::new(15000, 25000),
];

const MAJOR_MILESTONE_RANGES: &[BudgetRangeOption] = &[
    BudgetRangeOption::new(10000, 25000),
    BudgetRangeOption::new(25000, 50000),
    BudgetRangeOption::new(50000, 100000),
];
