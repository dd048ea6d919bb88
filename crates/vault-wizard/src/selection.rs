//! Selection outcomes and the per-tier budget selection.
//!
//! A rejected selection leaves state untouched and is reported as a value so
//! the host can play a transient cue (shake, haptic) instead of an error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use vault_domain::{BudgetRangeOption, BudgetTier};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// The capped set already holds `limit` entries.
    AtCapacity { limit: usize },
    /// The tag is already chosen as an interest.
    ConflictsWithInterests,
    /// The tag is already chosen as a dislike.
    ConflictsWithDislikes,
    /// Each budget tier keeps at least one range.
    LastBudgetRange,
    EmptyTag,
    BlankName,
    UnknownHoliday,
    UnknownMilestone,
    InvalidRange,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionChange {
    Added,
    Removed,
    Rejected(Rejection),
}

impl SelectionChange {
    pub fn is_rejected(&self) -> bool {
        matches!(self, SelectionChange::Rejected(_))
    }
}

/// Adds or removes `tag` in a set capped at `limit` entries.
///
/// `blocked` holds tags owned by a sibling set; adding one of those is refused
/// with `conflict`.
pub(crate) fn toggle_capped(
    set: &mut BTreeSet<String>,
    tag: &str,
    limit: usize,
    blocked: &BTreeSet<String>,
    conflict: Rejection,
) -> SelectionChange {
    let tag = tag.trim();
    if tag.is_empty() {
        return SelectionChange::Rejected(Rejection::EmptyTag);
    }
    if set.remove(tag) {
        return SelectionChange::Removed;
    }
    if blocked.contains(tag) {
        return SelectionChange::Rejected(conflict);
    }
    if set.len() >= limit {
        return SelectionChange::Rejected(Rejection::AtCapacity { limit });
    }
    set.insert(tag.to_string());
    SelectionChange::Added
}

/// Uncapped toggle used for vibes and holidays.
pub(crate) fn toggle_open(set: &mut BTreeSet<String>, tag: &str) -> SelectionChange {
    let tag = tag.trim();
    if tag.is_empty() {
        return SelectionChange::Rejected(Rejection::EmptyTag);
    }
    if set.remove(tag) {
        SelectionChange::Removed
    } else {
        set.insert(tag.to_string());
        SelectionChange::Added
    }
}

/// Selected ranges for one tier plus the effective bounds they reduce to.
///
/// The set is never empty; `min_cents` is the smallest selected minimum and
/// `max_cents` the largest selected maximum. Stored bounds are ignored on
/// deserialization and rebuilt from the selected ranges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "StoredTierBudget")]
pub struct TierBudget {
    selected: BTreeSet<BudgetRangeOption>,
    min_cents: i64,
    max_cents: i64,
}

#[derive(Deserialize)]
struct StoredTierBudget {
    selected: BTreeSet<BudgetRangeOption>,
}

impl TryFrom<StoredTierBudget> for TierBudget {
    type Error = String;

    fn try_from(stored: StoredTierBudget) -> Result<Self, Self::Error> {
        if stored.selected.is_empty() {
            return Err("budget tier must keep at least one selected range".into());
        }
        if let Some(range) = stored
            .selected
            .iter()
            .find(|range| range.max_cents < range.min_cents)
        {
            return Err(format!("budget range {} has max below min", range.id()));
        }
        let mut budget = Self {
            selected: stored.selected,
            min_cents: 0,
            max_cents: 0,
        };
        budget.recompute();
        Ok(budget)
    }
}

impl TierBudget {
    /// Tier with only its default preset selected.
    pub fn for_tier(tier: BudgetTier) -> Self {
        Self::single(tier.default_range())
    }

    /// Tier with exactly one (possibly synthetic) range selected.
    pub fn single(range: BudgetRangeOption) -> Self {
        Self {
            selected: BTreeSet::from([range]),
            min_cents: range.min_cents,
            max_cents: range.max_cents,
        }
    }

    pub fn min_cents(&self) -> i64 {
        self.min_cents
    }

    pub fn max_cents(&self) -> i64 {
        self.max_cents
    }

    pub fn selected(&self) -> impl Iterator<Item = &BudgetRangeOption> {
        self.selected.iter()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.selected.iter().map(BudgetRangeOption::id).collect()
    }

    pub fn is_selected(&self, range: &BudgetRangeOption) -> bool {
        self.selected.contains(range)
    }

    pub fn toggle(&mut self, range: BudgetRangeOption) -> SelectionChange {
        if self.selected.contains(&range) {
            if self.selected.len() == 1 {
                return SelectionChange::Rejected(Rejection::LastBudgetRange);
            }
            self.selected.remove(&range);
            self.recompute();
            SelectionChange::Removed
        } else {
            self.selected.insert(range);
            self.recompute();
            SelectionChange::Added
        }
    }

    pub fn is_consistent(&self) -> bool {
        !self.selected.is_empty() && self.max_cents >= self.min_cents
    }

    fn recompute(&mut self) {
        if let Some(min) = self.selected.iter().map(|range| range.min_cents).min() {
            self.min_cents = min;
        }
        if let Some(max) = self.selected.iter().map(|range| range.max_cents).max() {
            self.max_cents = max;
        }
    }
}
