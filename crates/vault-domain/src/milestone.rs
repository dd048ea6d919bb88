//! Milestone value types.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::{clamp_day, clamp_month, MonthDay};
use crate::common::{Displayable, Identifiable, NamedEntity};

/// How often a milestone repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneRecurrence {
    #[default]
    Yearly,
    OneTime,
}

impl fmt::Display for MilestoneRecurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MilestoneRecurrence::Yearly => "Every year",
            MilestoneRecurrence::OneTime => "One time",
        };
        f.write_str(label)
    }
}

/// Backend tag distinguishing the four milestone sources.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    Birthday,
    Anniversary,
    Holiday,
    Custom,
}

/// A user-defined date of significance.
///
/// Entries are replaced wholesale on edit; the `id` survives the replacement so
/// list identity stays stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomMilestone {
    pub id: Uuid,
    pub name: String,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub recurrence: MilestoneRecurrence,
}

impl CustomMilestone {
    pub fn new(
        name: impl Into<String>,
        month: u32,
        day: u32,
        recurrence: MilestoneRecurrence,
    ) -> Self {
        let month = clamp_month(month);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            month,
            day: clamp_day(day, month),
            recurrence,
        }
    }

    pub fn month_day(&self) -> MonthDay {
        MonthDay::new(self.month, self.day)
    }

    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    pub fn has_name(&self) -> bool {
        !self.trimmed_name().is_empty()
    }
}

impl Identifiable for CustomMilestone {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for CustomMilestone {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for CustomMilestone {
    fn display_label(&self) -> String {
        format!("{} ({})", self.trimmed_name(), self.month_day())
    }
}
