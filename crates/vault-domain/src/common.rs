//! Shared traits, small enums, and text helpers used across the vault model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities kept in ordered lists.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the couple shares a home.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CohabitationStatus {
    LivingTogether,
    #[default]
    Separate,
    LongDistance,
}

impl CohabitationStatus {
    pub const ALL: [CohabitationStatus; 3] = [
        CohabitationStatus::LivingTogether,
        CohabitationStatus::Separate,
        CohabitationStatus::LongDistance,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CohabitationStatus::LivingTogether => "living_together",
            CohabitationStatus::Separate => "separate",
            CohabitationStatus::LongDistance => "long_distance",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.key() == normalized)
    }
}

impl fmt::Display for CohabitationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CohabitationStatus::LivingTogether => "Living together",
            CohabitationStatus::Separate => "Living separately",
            CohabitationStatus::LongDistance => "Long distance",
        };
        f.write_str(label)
    }
}

/// Trims a value and maps an empty result to `None`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Title-cases a tag such as `board_games` or `rock-climbing`.
pub fn title_case(tag: &str) -> String {
    tag.split(|ch: char| ch == '_' || ch == '-' || ch.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_splits_on_separators() {
        assert_eq!(title_case("board_games"), "Board Games");
        assert_eq!(title_case("rock-climbing"), "Rock Climbing");
        assert_eq!(title_case("  JAZZ  "), "Jazz");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank("  Austin "), Some("Austin".to_string()));
        assert_eq!(non_blank("   "), None);
    }

    #[test]
    fn cohabitation_round_trips_keys() {
        for status in CohabitationStatus::ALL {
            assert_eq!(CohabitationStatus::from_key(status.key()), Some(status));
        }
        assert_eq!(CohabitationStatus::from_key("roommates"), None);
        let json = serde_json::to_string(&CohabitationStatus::LongDistance).unwrap();
        assert_eq!(json, "\"long_distance\"");
    }
}
