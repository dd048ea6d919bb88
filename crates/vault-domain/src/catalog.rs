//! Tag catalogs for interests, dislikes and vibes, plus display lookups.
//!
//! Tags arrive as plain strings (they are stored verbatim by the backend), so
//! every lookup has a fallback: unknown interests are title-cased and unknown
//! vibes get a generic icon.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::common::title_case;

/// Interest tags offered on the interests step. Dislikes draw from the same pool.
pub const INTEREST_CATALOG: &[&str] = &[
    "Travel",
    "Cooking",
    "Music",
    "Hiking",
    "Photography",
    "Art",
    "Reading",
    "Gaming",
    "Fitness",
    "Yoga",
    "Coffee",
    "Wine",
    "Movies",
    "Theater",
    "Dancing",
    "Gardening",
    "Fashion",
    "Sports",
    "Tech",
    "Pets",
    "Camping",
    "Beach",
    "Concerts",
    "Board Games",
    "Podcasts",
    "Baking",
    "Skincare",
    "Jewelry",
    "History",
    "Science",
    "Anime",
    "Cars",
    "Cycling",
    "Running",
    "Crafts",
    "Writing",
    "Volunteering",
    "Meditation",
    "Spa",
    "Food",
];

struct VibeEntry {
    tag: &'static str,
    name: &'static str,
    icon: &'static str,
}

const VIBES: &[VibeEntry] = &[
    VibeEntry {
        tag: "quiet_luxury",
        name: "Quiet Luxury",
        icon: "diamond",
    },
    VibeEntry {
        tag: "street_urban",
        name: "Street / Urban",
        icon: "building.2",
    },
    VibeEntry {
        tag: "outdoorsy",
        name: "Outdoorsy",
        icon: "leaf",
    },
    VibeEntry {
        tag: "vintage",
        name: "Vintage",
        icon: "camera.filters",
    },
    VibeEntry {
        tag: "minimalist",
        name: "Minimalist",
        icon: "square",
    },
    VibeEntry {
        tag: "bohemian",
        name: "Bohemian",
        icon: "sun.haze",
    },
    VibeEntry {
        tag: "romantic",
        name: "Romantic",
        icon: "heart",
    },
    VibeEntry {
        tag: "adventurous",
        name: "Adventurous",
        icon: "mountain.2",
    },
];

/// Icon used for vibes missing from the catalog.
pub const DEFAULT_VIBE_ICON: &str = "sparkles";

static INTEREST_NAMES: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    INTEREST_CATALOG
        .iter()
        .map(|tag| (tag.to_ascii_lowercase(), *tag))
        .collect()
});

static VIBE_LOOKUP: Lazy<HashMap<&'static str, &'static VibeEntry>> =
    Lazy::new(|| VIBES.iter().map(|entry| (entry.tag, entry)).collect());

/// Vibe tags in display order.
pub fn vibe_catalog() -> Vec<&'static str> {
    VIBES.iter().map(|entry| entry.tag).collect()
}

pub fn is_known_interest(tag: &str) -> bool {
    INTEREST_NAMES.contains_key(&tag.trim().to_ascii_lowercase())
}

/// Display name for an interest or dislike tag.
pub fn interest_display_name(tag: &str) -> String {
    match INTEREST_NAMES.get(&tag.trim().to_ascii_lowercase()) {
        Some(name) => (*name).to_string(),
        None => title_case(tag),
    }
}

pub fn vibe_display_name(tag: &str) -> String {
    match VIBE_LOOKUP.get(tag.trim()) {
        Some(entry) => entry.name.to_string(),
        None => title_case(tag),
    }
}

pub fn vibe_icon(tag: &str) -> &'static str {
    VIBE_LOOKUP
        .get(tag.trim())
        .map(|entry| entry.icon)
        .unwrap_or(DEFAULT_VIBE_ICON)
}
