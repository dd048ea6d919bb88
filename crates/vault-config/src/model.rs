use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User-configurable preferences shared by the CLI and embedding hosts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    /// ISO currency code attached to every budget entry.
    pub currency: String,
    #[serde(default = "Config::default_required_selections")]
    pub required_interests: usize,
    #[serde(default = "Config::default_required_selections")]
    pub required_dislikes: usize,
    /// Backend occasion type sent with custom milestones.
    #[serde(default = "Config::default_custom_milestone_budget_tier")]
    pub custom_milestone_budget_tier: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Draft file the CLI resumes from when no path is given.
    pub last_draft: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom root for drafts and stored profiles. Defaults to `~/Documents/Vault`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            required_interests: Self::default_required_selections(),
            required_dislikes: Self::default_required_selections(),
            custom_milestone_budget_tier: Self::default_custom_milestone_budget_tier(),
            api_base_url: None,
            last_draft: None,
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_required_selections() -> usize {
        5
    }

    pub fn default_custom_milestone_budget_tier() -> String {
        "minor_occasion".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Vault")
    }

    pub fn drafts_dir(&self) -> PathBuf {
        self.resolve_data_root().join("drafts")
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.resolve_data_root().join("profiles")
    }
}
