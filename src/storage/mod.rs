//! File-backed stand-in for the profile backend.
//!
//! Lets the CLI (and tests) run full create/edit cycles without a server. One
//! JSON file per account under the profiles directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;
use uuid::Uuid;

use vault_domain::{SubmissionPayload, VaultProfile};
use vault_wizard::{GatewayError, ProfileGateway, SubmitMode};

use crate::errors::VaultError;
use crate::utils::persistence::{read_json, write_json_atomic};

const PROFILE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    /// Store for `account` inside `profiles_dir`, creating the directory.
    pub fn new(profiles_dir: &Path, account: &str) -> Result<Self, VaultError> {
        let slug = canonical_name(account);
        if slug.is_empty() {
            return Err(VaultError::InvalidInput(format!(
                "account name `{account}` has no usable characters"
            )));
        }
        fs::create_dir_all(profiles_dir)?;
        Ok(Self {
            path: profiles_dir.join(format!("{slug}.{PROFILE_EXTENSION}")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<VaultProfile>, GatewayError> {
        if !self.path.exists() {
            return Ok(None);
        }
        read_json(&self.path).map(Some).map_err(storage_failure)
    }
}

impl ProfileGateway for JsonProfileStore {
    fn fetch_profile(&self) -> Result<Option<VaultProfile>, GatewayError> {
        self.read()
    }

    fn submit_profile(
        &self,
        payload: &SubmissionPayload,
        mode: SubmitMode,
    ) -> Result<(), GatewayError> {
        if payload.partner_name.trim().is_empty() {
            return Err(GatewayError::Validation(
                "partner_name must not be blank".into(),
            ));
        }
        let existing = self.read()?;
        let vault_id = match (mode, existing) {
            (SubmitMode::Create, Some(_)) => return Err(GatewayError::Conflict),
            (SubmitMode::Create, None) => Uuid::new_v4().to_string(),
            (SubmitMode::Update, None) => return Err(GatewayError::NotFound),
            (SubmitMode::Update, Some(stored)) => stored
                .vault_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
        };

        let mut profile = VaultProfile::from_payload(payload);
        profile.vault_id = Some(vault_id);
        write_json_atomic(&profile, &self.path).map_err(storage_failure)?;
        info!(path = %self.path.display(), ?mode, "vault profile stored");
        Ok(())
    }
}

fn storage_failure(err: VaultError) -> GatewayError {
    GatewayError::Server {
        status: 500,
        message: err.to_string(),
    }
}

fn canonical_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use vault_wizard::WizardState;

    fn payload_for(name: &str) -> SubmissionPayload {
        let mut state = WizardState::new();
        state.set_partner_name(name);
        state.submission_payload()
    }

    #[test]
    fn create_then_update_keeps_vault_id() {
        let dir = tempdir().unwrap();
        let store = JsonProfileStore::new(dir.path(), "Main Account").unwrap();
        assert!(store.path().ends_with("main_account.json"));
        assert_eq!(store.fetch_profile().unwrap(), None);

        store
            .submit_profile(&payload_for("Alex"), SubmitMode::Create)
            .unwrap();
        let created = store.fetch_profile().unwrap().unwrap();
        assert!(created.vault_id.is_some());

        assert_eq!(
            store.submit_profile(&payload_for("Alex"), SubmitMode::Create),
            Err(GatewayError::Conflict)
        );

        store
            .submit_profile(&payload_for("Alexandra"), SubmitMode::Update)
            .unwrap();
        let updated = store.fetch_profile().unwrap().unwrap();
        assert_eq!(updated.partner_name, "Alexandra");
        assert_eq!(updated.vault_id, created.vault_id);
    }

    #[test]
    fn update_without_profile_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JsonProfileStore::new(dir.path(), "solo").unwrap();
        assert_eq!(
            store.submit_profile(&payload_for("Alex"), SubmitMode::Update),
            Err(GatewayError::NotFound)
        );
    }

    #[test]
    fn blank_partner_is_a_validation_error() {
        let dir = tempdir().unwrap();
        let store = JsonProfileStore::new(dir.path(), "solo").unwrap();
        let err = store
            .submit_profile(&payload_for("  "), SubmitMode::Create)
            .unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[test]
    fn unusable_account_name_is_rejected() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            JsonProfileStore::new(dir.path(), "???"),
            Err(VaultError::InvalidInput(_))
        ));
    }
}
