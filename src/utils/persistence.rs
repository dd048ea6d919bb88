use std::{fs, path::Path};

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use vault_domain::VaultProfile;
use vault_wizard::WizardState;

use crate::errors::VaultError;

/// On-disk envelope for an in-progress wizard session.
#[derive(Debug, Serialize, Deserialize)]
pub struct DraftFile {
    pub saved_at: DateTime<Utc>,
    pub state: WizardState,
}

impl DraftFile {
    /// Envelope for `state` stamped with the current time.
    pub fn new(state: WizardState) -> Self {
        Self {
            saved_at: Utc::now(),
            state,
        }
    }
}

/// Writes the session to disk atomically by staging to a temporary file.
pub fn save_draft(state: &WizardState, path: &Path) -> Result<(), VaultError> {
    let draft = DraftFile::new(state.clone());
    write_json_atomic(&draft, path)?;
    debug!(path = %path.display(), step = state.current_step().key(), "draft saved");
    Ok(())
}

/// Loads a draft written by [`save_draft`].
///
/// `can_proceed` is recomputed on load, so a draft edited by hand never
/// carries a stale flag.
pub fn load_draft(path: &Path) -> Result<WizardState, VaultError> {
    let draft: DraftFile = read_json(path)?;
    let mut state = draft.state;
    state.validate_current_step();
    Ok(state)
}

pub fn save_profile(profile: &VaultProfile, path: &Path) -> Result<(), VaultError> {
    write_json_atomic(profile, path)
}

pub fn load_profile(path: &Path) -> Result<VaultProfile, VaultError> {
    read_json(path)
}

pub(crate) fn write_json_atomic<T: Serialize>(value: &T, path: &Path) -> Result<(), VaultError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, VaultError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
