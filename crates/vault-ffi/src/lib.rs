//! vault-ffi
//!
//! C ABI over a wizard session so a mobile host can drive onboarding and edit
//! flows. Everything crossing the boundary is UTF-8 JSON; strings returned to
//! the caller must be released with [`vault_string_free`].
//!
//! Every fallible call returns a [`FfiStatus`] code. On failure the message is
//! kept per thread and can be read back with [`vault_last_error_message`].

use std::{
    cell::RefCell,
    ffi::{CStr, CString},
    os::raw::{c_char, c_int},
    ptr,
};

use serde::Serialize;
use tracing::debug;

use vault_domain::{SubmissionPayload, VaultProfile};
use vault_wizard::{
    apply_action, hydrate_with_rules, WizardAction, WizardRules, WizardState, WizardStep,
};

/// Semantic version of the FFI surface. Bumps when the ABI or JSON contract changes.
pub const FFI_VERSION: &str = "0.1.0";
const FFI_VERSION_NUL: &[u8] = b"0.1.0\0";

/// Status codes returned across the boundary.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiStatus {
    Ok = 0,
    NullArgument = 1,
    InvalidUtf8 = 2,
    InvalidJson = 3,
    Internal = 4,
}

impl From<FfiStatus> for c_int {
    fn from(value: FfiStatus) -> Self {
        value as c_int
    }
}

/// Opaque session owned by the host between `vault_wizard_new`/`_hydrate` and
/// `vault_wizard_free`.
pub struct WizardHandle {
    inner: WizardState,
}

impl WizardHandle {
    fn into_raw(state: WizardState) -> *mut Self {
        Box::into_raw(Box::new(Self { inner: state }))
    }
}

/// Session view handed to the host: the raw answers plus the derived fields a
/// screen needs to render.
#[derive(Serialize)]
struct Snapshot<'a> {
    step: WizardStep,
    title: &'static str,
    progress: f64,
    is_first: bool,
    is_last: bool,
    can_proceed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_message: Option<String>,
    incomplete_steps: Vec<WizardStep>,
    state: &'a WizardState,
}

impl<'a> Snapshot<'a> {
    fn of(state: &'a WizardState) -> Self {
        let step = state.current_step();
        Self {
            step,
            title: step.title(),
            progress: state.progress(),
            is_first: step.is_first(),
            is_last: step.is_last(),
            can_proceed: state.can_proceed(),
            validation_message: state.validation_message(),
            incomplete_steps: state.incomplete_steps(),
            state,
        }
    }
}

struct FfiError {
    status: FfiStatus,
    message: String,
}

impl FfiError {
    fn new(status: FfiStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for FfiError {
    fn from(err: serde_json::Error) -> Self {
        FfiError::new(FfiStatus::InvalidJson, err.to_string())
    }
}

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Creates a fresh session. `rules_json` may be null for the default rules.
///
/// # Safety
/// `rules_json` must be null or a valid NUL-terminated string; `out_handle`
/// must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn vault_wizard_new(
    rules_json: *const c_char,
    out_handle: *mut *mut WizardHandle,
) -> c_int {
    run(|| {
        let rules = parse_rules(rules_json)?;
        write_handle(out_handle, WizardState::with_rules(rules))
    })
}

/// Creates an edit session from a stored profile JSON.
///
/// # Safety
/// `profile_json` must be a valid NUL-terminated string, `rules_json` null or
/// valid, `out_handle` a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn vault_wizard_hydrate(
    profile_json: *const c_char,
    rules_json: *const c_char,
    out_handle: *mut *mut WizardHandle,
) -> c_int {
    run(|| {
        let profile: VaultProfile = serde_json::from_str(&c_string_argument(profile_json)?)?;
        let rules = parse_rules(rules_json)?;
        write_handle(out_handle, hydrate_with_rules(&profile, rules))
    })
}

/// Applies one action JSON and writes the outcome JSON to `out_json`.
///
/// # Safety
/// `handle` must come from this library and not be freed; `action_json` must
/// be a valid NUL-terminated string; `out_json` must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn vault_wizard_apply(
    handle: *mut WizardHandle,
    action_json: *const c_char,
    out_json: *mut *mut c_char,
) -> c_int {
    run(|| {
        let handle = handle
            .as_mut()
            .ok_or_else(|| FfiError::new(FfiStatus::NullArgument, "wizard handle is null"))?;
        let action: WizardAction = serde_json::from_str(&c_string_argument(action_json)?)?;
        let outcome = apply_action(&mut handle.inner, action);
        write_json(out_json, &outcome)
    })
}

/// Writes the current session snapshot JSON to `out_json`.
///
/// # Safety
/// Same contract as [`vault_wizard_apply`].
#[no_mangle]
pub unsafe extern "C" fn vault_wizard_snapshot(
    handle: *const WizardHandle,
    out_json: *mut *mut c_char,
) -> c_int {
    run(|| {
        let handle = handle
            .as_ref()
            .ok_or_else(|| FfiError::new(FfiStatus::NullArgument, "wizard handle is null"))?;
        write_json(out_json, &Snapshot::of(&handle.inner))
    })
}

/// Writes the submission payload JSON for the session to `out_json`.
///
/// # Safety
/// Same contract as [`vault_wizard_apply`].
#[no_mangle]
pub unsafe extern "C" fn vault_wizard_payload(
    handle: *const WizardHandle,
    out_json: *mut *mut c_char,
) -> c_int {
    run(|| {
        let handle = handle
            .as_ref()
            .ok_or_else(|| FfiError::new(FfiStatus::NullArgument, "wizard handle is null"))?;
        let payload: SubmissionPayload = handle.inner.submission_payload();
        write_json(out_json, &payload)
    })
}

/// # Safety
/// `handle` must be null or come from this library, and is invalid afterwards.
#[no_mangle]
pub unsafe extern "C" fn vault_wizard_free(handle: *mut WizardHandle) {
    if handle.is_null() {
        return;
    }
    drop(Box::from_raw(handle));
}

/// # Safety
/// `value` must be null or a string returned by this library.
#[no_mangle]
pub unsafe extern "C" fn vault_string_free(value: *mut c_char) {
    if value.is_null() {
        return;
    }
    drop(CString::from_raw(value));
}

/// Copies the calling thread's last error message into `buffer`, truncating and
/// NUL-terminating it. Returns the full message length in bytes, or 0 when
/// there is no error.
///
/// # Safety
/// `buffer` must be null or point to at least `length` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn vault_last_error_message(buffer: *mut c_char, length: usize) -> c_int {
    LAST_ERROR.with(|slot| {
        let slot = slot.borrow();
        let Some(message) = slot.as_ref() else {
            return 0;
        };
        let bytes = message.as_bytes();
        if !buffer.is_null() && length > 0 {
            let count = bytes.len().min(length - 1);
            ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), buffer, count);
            *buffer.add(count) = 0;
        }
        c_int::try_from(bytes.len()).unwrap_or(c_int::MAX)
    })
}

#[no_mangle]
pub extern "C" fn vault_ffi_version() -> *const c_char {
    FFI_VERSION_NUL.as_ptr().cast()
}

fn run(call: impl FnOnce() -> Result<(), FfiError>) -> c_int {
    match call() {
        Ok(()) => {
            set_last_error(None);
            FfiStatus::Ok.into()
        }
        Err(err) => {
            debug!(status = ?err.status, message = %err.message, "ffi call failed");
            set_last_error(Some(&err.message));
            err.status.into()
        }
    }
}

fn set_last_error(message: Option<&str>) {
    let value = message.map(|text| {
        CString::new(text.replace('\0', " ")).unwrap_or_default()
    });
    LAST_ERROR.with(|slot| *slot.borrow_mut() = value);
}

unsafe fn c_string_argument(value: *const c_char) -> Result<String, FfiError> {
    if value.is_null() {
        return Err(FfiError::new(FfiStatus::NullArgument, "null string pointer received"));
    }
    CStr::from_ptr(value)
        .to_str()
        .map(str::to_string)
        .map_err(|err| FfiError::new(FfiStatus::InvalidUtf8, err.to_string()))
}

unsafe fn parse_rules(rules_json: *const c_char) -> Result<WizardRules, FfiError> {
    if rules_json.is_null() {
        return Ok(WizardRules::default());
    }
    Ok(serde_json::from_str(&c_string_argument(rules_json)?)?)
}

unsafe fn write_handle(
    out_handle: *mut *mut WizardHandle,
    state: WizardState,
) -> Result<(), FfiError> {
    if out_handle.is_null() {
        return Err(FfiError::new(FfiStatus::NullArgument, "output handle pointer is null"));
    }
    *out_handle = WizardHandle::into_raw(state);
    Ok(())
}

unsafe fn write_json<T: Serialize>(target: *mut *mut c_char, value: &T) -> Result<(), FfiError> {
    if target.is_null() {
        return Err(FfiError::new(FfiStatus::NullArgument, "output string pointer is null"));
    }
    let json = serde_json::to_string(value)
        .map_err(|err| FfiError::new(FfiStatus::Internal, err.to_string()))?;
    let cstring =
        CString::new(json).map_err(|err| FfiError::new(FfiStatus::Internal, err.to_string()))?;
    *target = cstring.into_raw();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nul_terminated() {
        let version = unsafe { CStr::from_ptr(vault_ffi_version()) };
        assert_eq!(version.to_str().unwrap(), FFI_VERSION);
    }

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(c_int::from(FfiStatus::Ok), 0);
        assert_eq!(c_int::from(FfiStatus::InvalidJson), 3);
    }
}
