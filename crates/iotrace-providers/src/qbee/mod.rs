//! QBee / Swisscom Home camera-app adapter.
//!
//! The Android app protects its preferences with a "SecurePreferences"
//! variant: every key and value in the settings XML is AES-ECB encrypted
//! and base64-encoded, except for one obfuscated preference key that the
//! cipher key is derived from. This module supplies the key-schedule and
//! ciphertext-decoding half of that pipeline ([`crypto`]); running the
//! cipher is the hosting collaborator's job, and the decrypted key/value
//! pairs come back here for credential recovery.

pub mod crypto;

use std::collections::BTreeMap;

use iotrace_types::{CredentialRecord, SecretKind};

use crate::error::{Error, Result};

const SERVICE: &str = "QBee";

/// Recover the account login from the DECRYPTED preference pairs.
///
/// `username` and `token` are required; the user id is carried as a remark
/// when present.
pub fn credentials_from_settings(
    settings: &BTreeMap<String, String>,
) -> Result<CredentialRecord> {
    let username = settings
        .get("username")
        .ok_or(Error::MissingSetting("username"))?;
    let token = settings.get("token").ok_or(Error::MissingSetting("token"))?;
    let remarks = settings
        .get("user_id")
        .map(|user_id| format!("User ID: {}", user_id));

    Ok(CredentialRecord {
        service: SERVICE.to_string(),
        username: username.clone(),
        secret: token.clone(),
        secret_kind: SecretKind::OauthToken,
        remarks,
    })
}
