//! Nest companion-app adapter.
//!
//! The Android app stores the account session in the `Phoenix.xml`
//! key/value settings; the OAuth token is the only secret material the
//! device keeps locally.

use std::collections::BTreeMap;

use iotrace_types::{CredentialRecord, SecretKind};

use crate::error::{Error, Result};

const SERVICE: &str = "Nest";

/// Recover the account login from the `Phoenix.xml` key/value settings.
///
/// `email` and `token` are required. The app wraps the token across lines;
/// embedded newlines are stripped. The user id is carried as a remark when
/// present.
pub fn credentials_from_settings(
    settings: &BTreeMap<String, String>,
) -> Result<CredentialRecord> {
    let username = settings.get("email").ok_or(Error::MissingSetting("email"))?;
    let token = settings.get("token").ok_or(Error::MissingSetting("token"))?;
    let remarks = settings
        .get("userId")
        .map(|user_id| format!("User ID: {}", user_id));

    Ok(CredentialRecord {
        service: SERVICE.to_string(),
        username: username.clone(),
        secret: token.replace('\n', ""),
        secret_kind: SecretKind::OauthToken,
        remarks,
    })
}
