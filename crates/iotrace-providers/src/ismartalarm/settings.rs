use std::collections::BTreeMap;

use iotrace_types::{CredentialRecord, SecretKind};

use crate::error::{Error, Result};

const SERVICE: &str = "iSmartAlarm";

/// Recover the account login from the `iSmartAlermData.xml` key/value
/// settings. The caller supplies the already-extracted string pairs; XML
/// handling is its concern.
///
/// `phoneNum` and `password` are required; the country code is carried as
/// a remark when present.
pub fn credentials_from_settings(
    settings: &BTreeMap<String, String>,
) -> Result<CredentialRecord> {
    let username = settings
        .get("phoneNum")
        .ok_or(Error::MissingSetting("phoneNum"))?;
    let secret = settings
        .get("password")
        .ok_or(Error::MissingSetting("password"))?;
    let remarks = settings
        .get("countryCode")
        .map(|code| format!("Country Code: {}", code));

    Ok(CredentialRecord {
        service: SERVICE.to_string(),
        username: username.clone(),
        secret: secret.clone(),
        secret_kind: SecretKind::Password,
        remarks,
    })
}
