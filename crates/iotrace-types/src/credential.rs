use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of recovered secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecretKind {
    Password,
    OauthToken,
}

impl SecretKind {
    /// Label used when reporting to case tooling
    pub fn label(&self) -> &'static str {
        match self {
            SecretKind::Password => "Password",
            SecretKind::OauthToken => "Oauth2 Token",
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Login material recovered from a vendor settings store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Service the credential belongs to (e.g. "iSmartAlarm", "Nest")
    pub service: String,
    pub username: String,
    pub secret: String,
    pub secret_kind: SecretKind,
    /// Free-form context, e.g. the account's country code or user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
