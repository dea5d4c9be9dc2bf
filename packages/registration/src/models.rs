//! Wire types exchanged with the user directory.

use serde::{Deserialize, Serialize};

/// Payload sent to the registration endpoint.
///
/// `matricula` is only present for administrators; the key is left out of the
/// JSON entirely otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub full_name: String,
    pub crm: String,
    pub birth_date: String,
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
    pub email: String,
    pub password: String,
}

/// A user as returned by the listing endpoint. Only `email` is read; a
/// record without one (missing or `null`) still decodes and never matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}

/// Body returned by the registration endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
}

impl RegisterResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
