//! Email uniqueness check run when the email field loses focus.

use crate::directory::UserDirectory;
use crate::error::ServiceError;

/// Message shown under the email input when the address is already in use.
pub const EMAIL_TAKEN_MESSAGE: &str = "E-mail já cadastrado.";

/// Result of an email uniqueness check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailCheck {
    Available,
    Taken,
}

impl EmailCheck {
    /// Inline error message for this result, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            EmailCheck::Available => None,
            EmailCheck::Taken => Some(EMAIL_TAKEN_MESSAGE),
        }
    }
}

/// Fetch every user and look for an exact, case-sensitive email match.
///
/// The scan happens client-side over the full collection; the directory is
/// expected to be small.
pub async fn check_email<D: UserDirectory>(
    directory: &D,
    email: &str,
) -> Result<EmailCheck, ServiceError> {
    let users = directory.list_users().await?;
    let taken = users.iter().any(|user| user.has_email(email));
    tracing::debug!(taken, scanned = users.len(), "email uniqueness check");
    Ok(if taken {
        EmailCheck::Taken
    } else {
        EmailCheck::Available
    })
}
