//! Submission of a completed draft.

use crate::directory::UserDirectory;
use crate::error::ServiceError;
use crate::models::NewUser;

/// The only response message that counts as a successful registration.
pub const SUCCESS_MESSAGE: &str = "Usuário registrado com sucesso";

/// What the backend made of a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend answered with [`SUCCESS_MESSAGE`]; the form navigates away.
    Registered,
    /// Any other message. The form stays where it is.
    Rejected { message: String },
}

/// Send `user` to the registration endpoint once. No retry.
pub async fn submit<D: UserDirectory>(
    directory: &D,
    user: &NewUser,
) -> Result<SubmitOutcome, ServiceError> {
    let response = directory.register_user(user).await?;
    if response.message == SUCCESS_MESSAGE {
        tracing::info!(is_admin = user.is_admin, "user registered");
        Ok(SubmitOutcome::Registered)
    } else {
        Ok(SubmitOutcome::Rejected {
            message: response.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{check_email, Field, FieldInput, MemoryDirectory, RegistrationForm};

    fn filled_form(email: &str) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        for (field, value) in [
            (Field::FullName, "Ana Souza"),
            (Field::Crm, "12345"),
            (Field::BirthDate, "01021990"),
            (Field::Email, email),
            (Field::Password, "segredo"),
        ] {
            assert!(form.apply(field, FieldInput::Text(value.to_string())));
        }
        form
    }

    #[tokio::test]
    async fn test_taken_email_blocks_registration_call() {
        let dir = MemoryDirectory::with_emails(["a@x.com"]);
        let mut form = filled_form("a@x.com");

        let check = check_email(&dir, &form.draft().email).await.unwrap();
        form.record_email_check(check);
        assert!(form.email_error().is_some());

        assert!(form.submission().is_none());
        assert!(dir.registrations().is_empty());
    }

    #[tokio::test]
    async fn test_available_email_registers_once() {
        let dir = MemoryDirectory::with_emails(["other@x.com"]);
        let mut form = filled_form("other@x.com");
        let check = check_email(&dir, &form.draft().email).await.unwrap();
        form.record_email_check(check);
        assert!(form.email_error().is_some());

        // Correcting the email and blurring again clears the error.
        form.apply(Field::Email, FieldInput::Text("a@x.com".to_string()));
        let check = check_email(&dir, &form.draft().email).await.unwrap();
        form.record_email_check(check);
        assert_eq!(form.email_error(), None);

        let payload = form.submission().unwrap();
        let outcome = submit(&dir, &payload).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Registered);

        let sent = dir.registrations();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "a@x.com");
        assert_eq!(sent[0].birth_date, "01/02/1990");
        assert!(!sent[0].is_admin);
        assert_eq!(sent[0].matricula, None);
    }

    #[tokio::test]
    async fn test_other_messages_are_rejections() {
        for message in [
            "Usuário já existe",
            "usuário registrado com sucesso",
            "Usuário registrado com sucesso.",
            "",
        ] {
            let dir = MemoryDirectory::new().with_response_message(message);
            let payload = filled_form("a@x.com").submission().unwrap();
            let outcome = submit(&dir, &payload).await.unwrap();
            assert_eq!(
                outcome,
                SubmitOutcome::Rejected {
                    message: message.to_string()
                }
            );
            assert_eq!(dir.registrations().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_directory_failure_is_propagated() {
        let dir = MemoryDirectory::new().offline();
        let payload = filled_form("a@x.com").submission().unwrap();
        assert_eq!(
            submit(&dir, &payload).await,
            Err(ServiceError::Unavailable)
        );
    }
}
