//! # Registration draft and form state
//!
//! [`RegistrationDraft`] is the not-yet-submitted record, created empty when
//! the form mounts and dropped with it. [`RegistrationForm`] pairs the draft
//! with the inline email error and is the only thing the UI mutates.
//!
//! Every edit goes through [`RegistrationForm::apply`], which runs the field's
//! mask from [`crate::format`]. The email error lives beside the draft and is
//! only ever written by [`RegistrationForm::record_email_check`]; it never
//! touches the draft, it only blocks [`RegistrationForm::submission`].

use crate::check::EmailCheck;
use crate::format::{digits_capped, mask_birth_date, CRM_MAX_LEN, MATRICULA_MAX_LEN};
use crate::models::NewUser;

/// The inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Crm,
    BirthDate,
    IsAdmin,
    Matricula,
    Email,
    Password,
}

impl Field {
    /// The `name`/`id` attribute of the matching input element.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Crm => "crm",
            Field::BirthDate => "birthDate",
            Field::IsAdmin => "isAdmin",
            Field::Matricula => "matricula",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// A raw value coming from an input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

/// The in-memory registration record being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub crm: String,
    pub birth_date: String,
    pub is_admin: bool,
    pub matricula: String,
    pub email: String,
    pub password: String,
}

impl RegistrationDraft {
    /// Current text of a field. The checkbox has no text and yields `""`.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Crm => &self.crm,
            Field::BirthDate => &self.birth_date,
            Field::IsAdmin => "",
            Field::Matricula => &self.matricula,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Crm => Some(&mut self.crm),
            Field::BirthDate => Some(&mut self.birth_date),
            Field::IsAdmin => None,
            Field::Matricula => Some(&mut self.matricula),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
        }
    }

    /// Whether the matrícula input is rendered.
    pub fn shows_matricula(&self) -> bool {
        self.is_admin
    }

    /// Build the submission payload. `matricula` is only carried for
    /// administrators, whatever the field holds.
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            full_name: self.full_name.clone(),
            crm: self.crm.clone(),
            birth_date: self.birth_date.clone(),
            is_admin: self.is_admin,
            matricula: self.is_admin.then(|| self.matricula.clone()),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Form state: the draft plus the inline email error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    draft: RegistrationDraft,
    email_error: Option<String>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    /// Apply an input event to the draft. Returns `false` when the edit was
    /// rejected and the draft left untouched.
    pub fn apply(&mut self, field: Field, input: FieldInput) -> bool {
        match (field, input) {
            (Field::IsAdmin, FieldInput::Checked(checked)) => {
                self.draft.is_admin = checked;
                true
            }
            (Field::IsAdmin, FieldInput::Text(_)) | (_, FieldInput::Checked(_)) => {
                tracing::debug!(field = field.name(), "ignoring input of the wrong kind");
                false
            }
            (field, FieldInput::Text(raw)) => {
                let value = match field {
                    Field::Crm => digits_capped(&raw, CRM_MAX_LEN),
                    Field::Matricula => digits_capped(&raw, MATRICULA_MAX_LEN),
                    Field::BirthDate => Some(mask_birth_date(&raw)),
                    _ => Some(raw),
                };
                let Some(value) = value else {
                    tracing::debug!(field = field.name(), "rejected non-digit input");
                    return false;
                };
                match self.draft.text_mut(field) {
                    Some(slot) => {
                        *slot = value;
                        true
                    }
                    None => false,
                }
            }
        }
    }

    /// Store the outcome of an email uniqueness check. Only the error changes.
    pub fn record_email_check(&mut self, check: EmailCheck) {
        self.email_error = check.message().map(str::to_string);
    }

    /// Payload to submit, or `None` while an email error is displayed.
    pub fn submission(&self) -> Option<NewUser> {
        if self.email_error.is_some() {
            return None;
        }
        Some(self.draft.to_new_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldInput {
        FieldInput::Text(s.to_string())
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = RegistrationForm::new();
        assert_eq!(form.draft(), &RegistrationDraft::default());
        assert_eq!(form.email_error(), None);
    }

    #[test]
    fn test_plain_fields_are_stored_verbatim() {
        let mut form = RegistrationForm::new();
        assert!(form.apply(Field::FullName, text("  Ana  Souza ")));
        assert!(form.apply(Field::Email, text(" Ana@X.com")));
        assert!(form.apply(Field::Password, text("p@ss 1")));
        assert_eq!(form.draft.full_name, "  Ana  Souza ");
        assert_eq!(form.draft.email, " Ana@X.com");
        assert_eq!(form.draft.password, "p@ss 1");
    }

    #[test]
    fn test_crm_rejects_non_digits_and_keeps_previous_value() {
        let mut form = RegistrationForm::new();
        assert!(form.apply(Field::Crm, text("123")));
        assert!(!form.apply(Field::Crm, text("123a")));
        assert_eq!(form.draft.crm, "123");
        assert!(form.apply(Field::Crm, text("1234567")));
        assert_eq!(form.draft.crm, "12345");
    }

    #[test]
    fn test_digit_fields_never_exceed_their_caps() {
        let mut form = RegistrationForm::new();
        for _ in 0..12 {
            let crm = format!("{}9", form.draft.crm);
            let matricula = format!("{}9", form.draft.matricula);
            form.apply(Field::Crm, FieldInput::Text(crm));
            form.apply(Field::Matricula, FieldInput::Text(matricula));
            assert!(form.draft.crm.len() <= CRM_MAX_LEN);
            assert!(form.draft.matricula.len() <= MATRICULA_MAX_LEN);
        }
        assert_eq!(form.draft.crm, "99999");
        assert_eq!(form.draft.matricula, "9999999");
    }

    #[test]
    fn test_birth_date_is_masked() {
        let mut form = RegistrationForm::new();
        form.apply(Field::BirthDate, text("0102"));
        assert_eq!(form.draft.birth_date, "01/02/");
        form.apply(Field::BirthDate, text("01/02/1990"));
        assert_eq!(form.draft.birth_date, "01/02/1990");
    }

    #[test]
    fn test_checkbox_stores_checked_state() {
        let mut form = RegistrationForm::new();
        assert!(form.apply(Field::IsAdmin, FieldInput::Checked(true)));
        assert!(form.draft.is_admin);
        assert!(!form.apply(Field::IsAdmin, text("on")));
        assert!(form.draft.is_admin);
        assert!(!form.apply(Field::Email, FieldInput::Checked(true)));
        assert_eq!(form.draft.email, "");
    }

    #[test]
    fn test_unchecking_admin_hides_and_drops_matricula() {
        let mut form = RegistrationForm::new();
        assert!(!form.draft.shows_matricula());

        form.apply(Field::IsAdmin, FieldInput::Checked(true));
        form.apply(Field::Matricula, text("1234567"));
        assert!(form.draft.shows_matricula());
        assert_eq!(
            form.submission().unwrap().matricula.as_deref(),
            Some("1234567")
        );

        form.apply(Field::IsAdmin, FieldInput::Checked(false));
        assert!(!form.draft.shows_matricula());
        let payload = form.submission().unwrap();
        assert!(!payload.is_admin);
        assert_eq!(payload.matricula, None);
        // The typed value survives in the draft, it just isn't sent.
        assert_eq!(form.draft.matricula, "1234567");
    }

    #[test]
    fn test_admin_payload_carries_matricula() {
        let mut form = RegistrationForm::new();
        form.apply(Field::IsAdmin, FieldInput::Checked(true));
        form.apply(Field::Matricula, text("12345"));
        let payload = form.submission().unwrap();
        assert!(payload.is_admin);
        assert_eq!(payload.matricula.as_deref(), Some("12345"));
    }

    #[test]
    fn test_email_error_blocks_submission_without_touching_draft() {
        let mut form = RegistrationForm::new();
        form.apply(Field::Email, text("a@x.com"));
        let before = form.draft.clone();

        form.record_email_check(EmailCheck::Taken);
        assert_eq!(form.email_error(), Some(crate::EMAIL_TAKEN_MESSAGE));
        assert_eq!(form.submission(), None);
        assert_eq!(form.draft, before);

        form.record_email_check(EmailCheck::Available);
        assert_eq!(form.email_error(), None);
        assert!(form.submission().is_some());
    }
}
