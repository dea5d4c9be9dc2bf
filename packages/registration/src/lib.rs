//! Domain logic for the staff registration form.
//!
//! Nothing in here knows about Dioxus or HTTP: the UI crate drives a
//! [`RegistrationForm`] and talks to the backend through any [`UserDirectory`].

pub mod check;
pub mod directory;
pub mod draft;
pub mod error;
pub mod format;
pub mod models;
pub mod submit;

mod memory;
pub use memory::MemoryDirectory;

pub use check::{check_email, EmailCheck, EMAIL_TAKEN_MESSAGE};
pub use directory::UserDirectory;
pub use draft::{Field, FieldInput, RegistrationDraft, RegistrationForm};
pub use error::ServiceError;
pub use models::{NewUser, RegisterResponse, UserRecord};
pub use submit::{submit, SubmitOutcome, SUCCESS_MESSAGE};
