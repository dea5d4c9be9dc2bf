//! This crate contains the shared UI of the registration app.

mod registry;
pub use registry::{use_registry, RegistryProvider};

mod register_form;
pub use register_form::RegisterForm;
