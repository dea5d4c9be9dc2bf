//! # User directory — the two backend calls the form depends on
//!
//! [`UserDirectory`] abstracts the external backend: listing every registered
//! user and registering a new one. The HTTP implementation lives in the `api`
//! crate and [`crate::MemoryDirectory`] backs the tests.
//!
//! Futures are not required to be `Send`: on WASM they run on the browser's
//! single thread via the Dioxus executor.

use crate::error::ServiceError;
use crate::models::{NewUser, RegisterResponse, UserRecord};

/// Async access to the registration backend.
pub trait UserDirectory {
    /// Fetch the complete user collection. No filtering is applied.
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, ServiceError>>;

    /// Submit a new user record.
    fn register_user(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<RegisterResponse, ServiceError>>;
}
