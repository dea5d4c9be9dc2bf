use std::sync::{Arc, Mutex};

use crate::directory::UserDirectory;
use crate::error::ServiceError;
use crate::models::{NewUser, RegisterResponse, UserRecord};
use crate::submit::SUCCESS_MESSAGE;

/// In-memory UserDirectory for tests and offline demos.
///
/// Registrations are recorded but never added to the user list, so the
/// directory behaves like a backend that answers with a fixed message.
#[derive(Clone, Debug)]
pub struct MemoryDirectory {
    users: Arc<Mutex<Vec<UserRecord>>>,
    registrations: Arc<Mutex<Vec<NewUser>>>,
    list_calls: Arc<Mutex<usize>>,
    response_message: String,
    offline: bool,
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self {
            users: Arc::default(),
            registrations: Arc::default(),
            list_calls: Arc::default(),
            response_message: SUCCESS_MESSAGE.to_string(),
            offline: false,
        }
    }
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the directory with users having the given emails.
    pub fn with_emails<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dir = Self::default();
        dir.users
            .lock()
            .unwrap()
            .extend(emails.into_iter().map(|email| UserRecord::new(email)));
        dir
    }

    /// Builder method adding raw user records.
    pub fn with_users(self, users: impl IntoIterator<Item = UserRecord>) -> Self {
        self.users.lock().unwrap().extend(users);
        self
    }

    /// Builder method to change the message returned by `register_user`.
    pub fn with_response_message(mut self, message: impl Into<String>) -> Self {
        self.response_message = message.into();
        self
    }

    /// Builder method making every call fail with [`ServiceError::Unavailable`].
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Payloads received by `register_user`, in order.
    pub fn registrations(&self) -> Vec<NewUser> {
        self.registrations.lock().unwrap().clone()
    }

    /// Number of times the user list was fetched.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

impl UserDirectory for MemoryDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ServiceError> {
        *self.list_calls.lock().unwrap() += 1;
        if self.offline {
            return Err(ServiceError::Unavailable);
        }
        Ok(self.users.lock().unwrap().clone())
    }

    async fn register_user(&self, user: &NewUser) -> Result<RegisterResponse, ServiceError> {
        if self.offline {
            return Err(ServiceError::Unavailable);
        }
        self.registrations.lock().unwrap().push(user.clone());
        Ok(RegisterResponse::new(self.response_message.clone()))
    }
}
