//! `reqwest` implementation of [`UserDirectory`].

use registration::{NewUser, RegisterResponse, ServiceError, UserDirectory, UserRecord};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

/// User directory backed by the remote registration API.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpDirectory {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Build a directory from [`ApiConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

fn transport_error(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %response.url(), %status, "backend returned an error status");
        return Err(ServiceError::Status {
            status: status.as_u16(),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

impl UserDirectory for HttpDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ServiceError> {
        let response = self
            .client
            .get(self.config.users_url())
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn register_user(&self, user: &NewUser) -> Result<RegisterResponse, ServiceError> {
        let response = self
            .client
            .post(self.config.register_url())
            .json(user)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }
}
