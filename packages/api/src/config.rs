//! Backend location.

/// Environment variable holding the backend base URL.
pub const BASE_URL_VAR: &str = "REGISTRY_API_URL";

/// Used when [`BASE_URL_VAR`] is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Where the registration backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a config for the given base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the environment (and `.env`), falling back to
    /// [`DEFAULT_BASE_URL`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_value(std::env::var(BASE_URL_VAR).ok().as_deref())
    }

    /// In the browser there is no process environment; the URL is baked in
    /// when the bundle is built.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_value(option_env!("REGISTRY_API_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub fn register_url(&self) -> String {
        format!("{}/register", self.base_url)
    }
}
