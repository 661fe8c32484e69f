use crate::credentials::ApiCredentials;
use crate::error::{Ai302Error, Ai302Result};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Default 302.AI API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.302.ai";

/// Node-level configuration: the credential supplied by the host plus the API
/// base URL.
///
/// The base URL is overridable so tests can point the client at a mock server;
/// production use keeps [`DEFAULT_BASE_URL`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ai302Config {
    pub credentials: Option<ApiCredentials>,
    pub base_url: String,
}

impl Default for Ai302Config {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Ai302Config {
    /// Validate the configuration is complete.
    ///
    /// # Errors
    ///
    /// Returns [`Ai302Error::ConfigurationError`] if no credential is present
    /// or the credential carries an empty key.
    pub fn validate(&self) -> Ai302Result<()> {
        match &self.credentials {
            Some(credentials) => credentials.validate(),
            None => Err(Ai302Error::configuration_error("No valid API key provided")),
        }
    }

    /// Get the validated credential, failing fast when it is absent.
    pub fn credentials(&self) -> Ai302Result<&ApiCredentials> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| Ai302Error::configuration_error("No valid API key provided"))?;
        credentials.validate()?;
        Ok(credentials)
    }

    /// Create a configuration using environment variables.
    ///
    /// Reads `AI302_API_KEY` (required) and `AI302_BASE_URL` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`Ai302Error::ConfigurationError`] if the key is missing or empty.
    pub fn from_env() -> Ai302Result<Self> {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("AI302_API_KEY") {
            config.credentials = Some(ApiCredentials::new(api_key));
        }
        if let Ok(base_url) = std::env::var("AI302_BASE_URL") {
            config.base_url = base_url;
        }

        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            has_api_key = config.credentials.is_some(),
            "302.AI configuration loaded and validated"
        );

        Ok(config)
    }
}
