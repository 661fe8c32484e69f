//! 302.AI API credential bundle.
//!
//! The host stores one secret per credential: the API key. The node only ever
//! turns it into a `Bearer` authorization value and a test probe the host can
//! fire to validate the key before any workflow runs.

use crate::error::{Ai302Error, Ai302Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// The one secret the node needs: a 302.AI API key.
///
/// Immutable once supplied by the host. `Debug` redacts the key so credentials
/// can appear in logs without leaking.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiCredentials {
    pub api_key: String,
}

impl ApiCredentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    /// Validate that the credential actually carries a key.
    ///
    /// Checked once per batch, before any network call.
    pub fn validate(&self) -> Ai302Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Ai302Error::configuration_error("No valid API key provided"));
        }
        Ok(())
    }

    /// The `Authorization` header value injected into every outbound request.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// The probe the host uses to validate a key outside the main flow.
    ///
    /// A plain model listing with bearer auth; validation itself is delegated
    /// to the remote API.
    pub fn test_request(base_url: &str) -> (Method, String) {
        (Method::GET, format!("{base_url}/v1/models"))
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
