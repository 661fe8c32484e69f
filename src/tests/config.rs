// Unit Tests for Configuration and Credential Validation
//
// UNIT UNDER TEST: Ai302Config, ApiCredentials
//
// BUSINESS RESPONSIBILITY:
//   - Validate the API key before any network call is made
//   - Build the bearer authorization value and the credential test probe
//   - Keep the secret out of debug output

use crate::config::{Ai302Config, DEFAULT_BASE_URL};
use crate::credentials::ApiCredentials;
use crate::error::Ai302Error;
use reqwest::Method;

#[test]
fn test_missing_credentials_fail_validation() {
    let config = Ai302Config::default();

    assert!(matches!(
        config.validate(),
        Err(Ai302Error::ConfigurationError { .. })
    ));
}

#[test]
fn test_empty_api_key_fails_validation() {
    let config = Ai302Config {
        credentials: Some(ApiCredentials::new("   ")),
        ..Ai302Config::default()
    };

    let err = config.validate().unwrap_err();

    assert!(matches!(err, Ai302Error::ConfigurationError { .. }));
    assert!(err.to_string().contains("No valid API key provided"));
}

#[test]
fn test_valid_key_passes_validation() {
    let config = Ai302Config {
        credentials: Some(ApiCredentials::new("sk-test")),
        ..Ai302Config::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_default_base_url_points_at_302ai() {
    assert_eq!(Ai302Config::default().base_url, "https://api.302.ai");
    assert_eq!(DEFAULT_BASE_URL, "https://api.302.ai");
}

#[test]
fn test_authorization_value_is_bearer_scheme() {
    let credentials = ApiCredentials::new("sk-test");

    assert_eq!(credentials.authorization_value(), "Bearer sk-test");
}

#[test]
fn test_auth_headers_carry_the_authorization_value() {
    // Header construction routes through the credential's bearer value
    let credentials = ApiCredentials::new("sk-test");

    let headers = crate::http::HttpClient::build_auth_headers(&credentials).unwrap();

    assert_eq!(
        headers.get(reqwest::header::AUTHORIZATION).unwrap(),
        credentials.authorization_value().as_str()
    );
    assert_eq!(
        headers.get(reqwest::header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[test]
fn test_credential_probe_is_a_models_get() {
    let (method, url) = ApiCredentials::test_request("https://api.302.ai");

    assert_eq!(method, Method::GET);
    assert_eq!(url, "https://api.302.ai/v1/models");
}

#[test]
fn test_debug_output_redacts_the_key() {
    let credentials = ApiCredentials::new("sk-very-secret");

    let debug = format!("{credentials:?}");

    assert!(!debug.contains("sk-very-secret"));
    assert!(debug.contains("<redacted>"));
}
