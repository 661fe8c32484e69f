//! HTTP plumbing for the 302.AI API.
//!
//! A thin wrapper over `reqwest` that builds the bearer-auth headers, issues
//! GET/POST requests, and maps non-success statuses into the node error
//! taxonomy. Retry, rate limiting, and timeout policy are deliberately left to
//! the transport and the host runtime.

use crate::credentials::ApiCredentials;
use crate::error::{Ai302Error, Ai302Result};
use crate::logging::log_error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for 302.AI endpoints
#[derive(Debug, Default)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build authentication headers for 302.AI requests
    pub fn build_auth_headers(credentials: &ApiCredentials) -> Ai302Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&credentials.authorization_value()).map_err(|e| {
                Ai302Error::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );

        Ok(headers)
    }

    /// Issue a GET request and parse the body as JSON
    pub async fn get_json(&self, url: &str, headers: &HeaderMap) -> Ai302Result<Value> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    url = %url,
                    error = %e,
                    "HTTP request failed"
                );
                Ai302Error::request_failed(format!("Request failed: {e}"), Some(Box::new(e)))
            })?;

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        parse_success_response(response).await
    }

    /// Issue a POST request with a JSON body and parse the response as JSON
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: &HeaderMap,
        body: &B,
    ) -> Ai302Result<Value> {
        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                log_error!(
                    url = %url,
                    error = %e,
                    "HTTP request failed"
                );
                Ai302Error::request_failed(format!("Request failed: {e}"), Some(Box::new(e)))
            })?;

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        parse_success_response(response).await
    }
}

/// Handle non-success HTTP responses
async fn handle_error_response(response: reqwest::Response) -> Ai302Error {
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    log_error!(
        status = %status,
        error_text = %error_text,
        "API error response"
    );

    match status.as_u16() {
        401 => Ai302Error::authentication_failed("Invalid API key or authentication failed"),
        _ => Ai302Error::request_failed(format!("API error {status}: {error_text}"), None),
    }
}

/// Parse a successful HTTP response body into JSON
async fn parse_success_response(response: reqwest::Response) -> Ai302Result<Value> {
    let raw_body = response.text().await.map_err(|e| {
        log_error!(
            error = %e,
            "Failed to read response body"
        );
        Ai302Error::request_failed(format!("Failed to read response: {e}"), Some(Box::new(e)))
    })?;

    serde_json::from_str(&raw_body).map_err(|e| {
        log_error!(
            error = %e,
            raw_body = %raw_body,
            "Failed to parse response body as JSON"
        );
        Ai302Error::invalid_response(format!("response body is not JSON: {e}"))
    })
}
