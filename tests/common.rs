//! Shared helpers for HTTP integration tests.

// Not every test binary uses every helper
#![allow(dead_code)]

use ai302_node::{Ai302Config, ApiCredentials, ExecutionContext};
use wiremock::MockServer;

/// Config pointed at a wiremock server with a test credential.
pub fn test_config(mock_server: &MockServer) -> Ai302Config {
    Ai302Config {
        credentials: Some(ApiCredentials::new("test-key")),
        base_url: mock_server.uri(),
    }
}

/// Execution context pointed at a wiremock server.
pub fn test_context(mock_server: &MockServer) -> ExecutionContext {
    ExecutionContext::new(test_config(mock_server))
}
