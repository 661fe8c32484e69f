//! Error types for 302.AI node operations.
//!
//! This module provides structured error handling for everything the node can
//! get wrong: configuration problems (missing API key), transport failures,
//! authentication rejections, and responses whose shape doesn't match what the
//! 302.AI API documents.
//!
//! # Error Handling Example
//!
//! ```rust,no_run
//! use ai302_node::{Ai302Error, Ai302Result};
//!
//! fn handle_error(err: Ai302Error) {
//!     match err.category() {
//!         ai302_node::error::ErrorCategory::Client => {
//!             println!("Fix your configuration and try again: {}", err);
//!         }
//!         ai302_node::error::ErrorCategory::External => {
//!             println!("302.AI had an issue: {}", err);
//!         }
//!     }
//! }
//! ```
//!
//! # Result Type
//!
//! Use [`Ai302Result<T>`] as a convenient alias for `Result<T, Ai302Error>`:
//!
//! ```rust
//! use ai302_node::Ai302Result;
//!
//! fn my_function() -> Ai302Result<String> {
//!     Ok("Success".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// Fixed message for responses that don't match the documented API shape.
///
/// Shared by the model lister and the chat executor; the remote API is treated
/// as a single upstream, so malformed payloads get one uniform message.
pub const INVALID_RESPONSE_MSG: &str = "Invalid response format from 302.ai API";

/// Fixed message for a well-formed model list that contains zero entries.
///
/// Deliberately distinct from [`INVALID_RESPONSE_MSG`]: an empty catalogue is
/// not the same failure as a payload we couldn't read.
pub const NO_MODELS_MSG: &str = "No models found in 302.ai API response";

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`Ai302Error::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Client errors (invalid input, authentication, configuration).
    ///
    /// The caller made a mistake that they can fix (wrong API key,
    /// unknown operation, etc.).
    Client,

    /// External service failures (302.AI API, network issues).
    ///
    /// The API or network had an issue, or the API returned something
    /// we couldn't make sense of.
    External,
}

/// Convenient result type for node operations.
///
/// Alias for `Result<T, Ai302Error>`.
pub type Ai302Result<T> = std::result::Result<T, Ai302Error>;

/// Errors that can occur while listing models or executing chat items.
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use ai302_node::Ai302Error;
///
/// let err = Ai302Error::configuration_error("No valid API key provided");
/// let err = Ai302Error::invalid_response("missing choices");
/// ```
///
/// # Error Categories
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Client |
/// | `UnsupportedOperation` | Client |
/// | `AuthenticationFailed` | Client |
/// | `RequestFailed` | External |
/// | `InvalidResponse` | External |
#[derive(Error, Debug)]
pub enum Ai302Error {
    /// Node configuration is invalid or incomplete.
    ///
    /// Common causes:
    /// - Missing or empty API key
    /// - API key containing characters that cannot form a header value
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The selected operation is not supported.
    ///
    /// The node currently supports a single operation: "chat".
    #[error("Operation not supported: {operation}")]
    UnsupportedOperation {
        /// The operation value that was requested.
        operation: String,
    },

    /// The HTTP request to the 302.AI API failed.
    ///
    /// Covers transport failures and non-success HTTP statuses other than
    /// authentication rejections. The underlying cause, when available, is
    /// attached as the error source.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication with the 302.AI API failed (HTTP 401).
    ///
    /// Check the API key. Not recoverable without fixing the credential.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the authentication failure.
        message: String,
    },

    /// The API response doesn't match the documented shape.
    ///
    /// Either the payload is structurally wrong (missing `data`, missing
    /// `choices[0].message.content`) or the model catalogue is empty.
    #[error("{message}")]
    InvalidResponse {
        /// Details about the shape violation.
        message: String,
    },
}

impl Ai302Error {
    /// Get the error category for routing and handling decisions.
    ///
    /// `Client` errors are fixable by the caller (credentials, operation
    /// selection); `External` errors mean the API or network misbehaved.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::UnsupportedOperation { .. } => ErrorCategory::Client,
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::InvalidResponse { .. } => ErrorCategory::External,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the error at the appropriate level.
    // Use them instead of constructing variants directly.

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Node configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    /// Create an unsupported operation error (logs at ERROR level).
    pub fn unsupported_operation(operation: impl Into<String>) -> Self {
        let operation = operation.into();
        log_error!(
            operation = %operation,
            error_type = "unsupported_operation",
            "Unsupported node operation requested"
        );
        Self::UnsupportedOperation { operation }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "302.AI request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "authentication_failed",
            message = %message,
            "302.AI authentication failed"
        );
        Self::AuthenticationFailed { message }
    }

    pub fn invalid_response(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        log_warn!(
            error_type = "invalid_response",
            detail = %detail,
            "302.AI response format invalid"
        );
        Self::InvalidResponse {
            message: INVALID_RESPONSE_MSG.to_string(),
        }
    }

    pub fn no_models_found() -> Self {
        log_warn!(
            error_type = "no_models_found",
            "302.AI model list came back empty"
        );
        Self::InvalidResponse {
            message: NO_MODELS_MSG.to_string(),
        }
    }
}
