//! # ai302-node
//!
//! Client engine for a 302.AI workflow-automation node: credential handling,
//! model listing for the host's model dropdown, and batch chat execution.
//!
//! ## Key Features
//!
//! - **Credentials**: Single API key bundle with bearer-auth injection and a test probe
//! - **Model Listing**: `GET /v1/models?llm=1` mapped into sorted dropdown options
//! - **Chat Execution**: Per-item batch loop with optional system prompt and image input
//! - **Continue-on-Failure**: Per-item errors captured as output rows instead of aborting
//!
//! ## Example
//!
//! ```rust,no_run
//! use ai302_node::{Ai302Config, ApiCredentials, ChatParams, ExecutionContext, execute};
//!
//! # async fn example() -> Result<(), ai302_node::Ai302Error> {
//! let config = Ai302Config {
//!     credentials: Some(ApiCredentials::new("your-api-key")),
//!     ..Ai302Config::default()
//! };
//!
//! let ctx = ExecutionContext::new(config);
//! let items = vec![ChatParams::new("gpt-4o", "Hello, how are you?")];
//! let outputs = execute(&ctx, &items).await?;
//! # Ok(())
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod chat;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod models;
pub mod node;
pub mod types;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use chat::{build_chat_request, build_messages, extract_content};
pub use config::Ai302Config;
pub use credentials::ApiCredentials;
pub use error::{Ai302Error, Ai302Result};
pub use http::HttpClient;
pub use models::list_models;
pub use node::{
    execute, AdditionalFields, ChatParams, ExecutionContext, ItemOutput, ItemPayload, Operation,
};
pub use types::{ChatMessage, ChatRequest, ContentPart, MessageContent, ModelOption};
