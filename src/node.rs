//! Batch execution surface for the workflow host.
//!
//! The host hands the node a batch of input items and an execution context
//! (credential configuration plus the continue-on-failure flag). Items are
//! processed strictly one at a time; each network call is awaited before the
//! next item begins. The context is an explicit capability object rather than
//! implicit runtime binding, so the whole surface stays testable.

use crate::chat::{build_chat_request, extract_content};
use crate::config::Ai302Config;
use crate::error::{Ai302Error, Ai302Result};
use crate::http::HttpClient;
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Operation selector for the node.
///
/// Currently a single operation exists; unknown selectors coming from the
/// host surface as [`Ai302Error::UnsupportedOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Chat,
}

impl Operation {
    pub fn parse(value: &str) -> Ai302Result<Self> {
        match value {
            "chat" => Ok(Self::Chat),
            other => Err(Ai302Error::unsupported_operation(other)),
        }
    }
}

/// Optional tuning fields for a chat item.
///
/// Explicit named fields instead of a dynamic parameter bag; a field absent
/// here is absent from the wire payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AdditionalFields {
    pub frequency_penalty: Option<f64>,
    pub max_tokens: Option<u32>,
    pub presence_penalty: Option<f64>,
    pub top_p: Option<f64>,
}

/// Per-item parameters as supplied by the host.
///
/// Host-shaped JSON may omit every field except `model` and `message`; the
/// UI defaults are applied during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatParams {
    #[serde(default)]
    pub operation: Operation,
    /// Required model id for the completion.
    pub model: String,
    /// Optional system message; skipped entirely when empty.
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// The user message text.
    pub message: String,
    /// Sampling temperature, UI default 0.9.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Optional image input: http/https URL or base64 data URL.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub additional: AdditionalFields,
}

fn default_temperature() -> f64 {
    0.9
}

impl ChatParams {
    /// Chat parameters with the UI defaults applied.
    pub fn new(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: Operation::Chat,
            model: model.into(),
            system_prompt: None,
            message: message.into(),
            temperature: default_temperature(),
            image_url: None,
            additional: AdditionalFields::default(),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Host-provided execution capabilities for one batch.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    pub config: Ai302Config,
    /// When set, per-item failures become `{error}` output rows instead of
    /// aborting the batch.
    pub continue_on_fail: bool,
    http: HttpClient,
}

impl ExecutionContext {
    pub fn new(config: Ai302Config) -> Self {
        Self {
            config,
            continue_on_fail: false,
            http: HttpClient::new(),
        }
    }

    pub fn continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }
}

/// One output row, tagged with the index of the item that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOutput {
    pub index: usize,
    #[serde(flatten)]
    pub payload: ItemPayload,
}

/// Either the trimmed completion text or the captured per-item error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemPayload {
    #[serde(rename = "response")]
    Response(String),
    #[serde(rename = "error")]
    Error(String),
}

/// Execute a batch of chat items.
///
/// The credential is validated once, before any item is touched. Items then
/// run sequentially; a failing item either becomes an error row
/// (continue-on-failure) or aborts the batch, dropping the remaining items.
///
/// # Errors
///
/// Returns [`Ai302Error::ConfigurationError`] before any network call when the
/// API key is missing or empty. With continue-on-failure disabled, the first
/// per-item error is propagated as-is.
pub async fn execute(ctx: &ExecutionContext, items: &[ChatParams]) -> Ai302Result<Vec<ItemOutput>> {
    // Credential check happens once, not per item.
    let credentials = ctx.config.credentials()?;
    let headers = HttpClient::build_auth_headers(credentials)?;
    let mut outputs = Vec::with_capacity(items.len());

    for (index, params) in items.iter().enumerate() {
        match execute_item(ctx, &headers, params).await {
            Ok(response) => outputs.push(ItemOutput {
                index,
                payload: ItemPayload::Response(response),
            }),
            Err(e) if ctx.continue_on_fail => {
                outputs.push(ItemOutput {
                    index,
                    payload: ItemPayload::Error(e.to_string()),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outputs)
}

/// Run a single item through the chat endpoint.
async fn execute_item(
    ctx: &ExecutionContext,
    headers: &reqwest::header::HeaderMap,
    params: &ChatParams,
) -> Ai302Result<String> {
    // A new operation variant needs its own arm here.
    match params.operation {
        Operation::Chat => {}
    }

    let request = build_chat_request(params);

    log_debug!(
        model = %request.model,
        message_count = request.messages.len(),
        has_image = params.image_url.as_deref().is_some_and(|u| !u.is_empty()),
        "Executing chat completion"
    );

    let url = format!("{}/v1/chat/completions", ctx.config.base_url);
    let body = ctx.http.post_json(&url, headers, &request).await?;

    extract_content(&body)
}
