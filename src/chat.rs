//! Chat request construction and response extraction.
//!
//! The pure core of the node: compose the message list from the per-item
//! fields, shape the completion request, and pull the first choice's text back
//! out of the response.

use crate::error::{Ai302Error, Ai302Result};
use crate::node::ChatParams;
use crate::types::{ChatMessage, ChatRequest, ContentPart, MessageContent};
use serde_json::Value;

/// Compose the outgoing message list.
///
/// A non-empty system prompt is prepended as a system message. The user
/// message is the plain text string, unless an image URL is present: then the
/// content becomes the two-part multimodal form, text part first, carrying the
/// original message text even when it is empty.
pub fn build_messages(
    system_prompt: Option<&str>,
    message: &str,
    image_url: Option<&str>,
) -> Vec<ChatMessage> {
    let mut messages = Vec::new();

    if let Some(prompt) = system_prompt {
        if !prompt.is_empty() {
            messages.push(ChatMessage::system(prompt));
        }
    }

    let content = match image_url {
        Some(url) if !url.is_empty() => MessageContent::Parts(vec![
            ContentPart::text(message),
            ContentPart::image_url(url),
        ]),
        _ => MessageContent::Text(message.to_string()),
    };
    messages.push(ChatMessage::user(content));

    messages
}

/// Shape the completion request body for one item.
///
/// Core fields (`model`, `messages`, `temperature`) come from the named item
/// parameters; the tuning fields are merged in only when the caller supplied
/// them and can never override the core fields.
pub fn build_chat_request(params: &ChatParams) -> ChatRequest {
    ChatRequest {
        model: params.model.clone(),
        messages: build_messages(
            params.system_prompt.as_deref(),
            &params.message,
            params.image_url.as_deref(),
        ),
        temperature: params.temperature,
        frequency_penalty: params.additional.frequency_penalty,
        max_tokens: params.additional.max_tokens,
        presence_penalty: params.additional.presence_penalty,
        top_p: params.additional.top_p,
    }
}

/// Extract the completion text from a chat response body.
///
/// Walks `choices[0].message.content` and trims surrounding whitespace. A
/// missing path, a non-string content, and a trimmed-empty completion all
/// raise the same fixed invalid-response message; a legitimately empty
/// completion is indistinguishable from a malformed one.
pub fn extract_content(body: &Value) -> Ai302Result<String> {
    let content = body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .ok_or_else(|| Ai302Error::invalid_response("missing choices[0].message.content"))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(Ai302Error::invalid_response("completion content is empty"));
    }

    Ok(trimmed.to_string())
}
