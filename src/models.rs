//! Model listing for the host's model dropdown.
//!
//! Issues `GET /v1/models?llm=1` and maps the catalogue into label/value
//! pairs. The response contract is narrow: the body must carry an array field
//! `data` whose elements expose an `id`. Anything else is a shape error, and a
//! well-formed but empty catalogue gets its own distinct error so the host can
//! tell "bad payload" from "zero results".

use crate::config::Ai302Config;
use crate::error::{Ai302Error, Ai302Result};
use crate::http::HttpClient;
use crate::logging::log_debug;
use crate::types::ModelOption;
use serde_json::Value;

/// Fetch the available models, sorted ascending by id.
///
/// # Errors
///
/// - [`Ai302Error::ConfigurationError`] when no API key is configured
/// - [`Ai302Error::InvalidResponse`] when `data` is missing/not an array, an
///   entry has no `id`, or the list is empty
/// - [`Ai302Error::RequestFailed`] / [`Ai302Error::AuthenticationFailed`] for
///   transport-level failures, wrapped with the underlying message
pub async fn list_models(config: &Ai302Config, http: &HttpClient) -> Ai302Result<Vec<ModelOption>> {
    let credentials = config.credentials()?;
    let headers = HttpClient::build_auth_headers(credentials)?;
    let url = format!("{}/v1/models?llm=1", config.base_url);

    // Transport-level failures carry the listing context, like the rest of
    // the host's dropdown errors; shape errors keep their fixed messages.
    let body = http.get_json(&url, &headers).await.map_err(|e| match e {
        Ai302Error::RequestFailed { message, source } => Ai302Error::RequestFailed {
            message: format!("Failed to load models: {message}"),
            source,
        },
        Ai302Error::AuthenticationFailed { message } => Ai302Error::AuthenticationFailed {
            message: format!("Failed to load models: {message}"),
        },
        other => other,
    })?;

    let options = map_model_options(&body)?;

    log_debug!(
        model_count = options.len(),
        "302.AI model list loaded"
    );

    Ok(options)
}

/// Map a model-list response body into sorted dropdown options.
pub(crate) fn map_model_options(body: &Value) -> Ai302Result<Vec<ModelOption>> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| Ai302Error::invalid_response("model list has no `data` array"))?;

    let mut options = data
        .iter()
        .map(|model| {
            let id = model
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| Ai302Error::invalid_response("model entry has no `id`"))?;

            let description = match model.get("owned_by").and_then(Value::as_str) {
                Some(owned_by) => format!("Owned by: {owned_by}"),
                None => String::new(),
            };

            Ok(ModelOption {
                name: id.to_string(),
                value: id.to_string(),
                description,
            })
        })
        .collect::<Ai302Result<Vec<_>>>()?;

    options.sort_by(|a, b| a.name.cmp(&b.name));

    if options.is_empty() {
        return Err(Ai302Error::no_models_found());
    }

    Ok(options)
}
