// Unit Tests for Chat Request Building and Response Extraction
//
// UNIT UNDER TEST: chat module (build_messages, build_chat_request, extract_content)
//
// BUSINESS RESPONSIBILITY:
//   - Compose the message list from system prompt, message text, and image URL
//   - Shape the chat completion payload with only caller-supplied tuning fields
//   - Extract and trim the first choice's completion text
//   - Reject malformed or empty completions with the fixed invalid-response message
//
// TEST COVERAGE:
//   - Plain-text vs multimodal user content selection
//   - System prompt prepending (skipped when empty)
//   - Wire-format serialization of messages and tuning fields
//   - Response extraction paths: trim, missing choices, empty content

use crate::chat::{build_chat_request, build_messages, extract_content};
use crate::error::{Ai302Error, INVALID_RESPONSE_MSG};
use crate::node::{AdditionalFields, ChatParams};
use crate::types::{ContentPart, MessageContent};
use serde_json::json;

#[cfg(test)]
mod message_building_tests {
    use super::*;

    #[test]
    fn test_plain_message_stays_a_string() {
        let messages = build_messages(None, "hello", None);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
        assert_eq!(
            messages[0].content,
            MessageContent::Text("hello".to_string())
        );
    }

    #[test]
    fn test_image_url_switches_to_two_part_content() {
        let messages = build_messages(None, "hello", Some("https://x/y.png"));

        let MessageContent::Parts(parts) = &messages[0].content else {
            panic!("Expected multipart content when an image URL is present");
        };
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], ContentPart::text("hello"));
        assert_eq!(parts[1], ContentPart::image_url("https://x/y.png"));
    }

    #[test]
    fn test_image_part_keeps_empty_message_text() {
        // The text part carries the original message even when it is empty
        let messages = build_messages(None, "", Some("data:image/png;base64,AAAA"));

        let MessageContent::Parts(parts) = &messages[0].content else {
            panic!("Expected multipart content");
        };
        assert_eq!(parts[0], ContentPart::text(""));
    }

    #[test]
    fn test_empty_image_url_is_ignored() {
        let messages = build_messages(None, "hello", Some(""));

        assert_eq!(
            messages[0].content,
            MessageContent::Text("hello".to_string())
        );
    }

    #[test]
    fn test_system_prompt_is_prepended() {
        let messages = build_messages(Some("be terse"), "hello", None);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(
            messages[0].content,
            MessageContent::Text("be terse".to_string())
        );
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_empty_system_prompt_is_skipped() {
        let messages = build_messages(Some(""), "hello", None);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
    }

    #[test]
    fn test_multimodal_wire_format() {
        // The serialized shape must match the OpenAI-compatible part layout
        let messages = build_messages(None, "hello", Some("https://x/y.png"));
        let wire = serde_json::to_value(&messages[0]).unwrap();

        assert_eq!(
            wire,
            json!({
                "role": "user",
                "content": [
                    {"type": "text", "text": "hello"},
                    {"type": "image_url", "image_url": {"url": "https://x/y.png"}}
                ]
            })
        );
    }
}

#[cfg(test)]
mod request_shaping_tests {
    use super::*;

    #[test]
    fn test_defaults_produce_minimal_payload() {
        let params = ChatParams::new("gpt-4o", "hello");

        let request = build_chat_request(&params);
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(
            wire,
            json!({
                "model": "gpt-4o",
                "messages": [{"role": "user", "content": "hello"}],
                "temperature": 0.9
            })
        );
    }

    #[test]
    fn test_supplied_tuning_fields_reach_the_wire() {
        let mut params = ChatParams::new("gpt-4o", "hello");
        params.additional = AdditionalFields {
            frequency_penalty: Some(0.5),
            max_tokens: Some(256),
            presence_penalty: None,
            top_p: Some(0.95),
        };

        let wire = serde_json::to_value(build_chat_request(&params)).unwrap();

        assert_eq!(wire["frequency_penalty"], json!(0.5));
        assert_eq!(wire["max_tokens"], json!(256));
        assert_eq!(wire["top_p"], json!(0.95));
        assert!(
            wire.get("presence_penalty").is_none(),
            "Unset tuning fields must not be defaulted into the payload"
        );
    }

    #[test]
    fn test_temperature_comes_from_item_params() {
        let mut params = ChatParams::new("gpt-4o", "hello");
        params.temperature = 0.2;

        let request = build_chat_request(&params);

        assert_eq!(request.temperature, 0.2);
    }
}

#[cfg(test)]
mod response_extraction_tests {
    use super::*;

    #[test]
    fn test_content_is_trimmed() {
        let body = json!({"choices": [{"message": {"content": "  hi  "}}]});

        let content = extract_content(&body).unwrap();

        assert_eq!(content, "hi");
    }

    #[test]
    fn test_missing_choices_is_invalid_response() {
        let body = json!({"object": "chat.completion"});

        let err = extract_content(&body).unwrap_err();

        assert!(matches!(err, Ai302Error::InvalidResponse { .. }));
        assert_eq!(err.to_string(), INVALID_RESPONSE_MSG);
    }

    #[test]
    fn test_empty_choices_is_invalid_response() {
        let body = json!({"choices": []});

        assert!(matches!(
            extract_content(&body),
            Err(Ai302Error::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_non_string_content_is_invalid_response() {
        let body = json!({"choices": [{"message": {"content": 42}}]});

        assert!(matches!(
            extract_content(&body),
            Err(Ai302Error::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_whitespace_only_content_is_invalid_response() {
        // A well-formed but empty completion is indistinguishable from a
        // malformed one; both get the fixed message.
        let body = json!({"choices": [{"message": {"content": "   "}}]});

        let err = extract_content(&body).unwrap_err();

        assert_eq!(err.to_string(), INVALID_RESPONSE_MSG);
    }
}
