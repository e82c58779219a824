//! Multimodal completion request bodies.
//!
//! Models the chat-completions wire shape: a message holds a list of
//! content parts, and an image travels as an `image_url` part whose URL is
//! the payload's `data:image/jpeg;base64,...` form with a detail hint.

use scanprep_core::EncodedPayload;
use serde::Serialize;

/// Detail hint for how much resolution the endpoint should spend on the
/// image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Detail {
    /// Let the endpoint pick.
    #[default]
    Auto,
    /// Low-resolution pass, cheapest.
    Low,
    /// Full-resolution tiling, most expensive.
    High,
}

/// An `image_url` entry: the data URL plus its detail hint.
#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
    pub detail: Detail,
}

/// One part of a multimodal message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// A plain text instruction.
    Text { text: String },
    /// An inline image, carried as a data URL.
    ImageUrl { image_url: ImageUrl },
}

/// A chat message with multimodal content.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// Requested response shape.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

/// A complete request body for the chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Build the canonical single-image extraction request: one user
    /// message holding the text instruction and the payload as a data
    /// URL, with a JSON-object response demanded.
    pub fn extraction(
        model: impl Into<String>,
        instruction: impl Into<String>,
        payload: &EncodedPayload,
        detail: Detail,
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: instruction.into(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: payload.to_data_url(),
                            detail,
                        },
                    },
                ],
            }],
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extraction_request_wire_shape() {
        let payload = EncodedPayload::from_jpeg_bytes(vec![0xFF, 0xD8, 0xFF, 0xD9]);
        let request = CompletionRequest::extraction(
            "gpt-5.1",
            "Extract JSON data from this document.",
            &payload,
            Detail::Auto,
        );

        let expected = json!({
            "model": "gpt-5.1",
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {"type": "text", "text": "Extract JSON data from this document."},
                        {
                            "type": "image_url",
                            "image_url": {
                                "url": format!("data:image/jpeg;base64,{}", payload.to_base64()),
                                "detail": "auto"
                            }
                        }
                    ]
                }
            ],
            "response_format": {"type": "json_object"}
        });

        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn test_detail_hint_serialization() {
        assert_eq!(serde_json::to_value(Detail::Auto).unwrap(), json!("auto"));
        assert_eq!(serde_json::to_value(Detail::Low).unwrap(), json!("low"));
        assert_eq!(serde_json::to_value(Detail::High).unwrap(), json!("high"));
    }

    #[test]
    fn test_data_url_embeds_payload() {
        let payload = EncodedPayload::from_jpeg_bytes(vec![1, 2, 3]);
        let request = CompletionRequest::extraction("m", "read this", &payload, Detail::High);

        let ContentPart::ImageUrl { image_url } = &request.messages[0].content[1] else {
            panic!("second part should be the image");
        };
        assert!(image_url.url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(image_url.detail, Detail::High);
    }
}
