//! Blocking submission to the completion endpoint.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;
use crate::request::CompletionRequest;

/// Outer bound on a single submission, decode + upload + inference.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Handle to the remote completion endpoint.
///
/// Constructed explicitly and passed to callers; there is no process-wide
/// client instance. One instance is cheap to clone and safe to share.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl CompletionClient {
    /// Create a client for the endpoint at `base_url`, authenticating with
    /// a bearer `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Submit an extraction request and return the parsed JSON object.
    ///
    /// Performs exactly one blocking POST to `{base}/chat/completions`.
    /// No retry, no streaming; a caller wanting either wraps this call.
    ///
    /// # Errors
    ///
    /// * [`ClientError::Transport`] - the request never completed.
    /// * [`ClientError::Api`] - the endpoint answered with a non-success
    ///   status.
    /// * [`ClientError::MalformedResponse`] - the completion held no
    ///   choices or its content was not a JSON object.
    pub fn extract(&self, request: &CompletionRequest) -> Result<Value, ClientError> {
        let url = format!("{}/chat/completions", self.base_url);
        log::debug!(
            "submitting extraction request to {url} (model {})",
            request.model
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json()?;
        let fields = parse_extraction(completion)?;
        log::debug!(
            "extraction response parsed ({} top-level fields)",
            fields.as_object().map_or(0, |map| map.len())
        );
        Ok(fields)
    }
}

/// Pull the extracted JSON object out of a completion.
fn parse_extraction(completion: CompletionResponse) -> Result<Value, ClientError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::MalformedResponse("no choices in response".to_string()))?;

    let value: Value = serde_json::from_str(&choice.message.content)
        .map_err(|e| ClientError::MalformedResponse(format!("content is not valid JSON: {e}")))?;

    if !value.is_object() {
        return Err(ClientError::MalformedResponse(
            "content is not a JSON object".to_string(),
        ));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion_with_content(content: &str) -> CompletionResponse {
        CompletionResponse {
            choices: vec![Choice {
                message: ChoiceMessage {
                    content: content.to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_parse_extraction_object() {
        let completion = completion_with_content(r#"{"invoice_number": "A-1042", "total": 99.5}"#);
        let value = parse_extraction(completion).unwrap();

        assert_eq!(value["invoice_number"], "A-1042");
        assert_eq!(value["total"], 99.5);
    }

    #[test]
    fn test_parse_extraction_empty_choices() {
        let completion = CompletionResponse { choices: vec![] };
        let err = parse_extraction(completion).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_extraction_non_json_content() {
        let completion = completion_with_content("Sorry, I cannot read this image.");
        let err = parse_extraction(completion).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_parse_extraction_non_object_content() {
        let completion = completion_with_content(r#"["a", "b"]"#);
        let err = parse_extraction(completion).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[test]
    fn test_response_deserialization() {
        let raw = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "{\"total\": 12}"}}
            ]
        }"#;
        let completion: CompletionResponse = serde_json::from_str(raw).unwrap();
        let value = parse_extraction(completion).unwrap();
        assert_eq!(value["total"], 12);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CompletionClient::new("https://api.example.com/v1/", "key").unwrap();
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }
}
