//! Gemini `generateContent` REST client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerativeModel, ModelError};

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Talks to the Gemini HTTP API with a single non-streaming request per prompt.
pub struct GeminiModel {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiModel {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let api_key = self.api_key.as_deref().ok_or(ModelError::MissingApiKey)?;
        let url = self.url();

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, %url, "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|source| ModelError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ModelError::Request { url, source })?;

        if !status.is_success() {
            return Err(ModelError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        parse_response(&text)
    }
}

/// Extracts the reply text from a successful `generateContent` body.
fn parse_response(body: &str) -> Result<String, ModelError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;

    if response.candidates.is_empty()
        && let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason)
    {
        return Err(ModelError::Blocked(reason));
    }

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        Err(ModelError::EmptyResponse)
    } else {
        Ok(text)
    }
}

/// Pulls `STATUS: message` out of a Gemini error body, or returns the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorWrapper>(body).map_or_else(
        |_| body.to_string(),
        |wrapper| {
            let message = wrapper.error.message.unwrap_or_else(|| body.to_string());
            match wrapper.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            }
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_single_part() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"I'm here for you."}],"role":"model"}}]}"#;
        assert_eq!(parse_response(body).unwrap(), "I'm here for you.");
    }

    #[test]
    fn test_parse_response_joins_parts_of_first_candidate() {
        let body = r#"{"candidates":[
            {"content":{"parts":[{"text":"Hello"},{"text":" there"}]}},
            {"content":{"parts":[{"text":"ignored"}]}}
        ]}"#;
        assert_eq!(parse_response(body).unwrap(), "Hello there");
    }

    #[test]
    fn test_parse_response_unicode() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"আমি আপনার পাশে আছি।"}]}}]}"#;
        assert_eq!(parse_response(body).unwrap(), "আমি আপনার পাশে আছি।");
    }

    #[test]
    fn test_parse_response_blocked() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        assert!(matches!(
            parse_response(body),
            Err(ModelError::Blocked(reason)) if reason == "SAFETY"
        ));
    }

    #[test]
    fn test_parse_response_no_candidates() {
        assert!(matches!(
            parse_response(r#"{"candidates":[]}"#),
            Err(ModelError::EmptyResponse)
        ));
        assert!(matches!(parse_response("{}"), Err(ModelError::EmptyResponse)));
    }

    #[test]
    fn test_parse_response_candidate_without_text() {
        let body = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        assert!(matches!(parse_response(body), Err(ModelError::EmptyResponse)));

        let body = r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#;
        assert!(matches!(parse_response(body), Err(ModelError::EmptyResponse)));
    }

    #[test]
    fn test_parse_response_malformed() {
        assert!(matches!(
            parse_response("not json"),
            Err(ModelError::Decode(_))
        ));
    }

    #[test]
    fn test_error_message_from_gemini_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "INVALID_ARGUMENT: API key not valid.");
    }

    #[test]
    fn test_error_message_without_status() {
        let body = r#"{"error":{"message":"quota exceeded"}}"#;
        assert_eq!(error_message(body), "quota exceeded");
    }

    #[test]
    fn test_error_message_raw_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let model = GeminiModel::new(
            "https://example.test/".to_string(),
            "gemini-pro".to_string(),
            None,
        );
        assert_eq!(
            model.url(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "hi" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents":[{"role":"user","parts":[{"text":"hi"}]}]})
        );
    }

    #[tokio::test]
    async fn test_generate_without_api_key() {
        let model = GeminiModel::new(
            DEFAULT_ENDPOINT.to_string(),
            DEFAULT_MODEL.to_string(),
            Some("   ".to_string()),
        );
        assert!(matches!(
            model.generate("hello").await,
            Err(ModelError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_generate_unreachable_endpoint() {
        let model = GeminiModel::new(
            "http://127.0.0.1:1".to_string(),
            DEFAULT_MODEL.to_string(),
            Some("test-key".to_string()),
        );
        assert!(matches!(
            model.generate("hello").await,
            Err(ModelError::Request { .. })
        ));
    }
}
