/// LLM Client: the single point of entry for all generative-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// Everything else depends on the `TextGenerator` trait, never on `GeminiClient`.
///
/// One call = one HTTP attempt. Retry policy lives with the caller (see `analysis::retry`).
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP 429. The only signal callers should retry on.
    #[error("Rate limited by model service (status {status})")]
    RateLimited { status: u16 },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::RateLimited { .. })
    }
}

/// "Generate text from a prompt." Implemented by `GeminiClient` and by test doubles.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` client. The API key and model are supplied by the
/// caller; nothing is read from the process environment here.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn with_base_url(
        api_key: String,
        model: String,
        base_url: String,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            warn!("Model API returned {}: {}", status, body);
            return Err(LlmError::RateLimited {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: parse_error_message(body),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = parsed.text().ok_or(LlmError::EmptyContent)?;

        debug!(
            "Model call succeeded: model={}, response_chars={}",
            self.model,
            text.len()
        );

        Ok(text.to_string())
    }
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw body.
fn parse_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode as AxumStatus, routing::post, Json, Router};
    use serde_json::{json, Value};

    /// Serves `router` on an ephemeral local port and returns its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/models")
    }

    fn client_for(base_url: String) -> GeminiClient {
        GeminiClient::with_base_url("test-key".to_string(), "test-model".to_string(), base_url)
            .unwrap()
    }

    #[test]
    fn test_response_text_takes_first_candidate_part() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.text(), Some("first"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.text(), None);
    }

    #[test]
    fn test_parse_error_message_falls_back_to_body() {
        let body = r#"{"error": {"code": 400, "message": "bad prompt"}}"#.to_string();
        assert_eq!(parse_error_message(body), "bad prompt");
        assert_eq!(parse_error_message("oops".to_string()), "oops");
    }

    #[test]
    fn test_only_rate_limited_is_retryable() {
        assert!(LlmError::RateLimited { status: 429 }.is_rate_limited());
        assert!(!LlmError::EmptyContent.is_rate_limited());
        assert!(!LlmError::Api {
            status: 500,
            message: "boom".to_string()
        }
        .is_rate_limited());
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let router = Router::new().route(
            "/models/:call",
            post(|Json(body): Json<Value>| async move {
                let prompt = body["contents"][0]["parts"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": format!("echo: {prompt}")}]}}]
                }))
            }),
        );
        let client = client_for(serve(router).await);

        let text = client.generate("hello").await.unwrap();
        assert_eq!(text, "echo: hello");
    }

    #[tokio::test]
    async fn test_generate_maps_429_to_rate_limited() {
        let router = Router::new().route(
            "/models/:call",
            post(|| async { (AxumStatus::TOO_MANY_REQUESTS, "slow down") }),
        );
        let client = client_for(serve(router).await);

        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited { status: 429 }));
    }

    #[tokio::test]
    async fn test_generate_maps_other_status_to_api_error() {
        let router = Router::new().route(
            "/models/:call",
            post(|| async {
                (
                    AxumStatus::BAD_REQUEST,
                    Json(json!({"error": {"code": 400, "message": "API key not valid"}})),
                )
            }),
        );
        let client = client_for(serve(router).await);

        match client.generate("hello").await.unwrap_err() {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_without_text_is_empty_content() {
        let router = Router::new().route(
            "/models/:call",
            post(|| async { Json(json!({"candidates": []})) }),
        );
        let client = client_for(serve(router).await);

        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }
}
