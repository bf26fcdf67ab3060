//! Chat-completion client for the question board's synthetic answers.
//!
//! Speaks the OpenAI-compatible `/chat/completions` dialect exposed by Groq.
//! The browser calls this directly; the key is baked in at compile time via
//! `TROVE_GROQ_KEY` and the client refuses to send anything without one.

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Default model for generated answers.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl CompletionClient {
    /// Client against the public Groq endpoint, keyed from the build
    /// environment. A missing key is reported per-request, not at startup.
    pub fn groq() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: GROQ_BASE_URL.to_string(),
            api_key: option_env!("TROVE_GROQ_KEY").map(str::to_string),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Request a generated answer. `task` frames the request ("Provide a
    /// helpful answer to this question about archaeology:"), `prompt` is the
    /// user material appended after it.
    pub async fn complete(&self, task: &str, prompt: &str) -> Result<String, ApiError> {
        let key = self.api_key.as_deref().ok_or(ApiError::MissingApiKey)?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: format!("{task} {prompt}"),
            }],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, "completion request rejected");
            return Err(ApiError::Status { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;

        Ok(chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_else(|| "No response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn completion_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": DEFAULT_MODEL,
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    #[test]
    fn chat_request_serializes_model_and_message() {
        let request = ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: "Answer this: What is stratigraphy?".to_string(),
            }],
        };

        let json = serde_json::to_string(&request).expect("Should serialize");
        assert!(json.contains(DEFAULT_MODEL));
        assert!(json.contains("stratigraphy"));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn chat_response_first_choice_wins() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "First"}},
                {"message": {"role": "assistant", "content": "Second"}}
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(response.choices[0].message.content, "First");
    }

    #[tokio::test]
    async fn complete_returns_generated_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body("Layers of sediment.")),
            )
            .mount(&server)
            .await;

        let client = CompletionClient::groq()
            .with_base_url(server.uri())
            .with_api_key("test-key");

        let answer = client
            .complete("Answer this question:", "What is stratigraphy?")
            .await
            .expect("completion should succeed");
        assert_eq!(answer, "Layers of sediment.");
    }

    #[tokio::test]
    async fn complete_with_empty_choices_falls_back() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = CompletionClient::groq()
            .with_base_url(server.uri())
            .with_api_key("test-key");

        let answer = client.complete("Answer:", "anything").await.unwrap();
        assert_eq!(answer, "No response");
    }

    #[tokio::test]
    async fn complete_surfaces_server_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = CompletionClient::groq()
            .with_base_url(server.uri())
            .with_api_key("test-key");

        match client.complete("Answer:", "anything").await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_never_hits_the_network() {
        let client = CompletionClient {
            http: reqwest::Client::new(),
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        };

        assert!(matches!(
            client.complete("Answer:", "anything").await,
            Err(ApiError::MissingApiKey)
        ));
    }
}
