//! OpenRouter API client
//!
//! Two operations: list available models and request a chat completion.
//! Both attach the stored bearer credential and map non-success statuses
//! to typed upstream errors.

use crate::error::SearchError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Production API base
pub const OPENROUTER_BASE: &str = "https://openrouter.ai/api/v1";

/// Sampling temperature; low to bias toward deterministic, factual output
pub const COMPLETION_TEMPERATURE: f64 = 0.2;

/// Completion token ceiling
pub const COMPLETION_MAX_TOKENS: u32 = 800;

/// Referer sent as the identifying origin header
const APP_REFERER: &str = "https://wordspark.app";

/// Application name sent in the X-Title header
const APP_TITLE: &str = "WordSpark";

/// A model offered by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model id used in completion requests
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Context window size in tokens
    pub context_length: Option<u64>,
    /// Pricing per token, decimal strings
    pub pricing: Option<ModelPricing>,
}

/// Per-token pricing as reported by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPricing {
    pub prompt: Option<String>,
    pub completion: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Option<Vec<ModelDescriptor>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// HTTP client for the OpenRouter API
#[derive(Clone)]
pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenRouterClient {
    /// Create a client for the production endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, OPENROUTER_BASE)
    }

    /// Create a client against a custom base URL (used by tests)
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SearchError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SearchError::MissingCredential);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// List the models available to this credential.
    ///
    /// An absent `data` field is treated as an empty catalogue.
    pub async fn list_models(&self) -> Result<Vec<ModelDescriptor>, SearchError> {
        let url = format!("{}/models", self.base_url);
        debug!("Fetching model list from {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: ModelsResponse = response
            .json()
            .await
            .map_err(|_| SearchError::MalformedResponse)?;

        Ok(body.data.unwrap_or_default())
    }

    /// Request a completion for a system/user message pair.
    ///
    /// Returns the raw completion text; extracting the result list from it
    /// is the parser's job.
    pub async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, SearchError> {
        let url = format!("{}/chat/completions", self.base_url);
        debug!("Requesting completion from {} with model {}", url, model);

        let messages = [
            ChatMessage {
                role: "system",
                content: system_prompt,
            },
            ChatMessage {
                role: "user",
                content: user_prompt,
            },
        ];
        let body = json!({
            "model": model,
            "messages": messages,
            "temperature": COMPLETION_TEMPERATURE,
            "max_tokens": COMPLETION_MAX_TOKENS,
            "response_format": { "type": "json_object" },
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|_| SearchError::MalformedResponse)?;

        body.choices
            .and_then(|mut choices| {
                if choices.is_empty() {
                    None
                } else {
                    choices.remove(0).message
                }
            })
            .and_then(|message| message.content)
            .ok_or(SearchError::MalformedResponse)
    }

    /// Map a non-success status to an upstream error, taking the message
    /// from the body's error field when present.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SearchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_text = status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string();
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or(status_text);

        Err(SearchError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_empty_credential_rejected() {
        let result = OpenRouterClient::new("");
        assert!(matches!(result, Err(SearchError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_list_models_parses_catalogue() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "id": "openai/gpt-4o-mini",
                        "name": "GPT-4o Mini",
                        "description": "Small and fast",
                        "context_length": 128000,
                        "pricing": { "prompt": "0.00000015", "completion": "0.0000006" }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_base_url("sk-test", server.uri()).unwrap();
        let models = client.list_models().await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id, "openai/gpt-4o-mini");
        assert_eq!(models[0].context_length, Some(128000));
    }

    #[tokio::test]
    async fn test_list_models_absent_data_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_base_url("sk-test", server.uri()).unwrap();
        assert!(client.list_models().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_uses_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "message": "invalid api key" }
            })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_base_url("sk-bad", server.uri()).unwrap();
        match client.list_models().await {
            Err(SearchError::Upstream { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("expected upstream error, got {:?}", other.map(|m| m.len())),
        }
    }

    #[tokio::test]
    async fn test_upstream_error_falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_base_url("sk-test", server.uri()).unwrap();
        match client.list_models().await {
            Err(SearchError::Upstream { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected upstream error, got {:?}", other.map(|m| m.len())),
        }
    }

    #[tokio::test]
    async fn test_complete_sends_fixed_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(header("X-Title", "WordSpark"))
            .and(body_partial_json(serde_json::json!({
                "model": "openai/gpt-4o-mini",
                "temperature": 0.2,
                "max_tokens": 800,
                "response_format": { "type": "json_object" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [ { "message": { "content": "[{\"word\":\"CAT\"}]" } } ]
            })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_base_url("sk-test", server.uri()).unwrap();
        let text = client
            .complete("openai/gpt-4o-mini", "system", "user")
            .await
            .unwrap();
        assert_eq!(text, "[{\"word\":\"CAT\"}]");
    }

    #[tokio::test]
    async fn test_complete_missing_content_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": []
            })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::with_base_url("sk-test", server.uri()).unwrap();
        let result = client.complete("m", "s", "u").await;
        assert!(matches!(result, Err(SearchError::MalformedResponse)));
    }
}
