//! Cloudflare Workers AI provider.
//!
//! Uses the native REST route `POST /accounts/{account_id}/ai/run/{model}`.
//! Requests carry `messages` and `max_tokens`; the answer text arrives in
//! `result.response` inside Cloudflare's `{success, result, errors}` envelope.

use async_trait::async_trait;
use postcraft_core::error::ProviderError;
use postcraft_core::message::Message;
use postcraft_core::provider::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{check_status, http_client, transport_error};

const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Workers AI provider bound to one Cloudflare account.
pub struct WorkersAiProvider {
    name: String,
    base_url: String,
    account_id: String,
    api_token: String,
    client: reqwest::Client,
}

impl WorkersAiProvider {
    pub fn new(account_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            name: "workers_ai".into(),
            base_url: DEFAULT_BASE_URL.into(),
            account_id: account_id.into(),
            api_token: api_token.into(),
            client: http_client(120),
        }
    }

    /// Create with a custom base URL (e.g., an AI Gateway or a test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn run_url(&self, model: &str) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url,
            self.account_id,
            model.trim_start_matches('/')
        )
    }

    fn request_body(request: &ProviderRequest) -> RunRequest {
        RunRequest {
            messages: request
                .messages
                .iter()
                .map(|m| RunMessage {
                    role: m.role.as_str().into(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    fn into_provider_response(model: &str, envelope: RunEnvelope) -> Result<ProviderResponse, ProviderError> {
        if !envelope.success {
            let message = if envelope.errors.is_empty() {
                "Workers AI reported failure without details".to_string()
            } else {
                envelope
                    .errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            };
            return Err(ProviderError::ApiError {
                status_code: 200,
                message,
            });
        }

        let result = envelope.result.ok_or_else(|| ProviderError::ApiError {
            status_code: 200,
            message: "Missing result in Workers AI response".into(),
        })?;

        let text = result.response.ok_or_else(|| ProviderError::ApiError {
            status_code: 200,
            message: "Workers AI result has no response text".into(),
        })?;

        let usage = result.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ProviderResponse {
            message: Message::assistant(text),
            usage,
            model: model.to_string(),
        })
    }
}

#[async_trait]
impl postcraft_core::Provider for WorkersAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(
        &self,
        request: ProviderRequest,
    ) -> std::result::Result<ProviderResponse, ProviderError> {
        if self.account_id.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Workers AI needs a Cloudflare account ID (CLOUDFLARE_ACCOUNT_ID)".into(),
            ));
        }

        let url = self.run_url(&request.model);
        let body = Self::request_body(&request);

        debug!(provider = %self.name, model = %request.model, "Running Workers AI model");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(&self.name, response).await?;

        let envelope: RunEnvelope = response.json().await.map_err(|e| ProviderError::ApiError {
            status_code: 200,
            message: format!("Failed to parse response: {e}"),
        })?;

        Self::into_provider_response(&request.model, envelope)
    }
}

// --- Workers AI API types (internal) ---

#[derive(Debug, Serialize)]
struct RunRequest {
    messages: Vec<RunMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct RunMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct RunEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    result: Option<RunResult>,
    #[serde(default)]
    errors: Vec<RunError>,
}

#[derive(Debug, Deserialize)]
struct RunResult {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    usage: Option<RunUsage>,
}

#[derive(Debug, Deserialize)]
struct RunUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct RunError {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_core::Provider;

    #[test]
    fn run_url_embeds_account_and_model() {
        let provider = WorkersAiProvider::new("acct-1", "token");
        assert_eq!(
            provider.run_url("@cf/meta/llama-3-8b-instruct"),
            "https://api.cloudflare.com/client/v4/accounts/acct-1/ai/run/@cf/meta/llama-3-8b-instruct"
        );
        assert_eq!(provider.name(), "workers_ai");
    }

    #[test]
    fn custom_base_url() {
        let provider = WorkersAiProvider::new("acct-1", "token").with_base_url("http://127.0.0.1:9000/");
        assert!(provider.run_url("m").starts_with("http://127.0.0.1:9000/accounts/acct-1"));
    }

    #[test]
    fn request_body_shape() {
        let request = ProviderRequest::new(
            "@cf/meta/llama-3-8b-instruct",
            vec![Message::system("be brief"), Message::user("topic: AI")],
        )
        .with_max_tokens(650);
        let body = serde_json::to_value(WorkersAiProvider::request_body(&request)).unwrap();
        assert_eq!(body["max_tokens"], 650);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "topic: AI");
    }

    #[test]
    fn parse_successful_envelope() {
        let envelope: RunEnvelope = serde_json::from_value(serde_json::json!({
            "result": {"response": "Hybrid work is here to stay."},
            "success": true,
            "errors": [],
            "messages": []
        }))
        .unwrap();
        let response = WorkersAiProvider::into_provider_response("@cf/meta/llama-3-8b-instruct", envelope).unwrap();
        assert_eq!(response.message.content, "Hybrid work is here to stay.");
        assert_eq!(response.model, "@cf/meta/llama-3-8b-instruct");
        assert!(response.usage.is_none());
    }

    #[test]
    fn parse_failed_envelope() {
        let envelope: RunEnvelope = serde_json::from_value(serde_json::json!({
            "result": null,
            "success": false,
            "errors": [{"code": 5007, "message": "No such model"}]
        }))
        .unwrap();
        let err = WorkersAiProvider::into_provider_response("m", envelope).unwrap_err();
        assert!(err.to_string().contains("No such model"));
    }

    #[test]
    fn missing_response_text_is_an_error() {
        let envelope: RunEnvelope =
            serde_json::from_value(serde_json::json!({"result": {}, "success": true})).unwrap();
        assert!(WorkersAiProvider::into_provider_response("m", envelope).is_err());
    }

    #[tokio::test]
    async fn missing_account_is_not_configured() {
        let provider = WorkersAiProvider::new("", "token");
        let err = provider
            .complete(ProviderRequest::new("m", vec![Message::user("hi")]))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotConfigured(_)));
    }
}
