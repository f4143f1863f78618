use async_trait::async_trait;
use minat_core::{ChatMessage, LLMProvider, LLMResponse, Role};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::retry::retry_with_backoff;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        info!("Creating GeminiProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Translate chat messages into a `generateContent` request body.
    ///
    /// System messages are merged into `systemInstruction`; assistant turns
    /// use Gemini's `model` role.
    fn build_request(messages: &[ChatMessage]) -> Value {
        let system: Vec<Value> = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| json!({ "text": m.content }))
            .collect();

        let contents: Vec<Value> = messages
            .iter()
            .filter(|m| m.role != Role::System)
            .map(|m| {
                let role = if m.role == Role::Assistant { "model" } else { "user" };
                json!({ "role": role, "parts": [{ "text": m.content }] })
            })
            .collect();

        let mut request = json!({ "contents": contents });
        if !system.is_empty() {
            request["systemInstruction"] = json!({ "parts": system });
        }
        request
    }

    fn parse_response(response: &Value) -> anyhow::Result<LLMResponse> {
        let parts = response["candidates"][0]["content"]["parts"]
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing content"))?;

        let content: String = parts.iter().filter_map(|p| p["text"].as_str()).collect();
        if content.is_empty() {
            anyhow::bail!("Invalid response format: empty content");
        }

        let usage = response["usageMetadata"].as_object().map(|u| {
            let count = |key: &str| {
                u32::try_from(u.get(key).and_then(Value::as_u64).unwrap_or(0)).unwrap_or(0)
            };
            minat_core::Usage {
                prompt_tokens: count("promptTokenCount"),
                completion_tokens: count("candidatesTokenCount"),
                total_tokens: count("totalTokenCount"),
            }
        });

        Ok(LLMResponse { content, usage })
    }

    /// Helper method to send a single request
    async fn try_send(&self, model: &str, request: &Value) -> anyhow::Result<LLMResponse> {
        let response = self
            .client
            .post(format!("{}/models/{model}:generateContent", self.base_url))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Self::parse_response(&response)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse> {
        let request = Self::build_request(messages);

        info!("Sending request to Gemini API: model={}", model);

        // Short backoff: an interactive user is waiting on the answer.
        let base_delays: [u64; 2] = [1, 2];
        let final_retries = 1;

        let response = retry_with_backoff(
            || self.try_send(model, &request),
            &base_delays,
            final_retries,
            4,
        )
        .await?;

        if let Some(usage) = &response.usage {
            info!(
                "Received response from Gemini API: {} tokens",
                usage.total_tokens
            );
        } else {
            info!("Received response from Gemini API");
        }
        Ok(response)
    }

    fn get_default_model(&self) -> &'static str {
        DEFAULT_MODEL
    }
}
