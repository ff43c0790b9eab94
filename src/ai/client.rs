//! Azure `OpenAI` chat-completions client
//!
//! Issues a single non-streaming chat-completions request per call against a
//! deployment of an Azure `OpenAI` resource.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, ChatCompletionRequest};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::completer::ChatCompleter;
use crate::core::config::AppConfig;
use crate::core::models::{ApiErrorBody, ChatCompletionsResponse};
use crate::errors::CompletionError;

/// Upper bound on one round trip, matching the hosted-function HTTP ceiling.
const REQUEST_TIMEOUT_SECS: u64 = 230;

pub struct AzureOpenAiClient {
    http: Client,
    api_key: String,
    url: String,
    api_version: String,
    model_name: String,
}

impl AzureOpenAiClient {
    /// Builds the client and its connection pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (for example when the TLS backend fails to initialise).
    pub fn new(config: &AppConfig) -> Result<Self, CompletionError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CompletionError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.openai_key.clone(),
            url: chat_completions_url(&config.openai_endpoint, &config.openai_model),
            api_version: config.openai_api_version.clone(),
            model_name: config.openai_model.clone(),
        })
    }
}

#[async_trait]
impl ChatCompleter for AzureOpenAiClient {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionMessage>,
    ) -> Result<Vec<String>, CompletionError> {
        #[cfg(feature = "debug-logs")]
        info!("Using chat prompt:\n{:?}", messages);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting chat completion with {} messages from {}",
            messages.len(),
            self.model_name
        );

        let request = ChatCompletionRequest::new(self.model_name.clone(), messages);

        let response = self
            .http
            .post(&self.url)
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: api_error_message(&error_text),
            });
        }

        let body = response.text().await?;
        let parsed: ChatCompletionsResponse = serde_json::from_str(&body)?;
        debug!("Received {} choices", parsed.choices.len());

        Ok(parsed.into_texts())
    }
}

/// `{endpoint}/openai/deployments/{model}/chat/completions`, tolerating a
/// trailing slash on the endpoint.
#[must_use]
pub fn chat_completions_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions",
        endpoint.trim_end_matches('/'),
        model
    )
}

/// Pulls `error.message` out of an API error body, falling back to the raw
/// text when the body is not the documented envelope.
#[must_use]
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.to_string())
}
