//! The text-enhancement request handler, independent of the hosting runtime.

use tracing::{error, info, warn};

use super::helpers::TextResponse;
use crate::ai::{AzureOpenAiClient, ChatCompleter, user_turn};
use crate::core::config::AppConfig;
use crate::errors::{CompletionError, ConfigError};

pub const CONFIG_MISSING_MESSAGE: &str = "Environment variables for OpenAI are not set.";
pub const BODY_MISSING_MESSAGE: &str = "Please pass a text in the request body";
pub const PROCESSING_ERROR_PREFIX: &str = "Error processing request: ";

/// Forwards request bodies to a chat-completion service.
///
/// Built once per process. When configuration was incomplete at startup the
/// handler keeps the error and answers every request with a server error
/// without touching the upstream.
pub struct EnhanceHandler<C> {
    completer: Result<C, ConfigError>,
}

impl EnhanceHandler<AzureOpenAiClient> {
    /// Wires the production Azure client from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be built. Missing
    /// configuration is not an error here; it is reported per request.
    pub fn from_config(config: Result<AppConfig, ConfigError>) -> Result<Self, CompletionError> {
        let completer = match config {
            Ok(config) => Ok(AzureOpenAiClient::new(&config)?),
            Err(e) => Err(e),
        };
        Ok(Self::new(completer))
    }
}

impl<C: ChatCompleter> EnhanceHandler<C> {
    #[must_use]
    pub fn new(completer: Result<C, ConfigError>) -> Self {
        Self { completer }
    }

    #[cfg(test)]
    fn is_configured(&self) -> bool {
        self.completer.is_ok()
    }

    pub async fn handle(&self, body: Option<&str>) -> TextResponse {
        let completer = match &self.completer {
            Ok(completer) => completer,
            Err(e) => {
                warn!("Rejecting request, OpenAI configuration incomplete: {}", e);
                return TextResponse::bare(500, CONFIG_MISSING_MESSAGE);
            }
        };

        let Some(text) = body.filter(|b| !b.is_empty()) else {
            return TextResponse::plain(400, BODY_MISSING_MESSAGE);
        };

        match completer.complete(user_turn(text)).await {
            Ok(choices) => {
                let mut output = String::new();
                for (index, choice) in choices.iter().enumerate() {
                    info!(choice = index, "Message: {}", choice);
                    output.push_str(choice);
                }
                TextResponse::plain(200, output)
            }
            Err(e) => {
                let message = format!("{PROCESSING_ERROR_PREFIX}{e}");
                error!("{}", message);
                TextResponse::plain(500, message)
            }
        }
    }
}
