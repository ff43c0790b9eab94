use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::errors::CompletionError;

/// A hosted chat-completion service.
///
/// `complete` sends the given turns and returns every candidate text in the
/// order the service produced them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<ChatCompletionMessage>,
    ) -> Result<Vec<String>, CompletionError>;
}

/// Wraps the caller's text, untouched, as the only user turn.
#[must_use]
pub fn user_turn(text: &str) -> Vec<ChatCompletionMessage> {
    vec![ChatCompletionMessage {
        role: MessageRole::user,
        content: Content::Text(text.to_string()),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }]
}
