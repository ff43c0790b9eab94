use serde::Deserialize;

/// The subset of a chat-completions response this service reads.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionsResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    // Absent when a content filter stopped the choice.
    #[serde(default)]
    pub message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

impl ChatChoice {
    #[must_use]
    pub fn text(&self) -> &str {
        self.message
            .as_ref()
            .and_then(|m| m.content.as_deref())
            .unwrap_or("")
    }
}

impl ChatCompletionsResponse {
    /// Choice texts in the order the service listed them.
    #[must_use]
    pub fn into_texts(self) -> Vec<String> {
        self.choices.iter().map(|c| c.text().to_string()).collect()
    }
}
