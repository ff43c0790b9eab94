use thiserror::Error;

/// Startup configuration problems. Any of these makes every request fail
/// with a server error until the process is reconfigured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Failures of the outbound chat-completion call.
///
/// The display text is the bare upstream message; callers add their own
/// prefix when surfacing it.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    Http(String),

    #[error("Status code {status}, {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for CompletionError {
    fn from(error: reqwest::Error) -> Self {
        let message = error_chain_message(&error, error.is_timeout());
        if error.is_decode() {
            CompletionError::Decode(message)
        } else {
            CompletionError::Http(message)
        }
    }
}

/// Joins an error with every cause in its `source()` chain, so transport
/// failures keep the underlying reason (refused, timed out, DNS).
#[must_use]
pub fn error_chain_message(error: &dyn std::error::Error, timed_out: bool) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    if timed_out && !message.contains("timed out") {
        message.push_str(": operation timed out");
    }
    message
}

impl From<serde_json::Error> for CompletionError {
    fn from(error: serde_json::Error) -> Self {
        CompletionError::Decode(error.to_string())
    }
}
