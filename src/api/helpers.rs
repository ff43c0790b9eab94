//! Response builders for API Gateway proxy results.

use serde_json::{Value, json};

pub const TEXT_PLAIN: &str = "text/plain";

/// A status, an optional content type and a text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResponse {
    pub status_code: u16,
    pub content_type: Option<&'static str>,
    pub body: String,
}

impl TextResponse {
    /// A `text/plain` response.
    #[must_use]
    pub fn plain(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            content_type: Some(TEXT_PLAIN),
            body: body.into(),
        }
    }

    /// A response that leaves the content type to the gateway.
    #[must_use]
    pub fn bare(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            content_type: None,
            body: body.into(),
        }
    }

    /// Renders the API Gateway proxy result the Lambda runtime returns.
    #[must_use]
    pub fn to_proxy_result(&self) -> Value {
        match self.content_type {
            Some(content_type) => json!({
                "statusCode": self.status_code,
                "headers": { "Content-Type": content_type },
                "body": self.body
            }),
            None => json!({
                "statusCode": self.status_code,
                "body": self.body
            }),
        }
    }
}
