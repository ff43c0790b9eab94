/// enhance-text - a serverless endpoint that sends caller text to Azure `OpenAI`
/// and returns the generated completion as plain text.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (via `lambda_runtime`) behind API Gateway or a Function URL
/// - Azure `OpenAI` chat completions over reqwest, with openai-api-rs request types
/// - Tokio for async runtime
///
/// A request is answered with one of four outcomes: 500 when configuration
/// is missing, 400 for an empty body, 200 with the concatenated choices, or
/// 500 with the upstream error message.
///
/// # Example
///
/// ```no_run
/// use enhance_text::api::EnhanceHandler;
/// use enhance_text::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     enhance_text::setup_logging();
///
///     let config = AppConfig {
///         openai_key: "dummy_key".to_string(),
///         openai_endpoint: "https://example.openai.azure.com".to_string(),
///         openai_model: "gpt-4".to_string(),
///         openai_api_version: "2024-02-01".to_string(),
///     };
///
///     let handler = EnhanceHandler::from_config(Ok(config))?;
///     let response = handler.handle(Some("Make this sentence sound better.")).await;
///     println!("{} {}", response.status_code, response.body);
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Calling it again after a subscriber is installed is a no-op.
///
/// # Example
///
/// ```
/// enhance_text::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
