use anyhow::Context;
use enhance_text::api::{EnhanceHandler, function_handler};
use enhance_text::core::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    enhance_text::setup_logging();

    let config = AppConfig::from_env();
    if let Err(e) = &config {
        error!("OpenAI configuration incomplete, every request will fail: {}", e);
    }

    let handler = EnhanceHandler::from_config(config).context("Failed to initialise OpenAI client")?;
    let handler = &handler;

    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        function_handler(handler, event).await
    }))
    .await
}
