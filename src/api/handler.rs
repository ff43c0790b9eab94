//! Lambda entry point: adapts API Gateway proxy events to `EnhanceHandler`.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use super::enhance::EnhanceHandler;
use super::parsing;
use crate::ai::ChatCompleter;

/// Handles one `enhanceText` invocation.
///
/// GET and POST are treated the same; the method is only logged.
///
/// # Errors
///
/// Never fails at the runtime boundary: every outcome, including upstream
/// failures, is rendered as an HTTP response.
#[tracing::instrument(level = "info", skip(handler, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler<C: ChatCompleter>(
    handler: &EnhanceHandler<C>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let payload = &event.payload;
    let method = parsing::request_method(payload).unwrap_or("UNKNOWN");
    let xray = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
        .unwrap_or("");

    info!(method = %method, xray_trace_id = %xray, "HTTP trigger processed a request.");

    let body = parsing::request_body(payload);
    let response = handler.handle(body.as_deref()).await;

    Ok(response.to_proxy_result())
}
