//! AWS Lambda handler for TFSA/RRSP comparisons
//!
//! Accepts the savings inputs as a JSON body (numbers or form strings) and
//! returns the comparison report. Supports Lambda Function URLs for direct
//! HTTP access.

use aws_lambda_events::event::lambda_function_urls::{LambdaFunctionUrlRequest, LambdaFunctionUrlResponse};
use aws_lambda_events::http::{header, HeaderMap, HeaderValue};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use savings_calculator::{Comparison, ComparisonReport, RawSavingsInputs, SavingsError, Settings};
use serde_json::{json, Value};

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    headers
}

fn response(status_code: i64, body: Option<String>) -> LambdaFunctionUrlResponse {
    LambdaFunctionUrlResponse {
        status_code,
        headers: cors_headers(),
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_kind(err: &SavingsError) -> &'static str {
    match err {
        SavingsError::InvalidInput { .. } => "invalid_input",
        SavingsError::DegenerateRate { .. } => "degenerate_rate",
        SavingsError::AbstractAccount { .. } => "abstract_account",
        SavingsError::Csv(_) | SavingsError::Io(_) => "internal",
    }
}

/// Evaluate a request body into a status code and JSON payload
fn evaluate(body: &str, settings: &Settings) -> (i64, Value) {
    let raw: RawSavingsInputs = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return (400, json!({ "error": format!("Invalid JSON: {}", e) })),
    };

    let result = raw
        .coerce(settings)
        .and_then(|inputs| Comparison::new(&inputs).map(|comparison| (inputs, comparison)));

    match result {
        Ok((inputs, comparison)) => match serde_json::to_value(ComparisonReport::new(&inputs, &comparison)) {
            Ok(report) => (200, report),
            Err(e) => (500, json!({ "error": e.to_string() })),
        },
        Err(e) => {
            let status = if e.is_input_error() { 400 } else { 500 };
            (status, json!({ "error": e.to_string(), "kind": error_kind(&e) }))
        }
    }
}

/// Lambda handler function
async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
    settings: Settings,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, None));
    }

    if request.is_base64_encoded {
        return Ok(response(
            400,
            Some(json!({ "error": "Base64-encoded bodies are not supported" }).to_string()),
        ));
    }

    let body = request.body.unwrap_or_else(|| "{}".to_string());
    let (status, payload) = evaluate(&body, &settings);
    if status == 200 {
        info!("Comparison served");
    } else {
        warn!("Request rejected with {}: {}", status, payload);
    }

    Ok(response(status, Some(serde_json::to_string(&payload)?)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let settings = Settings::from_env();
    run(service_fn(move |event| handler(event, settings))).await
}
