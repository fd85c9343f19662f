use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

use crate::api::models::{Usage, UsageBody, UsageResponse};

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn method_not_allowed(path: &str, port: u16) -> (StatusCode, Json<UsageResponse>) {
    let example = format!(
        "curl -X POST http://localhost:{}{} -H \"Content-Type: application/json\" -d '{{\"url\": \"https://example.com\"}}'",
        port, path
    );

    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(UsageResponse {
            error: "Method not allowed".to_string(),
            message: "This endpoint only accepts POST requests".to_string(),
            usage: Usage {
                method: "POST".to_string(),
                url: path.to_string(),
                body: UsageBody {
                    url: "https://example.com".to_string(),
                },
                example,
            },
        }),
    )
}
