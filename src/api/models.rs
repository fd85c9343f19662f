use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub pass: bool,
    /// Comma separated keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_tags: Option<String>,
}

/// Body returned when the endpoint is hit with the wrong method.
#[derive(Debug, Serialize)]
pub struct UsageResponse {
    pub error: String,
    pub message: String,
    pub usage: Usage,
}

#[derive(Debug, Serialize)]
pub struct Usage {
    pub method: String,
    pub url: String,
    pub body: UsageBody,
    pub example: String,
}

#[derive(Debug, Serialize)]
pub struct UsageBody {
    pub url: String,
}
