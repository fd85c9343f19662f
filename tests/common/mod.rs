#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use site_verdict::api::routes::create_router;
use site_verdict::config::Config;
use site_verdict::error::ClientError;
use site_verdict::exa::{ContentResult, ContentSource};
use site_verdict::llm::{ChatModel, Prompt};
use site_verdict::summarizer::Summarizer;
use site_verdict::AppState;

// ---------------------------------------------------------------------------
// Mock content source
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockSource {
    responses: Mutex<Vec<Result<Vec<ContentResult>, ClientError>>>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(self, title: Option<&str>, summary: Option<&str>) -> Self {
        self.responses.lock().unwrap().push(Ok(vec![ContentResult {
            url: None,
            title: title.map(str::to_string),
            summary: summary.map(str::to_string),
        }]));
        self
    }

    pub fn with_empty_results(self) -> Self {
        self.responses.lock().unwrap().push(Ok(Vec::new()));
        self
    }

    pub fn with_error(self, err: ClientError) -> Self {
        self.responses.lock().unwrap().push(Err(err));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ContentSource for MockSource {
    async fn get_contents(&self, url: &str) -> Result<Vec<ContentResult>, ClientError> {
        self.calls.lock().unwrap().push(url.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Vec::new())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// Mock chat model
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockChat {
    responses: Mutex<Vec<Result<String, ClientError>>>,
    calls: Mutex<Vec<Prompt>>,
}

impl MockChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next call
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(reply.into()));
        self
    }

    /// Queue a failure for the next call
    pub fn with_error(self, err: ClientError) -> Self {
        self.responses.lock().unwrap().push(Err(err));
        self
    }

    pub fn calls(&self) -> Vec<Prompt> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for MockChat {
    async fn complete(&self, prompt: &Prompt) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push(prompt.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("Mock AI response".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// App helpers
// ---------------------------------------------------------------------------

pub fn test_config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

pub fn build_test_app(source: Arc<MockSource>, chat: Arc<MockChat>) -> Router {
    let summarizer = Summarizer::new(source, chat);
    create_router(AppState::with_summarizer(test_config(), summarizer))
}

pub fn api_error(status: u16, body: &str) -> ClientError {
    ClientError::Api {
        status,
        body: body.to_string(),
    }
}

pub async fn post_json(app: Router, path: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn expect(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
