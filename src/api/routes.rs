use axum::{
    routing::post,
    Router,
    extract::{Json, State, rejection::JsonRejection},
    http::Uri,
    response::IntoResponse,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::api::models::SummarizeRequest;
use crate::api::response;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(summarize_handler).get(usage_handler))
        .route("/api/summarize", post(summarize_handler).get(usage_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn summarize_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let start_time = std::time::Instant::now();

    let result = async {
        let summarizer = state.summarizer()?;
        let Json(req) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;
        summarizer.summarize(req.url.as_deref()).await
    }
    .await;

    match result {
        Ok(verdict) => {
            info!(pass = verdict.pass, elapsed = ?start_time.elapsed(), "Request processed");
            Ok(response::success(verdict))
        }
        Err(err) => {
            error!(status = %err.status(), error = %err, elapsed = ?start_time.elapsed(), "Request failed");
            Err(err)
        }
    }
}

async fn usage_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    response::method_not_allowed(uri.path(), state.config.server_addr.port())
}
