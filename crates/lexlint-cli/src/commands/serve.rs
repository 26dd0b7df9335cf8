//! HTTP wrapper around the analyzer.
//!
//! A thin review endpoint: it accepts a file path, runs the same
//! analyzer as `lexlint check`, and returns the suggestions as JSON.
//! All failure reporting for missing or unreadable files lives here,
//! outside the core.

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use lexlint_core::{Analyzer, Suggestion};
use lexlint_rules::default_rules;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

/// Shared server state.
struct AppState {
    analyzer: Analyzer,
}

/// Query parameters for the review endpoint.
#[derive(Debug, Deserialize)]
struct ReviewParams {
    /// Path of the file to analyze.
    path: String,
}

/// Review response body.
#[derive(Debug, Serialize)]
struct ReviewResponse {
    /// Display name of the analyzed file.
    file: String,
    /// Suggestions, sorted by line.
    suggestions: Vec<Suggestion>,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Runs the serve command.
pub fn run(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(port))
}

async fn serve(port: u16) -> Result<()> {
    let state = Arc::new(AppState {
        analyzer: Analyzer::builder().rules(default_rules()).build(),
    });

    let app = Router::new()
        .route("/health", get(health))
        .route("/review", post(review))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Review server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn review(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewParams>,
) -> Result<Json<ReviewResponse>, (StatusCode, Json<ErrorResponse>)> {
    let path = Path::new(&params.path);
    if !path.is_file() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            format!("File not found: {}", params.path),
        ));
    }

    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error reading file: {e}"),
        )
    })?;

    let report = state.analyzer.analyze(&text);
    let file = path
        .file_name()
        .map_or_else(|| params.path.clone(), |n| n.to_string_lossy().into_owned());

    Ok(Json(ReviewResponse {
        file,
        suggestions: report.suggestions,
    }))
}

fn error(status: StatusCode, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error: message }))
}
