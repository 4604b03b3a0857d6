//! HTTP handlers for NDA review

use axum::extract::{Multipart, Query};
use axum::routing::{get, post};
use axum::{Json, Router};
use doc_extract::extract_text;
use review_engine::{ReviewEngine, ReviewStrategy};
use serde::{Deserialize, Serialize};
use shared_types::{NdaDocument, ReviewStatus};
use tracing::info;

use crate::error::ServerError;

/// How much of the extracted text is echoed back for preview.
const PREVIEW_CHARS: usize = 1000;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/review", post(handle_review))
}

#[derive(Debug, Deserialize)]
pub struct ReviewParams {
    #[serde(default)]
    pub strategy: ReviewStrategy,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub status: ReviewStatus,
    pub suggestions: Vec<String>,
    pub summary: String,
    pub preview: String,
}

pub async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Accept a multipart upload (field `file`), extract its text, and run the
/// requested review strategy over it.
pub async fn handle_review(
    Query(params): Query<ReviewParams>,
    mut multipart: Multipart,
) -> Result<Json<ReviewResponse>, ServerError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let mime_type = field
            .content_type()
            .ok_or_else(|| {
                ServerError::InvalidRequest("file part is missing a content type".to_string())
            })?
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::InvalidRequest(e.to_string()))?;

        info!(
            "Reviewing {} ({}, {} bytes, strategy {:?})",
            filename,
            mime_type,
            bytes.len(),
            params.strategy
        );

        let text = extract_text(&bytes, &mime_type)?;
        let document = NdaDocument {
            id: uuid::Uuid::new_v4().to_string(),
            filename,
            mime_type,
            text,
            created_at: chrono::Utc::now().timestamp() as u64,
        };

        let report = ReviewEngine::new(params.strategy).review(&document);
        let preview: String = document.text.chars().take(PREVIEW_CHARS).collect();

        return Ok(Json(ReviewResponse {
            status: report.status,
            suggestions: report.suggestions(),
            summary: report.summary(),
            preview,
        }));
    }

    Err(ServerError::InvalidRequest(
        "multipart field 'file' is required".to_string(),
    ))
}
