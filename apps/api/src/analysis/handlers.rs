//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::analysis::catalog::{catalog, Catalog};
use crate::analysis::models::{AnalysisOutcome, StoredAnalysis};
use crate::analysis::sanitize::{prepare_submission, MAX_CONTENT_BYTES};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

const UPLOAD_TOO_LARGE: &str = "Please upload a file smaller than 5MB";

#[derive(Debug, Deserialize)]
pub struct SubmitAnalysisRequest {
    pub content: String,
    pub job_role: String,
    pub location: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Analyzes plain-text CV content sent as JSON.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnalysisRequest>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let outcome = run_analysis(
        &state,
        &request.content,
        &request.job_role,
        &request.location,
    )
    .await?;
    Ok(Json(outcome))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `file` (UTF-8 text), `job_role`, `location`.
/// The file is read as-is; no document format is parsed.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let mut content: Option<String> = None;
    let mut job_role = String::new();
    let mut location = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Invalid multipart body"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Failed to read file"))?;
                if bytes.len() > MAX_CONTENT_BYTES {
                    return Err(AppError::PayloadTooLarge(UPLOAD_TOO_LARGE.to_string()));
                }
                let text = String::from_utf8(bytes.to_vec()).map_err(|_| {
                    AppError::Validation("CV file must be UTF-8 plain text".to_string())
                })?;
                content = Some(text);
            }
            "job_role" | "location" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, &format!("Invalid field '{name}'")))?;
                if name == "job_role" {
                    job_role = value;
                } else {
                    location = value;
                }
            }
            _ => {}
        }
    }

    let content = content.unwrap_or_default();
    let outcome = run_analysis(&state, &content, &job_role, &location).await?;
    Ok(Json(outcome))
}

/// A body cut off by the request size limit is a too-large upload, not a malformed one.
fn multipart_error(error: MultipartError, context: &str) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(UPLOAD_TOO_LARGE.to_string())
    } else {
        AppError::Validation(format!("{context}: {error}"))
    }
}

/// GET /api/v1/analysis/latest
///
/// Returns the most recent successful analysis, as the dashboard reads it.
pub async fn handle_latest(
    State(state): State<AppState>,
) -> Result<Json<StoredAnalysis>, AppError> {
    let latest = state
        .store
        .load_latest()
        .await?
        .ok_or_else(|| AppError::NotFound("No analysis results found".to_string()))?;
    Ok(Json(latest))
}

/// GET /api/v1/catalog
pub async fn handle_catalog() -> Json<Catalog> {
    Json(catalog())
}

/// Shared pipeline: validate + sanitize → analyze → persist on success.
/// A failure outcome becomes `AppError::Analysis` and is never persisted.
async fn run_analysis(
    state: &AppState,
    raw_content: &str,
    job_role: &str,
    location: &str,
) -> Result<AnalysisOutcome, AppError> {
    let content = prepare_submission(raw_content, job_role, location)?;
    let job_role = job_role.trim();
    let location = location.trim();

    match state.analyzer.analyze(&content, job_role).await {
        AnalysisOutcome::Success { analysis } => {
            let record = StoredAnalysis {
                job_role: job_role.to_string(),
                location: location.to_string(),
                analyzed_at: Utc::now(),
                analysis,
            };
            state.store.save_latest(&record).await?;
            Ok(AnalysisOutcome::Success {
                analysis: record.analysis,
            })
        }
        AnalysisOutcome::Failure { message, cause } => {
            Err(AppError::Analysis { message, cause })
        }
    }
}
