use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::document::{Document, DocumentKind};
use crate::screening::batch::{screen_batch, ScreeningReport, Upload};
use crate::screening::criteria::EligibilityCriteria;
use crate::screening::evaluator::{evaluate, EligibilityResult};
use crate::state::AppState;

/// Text part that declares the kind of the file parts following it.
const KIND_FIELD: &str = "kind";

#[derive(Serialize)]
pub struct ScreenResponse {
    pub criteria: EligibilityCriteria,
    pub reports: Vec<ScreeningReport>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    #[serde(flatten)]
    pub result: EligibilityResult,
    pub eligible: bool,
    pub summary: String,
}

/// GET /api/v1/criteria
pub async fn handle_get_criteria(State(state): State<AppState>) -> Json<EligibilityCriteria> {
    Json(state.criteria.as_ref().clone())
}

/// POST /api/v1/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(req): Json<EvaluateRequest>,
) -> Json<EvaluateResponse> {
    let result = evaluate(&req.text, &state.criteria);
    Json(EvaluateResponse {
        eligible: result.is_eligible(),
        summary: result.summary(),
        result,
    })
}

/// POST /api/v1/screen
///
/// Multipart upload of one or more resumes. Unreadable or unsupported files
/// come back as failed reports; the rest of the batch is still screened.
pub async fn handle_screen(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreenResponse>, AppError> {
    let upload_limit = state.config.max_upload_bytes;
    let to_app_error = |e: MultipartError| multipart_error(e, upload_limit);
    let mut declared_kind: Option<DocumentKind> = None;
    let mut uploads = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(to_app_error)? {
        let field_name = field.name().map(str::to_owned);
        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_owned);

        let Some(file_name) = file_name else {
            if field_name.as_deref() == Some(KIND_FIELD) {
                let value = field.text().await.map_err(to_app_error)?;
                let kind = DocumentKind::parse(&value).ok_or_else(|| {
                    AppError::Validation(format!(
                        "Unknown document kind '{}'; expected 'pdf' or 'plain-text'",
                        value.trim()
                    ))
                })?;
                declared_kind = Some(kind);
            }
            continue;
        };

        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(to_app_error)?;

        let kind =
            declared_kind.or_else(|| DocumentKind::detect(content_type.as_deref(), &file_name));
        uploads.push(match kind {
            Some(kind) => Upload::Document(Document::new(file_name, kind, bytes)),
            None => Upload::Unsupported {
                file_name,
                content_type,
            },
        });
    }

    if uploads.is_empty() {
        return Err(AppError::Validation(
            "No resume files were uploaded".to_string(),
        ));
    }

    tracing::info!("Screening {} uploaded resume(s)", uploads.len());

    let extractor = state.extractor.clone();
    let criteria = state.criteria.clone();
    let reports =
        tokio::task::spawn_blocking(move || screen_batch(extractor.as_ref(), uploads, &criteria))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Screening task failed: {e}")))?;

    Ok(Json(ScreenResponse {
        criteria: state.criteria.as_ref().clone(),
        reports,
    }))
}

fn multipart_error(e: MultipartError, upload_limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds the {upload_limit} byte limit"))
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}
