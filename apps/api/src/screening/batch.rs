//! Batch screening: `uploads -> reports`, one report per upload in upload order.
//!
//! Documents share nothing but the read-only criteria, so a failure in one
//! never stops the rest of the batch.

use serde::Serialize;
use tracing::{info, warn};

use crate::models::document::{Document, DocumentKind};
use crate::screening::criteria::EligibilityCriteria;
use crate::screening::evaluator::{evaluate, EligibilityResult};
use crate::screening::extractor::TextExtractor;

/// One uploaded file, after kind detection.
#[derive(Debug, Clone)]
pub enum Upload {
    Document(Document),
    /// No declared kind and nothing in the content type or extension to go on.
    Unsupported {
        file_name: String,
        content_type: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningStatus {
    Screened,
    Failed,
}

/// Per-document outcome returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    pub status: ScreeningStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EligibilityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScreeningReport {
    fn screened(document: &Document, extracted_text: String, result: EligibilityResult) -> Self {
        ScreeningReport {
            file_name: document.file_name.clone(),
            kind: Some(document.kind),
            status: ScreeningStatus::Screened,
            eligible: Some(result.is_eligible()),
            summary: Some(result.summary()),
            extracted_text: Some(extracted_text),
            result: Some(result),
            error: None,
        }
    }

    fn failed(file_name: String, kind: Option<DocumentKind>, error: String) -> Self {
        ScreeningReport {
            file_name,
            kind,
            status: ScreeningStatus::Failed,
            extracted_text: None,
            result: None,
            eligible: None,
            summary: None,
            error: Some(error),
        }
    }
}

/// Extracts and evaluates a single document.
pub fn screen_document(
    extractor: &dyn TextExtractor,
    document: &Document,
    criteria: &EligibilityCriteria,
) -> ScreeningReport {
    match extractor.extract(document) {
        Ok(text) => {
            let result = evaluate(&text, criteria);
            info!(
                file_name = %document.file_name,
                kind = %document.kind,
                education_met = result.education_met,
                skills_met = result.skills_met,
                missing = result.missing_skills.len(),
                "Resume screened"
            );
            ScreeningReport::screened(document, text, result)
        }
        Err(e) => {
            warn!(file_name = %document.file_name, "Resume could not be read: {e}");
            ScreeningReport::failed(document.file_name.clone(), Some(document.kind), e.to_string())
        }
    }
}

/// Screens every upload independently. Blocking; run it off the async runtime.
pub fn screen_batch(
    extractor: &dyn TextExtractor,
    uploads: Vec<Upload>,
    criteria: &EligibilityCriteria,
) -> Vec<ScreeningReport> {
    uploads
        .into_iter()
        .map(|upload| match upload {
            Upload::Document(document) => screen_document(extractor, &document, criteria),
            Upload::Unsupported {
                file_name,
                content_type,
            } => {
                warn!(%file_name, ?content_type, "Unsupported resume format");
                let error = format!(
                    "Unsupported document type{}; expected a PDF or plain-text file",
                    content_type
                        .map(|ct| format!(" '{ct}'"))
                        .unwrap_or_default()
                );
                ScreeningReport::failed(file_name, None, error)
            }
        })
        .collect()
}
