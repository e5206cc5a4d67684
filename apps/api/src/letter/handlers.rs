//! Axum route handler for the letter generation pipeline.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, DocumentKind, UploadedDocument};
use crate::fetch::fetch_job_page;
use crate::letter::composer::compose_letter;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateLetterResponse {
    pub cover_letter: String,
}

/// POST /api/v1/letters
///
/// Full pipeline: resume extraction → job page fetch → letter generation.
/// Multipart parts: `resume` (PDF or plain-text file) and `job_url` (text).
/// The first failing step halts the run; nothing is cached or reused across
/// runs.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateLetterResponse>, AppError> {
    let mut resume: Option<UploadedDocument> = None;
    let mut job_url: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let kind = DocumentKind::from_content_type(field.content_type());
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("failed to read resume upload: {e}"))
                })?;
                resume = Some(UploadedDocument { kind, bytes });
            }
            "job_url" => {
                let url = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read job_url: {e}")))?;
                job_url = Some(url);
            }
            // Unknown parts are ignored
            _ => {}
        }
    }

    // Both inputs must be present before any pipeline step runs. The shell
    // page already ignores the trigger client-side; this is the server-side
    // backstop.
    let resume =
        resume.ok_or_else(|| AppError::Validation("missing 'resume' part".to_string()))?;
    let job_url = job_url
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| AppError::Validation("missing 'job_url' part".to_string()))?;

    info!(
        "Extracting resume text ({:?}, {} bytes)",
        resume.kind,
        resume.bytes.len()
    );
    let resume_text = extract_text(&resume)?;

    info!("Fetching job posting: {job_url}");
    let job_text = fetch_job_page(&state.http, &job_url).await?;

    info!("Generating cover letter");
    let cover_letter = compose_letter(&state.llm, &resume_text, &job_text).await?;

    Ok(Json(GenerateLetterResponse { cover_letter }))
}
