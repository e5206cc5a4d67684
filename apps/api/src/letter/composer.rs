//! Letter composition — merges the extracted resume and job texts into the
//! fixed prompt and makes the single generation call.

use tracing::debug;

use crate::errors::AppError;
use crate::letter::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Substitutes both texts into the fixed letter template.
pub fn build_prompt(resume_text: &str, job_text: &str) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_text}", job_text)
}

/// Generates the cover letter and returns the service's response verbatim.
pub async fn compose_letter(
    llm: &LlmClient,
    resume_text: &str,
    job_text: &str,
) -> Result<String, AppError> {
    let prompt = build_prompt(resume_text, job_text);
    debug!("Composed letter prompt: {} chars", prompt.len());

    let response = llm
        .call(&prompt, COVER_LETTER_SYSTEM)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let letter = response
        .text()
        .ok_or(LlmError::EmptyContent)
        .map_err(|e| AppError::Generation(e.to_string()))?;

    Ok(letter.to_owned())
}
