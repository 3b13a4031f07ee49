//! Resume generation pipeline.
//!
//! Flow: prompt → LLM → repair JSON → lenient decode → fit to one page.
//! The returned content always carries fresh `_layout` hints.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{RESUME_PROMPT_TEMPLATE, RESUME_SYSTEM};
use crate::generation::repair::repair_json;
use crate::layout::fit_resume;
use crate::llm_client::TextCompletion;
use crate::models::resume::ResumeContent;

/// Upper bound on career notes accepted per request, in characters.
pub const MAX_CAREER_TEXT_CHARS: usize = 20_000;

/// Rejects blank or oversized notes before any model call is made.
pub fn validate_career_text(text: &str) -> Result<&str, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let len = text.chars().count();
    if len > MAX_CAREER_TEXT_CHARS {
        return Err(AppError::Validation(format!(
            "text is {len} characters; the limit is {MAX_CAREER_TEXT_CHARS}"
        )));
    }
    Ok(text)
}

/// Generates a fitted resume from free-form career notes.
pub async fn generate_resume(
    llm: &dyn TextCompletion,
    career_text: &str,
) -> Result<ResumeContent, AppError> {
    let career_text = validate_career_text(career_text)?;
    let prompt = RESUME_PROMPT_TEMPLATE.replace("{career_text}", career_text);

    info!(chars = career_text.len(), "Requesting resume draft");
    let raw = llm
        .complete(&prompt, RESUME_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;

    let value = repair_json(&raw).map_err(|e| {
        warn!(error = %e, "Model output could not be repaired");
        AppError::UnprocessableEntity(format!("The generator returned an unusable resume: {e}"))
    })?;

    let content: ResumeContent = serde_json::from_value(value).map_err(|e| {
        AppError::UnprocessableEntity(format!("The generator returned an unusable resume: {e}"))
    })?;

    let fitted = fit_resume(&content);
    info!(
        experience = fitted.experience.len(),
        achievements = fitted.achievements.len(),
        compact = fitted.layout.as_ref().map(|l| l.compact_mode),
        "Resume draft fitted"
    );

    Ok(fitted)
}
