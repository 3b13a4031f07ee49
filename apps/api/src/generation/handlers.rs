//! Axum route handler for resume generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::documents::handlers::{clean_title, default_title, parse_template, require_user_id};
use crate::documents::NewDocument;
use crate::errors::AppError;
use crate::generation::generator::{generate_resume, validate_career_text};
use crate::models::resume::ResumeContent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free-form career notes.
    pub text: String,
    /// Required when `save` is set.
    pub user_id: Option<String>,
    #[serde(default)]
    pub save: bool,
    pub title: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub resume: ResumeContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Uuid>,
}

/// POST /api/v1/resumes/generate
///
/// Career notes → LLM → repaired, fitted resume. With `save: true` the result is
/// also stored as a document, `_layout` included.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    validate_career_text(&request.text)?;

    // Validate the save options before spending a model call.
    let save = if request.save {
        let user_id = require_user_id(request.user_id.as_deref().unwrap_or(""))?.to_string();
        let template = parse_template(request.template.as_deref())?.unwrap_or_default();
        let title = clean_title(request.title.as_deref())?;
        Some((user_id, template, title))
    } else {
        None
    };

    let resume = generate_resume(state.llm.as_ref(), &request.text).await?;

    let document_id = match save {
        Some((user_id, template, title)) => {
            let data = serde_json::to_value(&resume).map_err(anyhow::Error::from)?;
            let title = title.unwrap_or_else(|| default_title(&data));
            let row = state
                .documents
                .create(NewDocument {
                    user_id,
                    title,
                    template,
                    data,
                })
                .await?;
            Some(row.id)
        }
        None => None,
    };

    Ok(Json(GenerateResponse {
        resume,
        document_id,
    }))
}
