//! Axum route handlers for saved resumes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::documents::{DocumentUpdate, NewDocument};
use crate::errors::AppError;
use crate::layout::fit_resume;
use crate::models::resume::{ResumeContent, ResumeTemplate, SavedResumeRow};
use crate::state::AppState;

const MAX_TITLE_CHARS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveDocumentRequest {
    pub user_id: String,
    pub title: Option<String>,
    pub template: Option<String>,
    pub content: Value,
    /// Re-run the layout engine on `content` before storing it.
    #[serde(default)]
    pub refit: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Shared validation
// ────────────────────────────────────────────────────────────────────────────

pub(crate) fn require_user_id(user_id: &str) -> Result<&str, AppError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::Validation("user_id cannot be empty".to_string()));
    }
    Ok(user_id)
}

pub(crate) fn parse_template(template: Option<&str>) -> Result<Option<ResumeTemplate>, AppError> {
    template
        .map(|t| t.parse::<ResumeTemplate>().map_err(AppError::Validation))
        .transpose()
}

pub(crate) fn clean_title(title: Option<&str>) -> Result<Option<String>, AppError> {
    let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(Some(title.to_string()))
}

/// "{name} — Resume", or "Untitled resume" when the name is blank.
pub(crate) fn default_title(content: &Value) -> String {
    match content.get("name").and_then(Value::as_str).map(str::trim) {
        Some(name) if !name.is_empty() => format!("{name} — Resume"),
        _ => "Untitled resume".to_string(),
    }
}

/// Validates the payload shape and optionally re-fits it.
fn prepare_content(content: Value, refit: bool) -> Result<Value, AppError> {
    if !content.is_object() {
        return Err(AppError::Validation("content must be a JSON object".to_string()));
    }
    if !refit {
        return Ok(content);
    }
    let parsed: ResumeContent = serde_json::from_value(content)
        .map_err(|e| AppError::Validation(format!("content is not a resume: {e}")))?;
    Ok(serde_json::to_value(fit_resume(&parsed)).map_err(anyhow::Error::from)?)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents
pub async fn handle_create_document(
    State(state): State<AppState>,
    Json(req): Json<SaveDocumentRequest>,
) -> Result<(StatusCode, Json<SavedResumeRow>), AppError> {
    let user_id = require_user_id(&req.user_id)?.to_string();
    let template = parse_template(req.template.as_deref())?.unwrap_or_default();
    let title = clean_title(req.title.as_deref())?;
    let data = prepare_content(req.content, req.refit)?;
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

    tracing::info!(document_id = %row.id, "Saved resume document");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/documents?user_id=
pub async fn handle_list_documents(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<SavedResumeRow>>, AppError> {
    let user_id = require_user_id(&params.user_id)?;
    Ok(Json(state.documents.list(user_id).await?))
}

/// GET /api/v1/documents/:id?user_id=
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SavedResumeRow>, AppError> {
    let user_id = require_user_id(&params.user_id)?;
    state
        .documents
        .get(user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))
}

/// PUT /api/v1/documents/:id
pub async fn handle_update_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SaveDocumentRequest>,
) -> Result<Json<SavedResumeRow>, AppError> {
    let user_id = require_user_id(&req.user_id)?.to_string();
    let update = DocumentUpdate {
        title: clean_title(req.title.as_deref())?,
        template: parse_template(req.template.as_deref())?,
        data: prepare_content(req.content, req.refit)?,
    };

    state
        .documents
        .update(&user_id, id, update)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))
}

/// DELETE /api/v1/documents/:id?user_id=
pub async fn handle_delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user_id(&params.user_id)?;
    if state.documents.delete(user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Document {id} not found")))
    }
}
