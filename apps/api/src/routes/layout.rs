use axum::Json;

use crate::layout::fit_resume;
use crate::models::resume::ResumeContent;

/// POST /api/v1/layout/fit
///
/// Fits arbitrary (possibly partial) resume content to one page and returns it
/// with fresh `_layout` hints. Any `_layout` in the request is ignored.
pub async fn handle_fit(Json(content): Json<ResumeContent>) -> Json<ResumeContent> {
    Json(fit_resume(&content))
}
