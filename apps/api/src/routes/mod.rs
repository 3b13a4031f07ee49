pub mod health;
pub mod layout;

use axum::{
    routing::{get, post},
    Router,
};

use crate::documents::handlers as documents;
use crate::generation::handlers as generation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout engine
        .route("/api/v1/layout/fit", post(layout::handle_fit))
        // Generation
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        // Saved documents
        .route(
            "/api/v1/documents",
            post(documents::handle_create_document).get(documents::handle_list_documents),
        )
        .route(
            "/api/v1/documents/:id",
            get(documents::handle_get_document)
                .put(documents::handle_update_document)
                .delete(documents::handle_delete_document),
        )
        .with_state(state)
}
