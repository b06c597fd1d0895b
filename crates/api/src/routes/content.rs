//! Route definitions for the content resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Content routes mounted at `/content`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create (multipart)
/// PUT    /{id}              -> update (multipart)
/// DELETE /{id}              -> delete
/// POST   /{id}/submit       -> submit
/// POST   /{id}/approve      -> approve
/// POST   /{id}/reject       -> reject
/// POST   /{id}/publish      -> publish
/// GET    /{id}/versions     -> versions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list).post(content::create))
        .route("/{id}", put(content::update).delete(content::delete))
        .route("/{id}/submit", post(content::submit))
        .route("/{id}/approve", post(content::approve))
        .route("/{id}/reject", post(content::reject))
        .route("/{id}/publish", post(content::publish))
        .route("/{id}/versions", get(content::versions))
}
