pub mod auth;
pub mod content;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is mounted separately at
/// the root by the router builder).
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
///
/// /content                    list (token), create (admin, multipart)
/// /content/{id}               update (admin, multipart), delete (admin)
/// /content/{id}/submit        status := In Review (admin)
/// /content/{id}/approve       status := Approved (admin)
/// /content/{id}/reject        status := Draft (admin)
/// /content/{id}/publish       status := Published (admin)
/// /content/{id}/versions      version history (token)
///
/// /public/content             published-only listing (public)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/content", content::router())
        .nest("/public", public::router())
}
