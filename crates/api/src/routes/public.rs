//! Route definitions for the unauthenticated public surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public routes mounted at `/public`.
pub fn router() -> Router<AppState> {
    Router::new().route("/content", get(public::list_published))
}
