//! Unauthenticated, read-only listing of published content.

use axum::extract::{Query, State};
use axum::Json;
use pressroom_db::models::content::{Content, ContentQuery};
use pressroom_db::repositories::ContentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /public/content
///
/// Same filter and ordering semantics as the admin listing, restricted
/// to `Published` items -- no other status is ever returned, whatever
/// the filter combination.
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> AppResult<Json<Vec<Content>>> {
    let items = ContentRepo::search_published(&state.pool, &params).await?;
    Ok(Json(items))
}
