//! Handlers for the `/content` resource: listing, CRUD, workflow
//! transitions, and the version history.
//!
//! Create and update share one multipart shape: a `meta` field holding a
//! JSON-encoded metadata string, plus zero or more `files` uploads.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pressroom_core::error::CoreError;
use pressroom_core::metadata::ContentMeta;
use pressroom_core::types::DbId;
use pressroom_core::workflow::WorkflowAction;
use pressroom_db::models::content::{
    Attachment, Content, ContentEdit, ContentQuery, CreateContent,
};
use pressroom_db::models::content_version::ContentVersion;
use pressroom_db::repositories::{ContentRepo, ContentVersionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, RequireAdmin};
use crate::response::SuccessResponse;
use crate::state::AppState;
use crate::uploads;

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

/// Parsed multipart payload shared by create and update.
struct MutationForm {
    meta: ContentMeta,
    files: Vec<(String, Vec<u8>)>,
}

async fn read_mutation_form(mut multipart: Multipart) -> AppResult<MutationForm> {
    let mut meta_raw: Option<String> = None;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "meta" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                meta_raw = Some(text);
            }
            "files" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                files.push((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    // Missing or malformed metadata degrades to an empty patch rather
    // than rejecting the request.
    let meta = ContentMeta::from_json_lenient(meta_raw.as_deref().unwrap_or(""));

    Ok(MutationForm { meta, files })
}

/// Store every uploaded file, preserving submission order.
async fn store_uploads(
    state: &AppState,
    files: &[(String, Vec<u8>)],
) -> AppResult<Vec<Attachment>> {
    let mut attachments = Vec::with_capacity(files.len());
    for (name, data) in files {
        let attachment = uploads::store_upload(&state.config.uploads_dir, name, data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload '{name}': {e}")))?;
        attachments.push(attachment);
    }
    Ok(attachments)
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /content
///
/// Admin listing across all statuses, filtered by exact category,
/// exact subcategory, and free-text title query.
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ContentQuery>,
) -> AppResult<Json<Vec<Content>>> {
    let items = ContentRepo::search(&state.pool, &params).await?;
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /content
///
/// Creates a content item from the multipart form. Unspecified metadata
/// fields default per schema (status defaults to Draft); uploads become
/// the attachment list in submission order. The version-1 snapshot is
/// recorded in the same transaction as the insert.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Content>)> {
    let form = read_mutation_form(multipart).await?;
    let attachments = store_uploads(&state, &form.files).await?;

    let meta = form.meta;
    let input = CreateContent {
        title: meta.title.unwrap_or_default(),
        summary: meta.summary.unwrap_or_default(),
        date: meta.date.unwrap_or_default(),
        category: meta.category.unwrap_or_default(),
        subcategory: meta.subcategory.unwrap_or_default(),
        status: meta.status.unwrap_or_default(),
        attachments,
        created_by: admin.email.clone(),
    };

    let content = ContentRepo::create(&state.pool, &input).await?;

    tracing::info!(content_id = content.id, created_by = %admin.email, "Content created");

    Ok((StatusCode::CREATED, Json(content)))
}

/// PUT /content/{id}
///
/// Overwrites title/summary/date from the metadata. If any files were
/// uploaded, the attachment list is fully replaced and every superseded
/// file is deleted from storage -- partial replacement is not supported.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<SuccessResponse>> {
    let form = read_mutation_form(multipart).await?;

    // No uploads means "keep the current attachments"; any upload at
    // all means full replacement.
    let new_attachments = if form.files.is_empty() {
        None
    } else {
        Some(store_uploads(&state, &form.files).await?)
    };

    let edit = ContentEdit {
        title: form.meta.title.unwrap_or_default(),
        summary: form.meta.summary.unwrap_or_default(),
        date: form.meta.date.unwrap_or_default(),
    };

    let result =
        ContentRepo::update_meta(&state.pool, id, &edit, new_attachments.as_deref(), &admin.email)
            .await?;

    let Some((_, superseded)) = result else {
        // The id was unknown; the freshly stored uploads would be
        // orphaned, so remove them again.
        if let Some(attachments) = &new_attachments {
            for attachment in attachments {
                uploads::remove_stored(&state.config.uploads_dir, &attachment.path).await;
            }
        }
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }));
    };

    // Replaced attachments lose their files. Irreversible, best-effort.
    for attachment in &superseded {
        uploads::remove_stored(&state.config.uploads_dir, &attachment.path).await;
    }

    tracing::info!(content_id = id, updated_by = %admin.email, "Content updated");

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /content/{id}
///
/// Deletes the attachment files (best-effort), every version record,
/// and the content row. The record deletion is the last step visible to
/// callers -- no partial delete is observable as success.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    let content = ContentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }))?;

    for attachment in &content.attachments {
        uploads::remove_stored(&state.config.uploads_dir, &attachment.path).await;
    }

    if !ContentRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }));
    }

    tracing::info!(content_id = id, deleted_by = %admin.email, "Content deleted");

    Ok(Json(SuccessResponse::ok()))
}

// ---------------------------------------------------------------------------
// Workflow transitions
// ---------------------------------------------------------------------------

async fn transition(
    state: &AppState,
    id: DbId,
    action: WorkflowAction,
    actor: &str,
) -> AppResult<Json<SuccessResponse>> {
    let updated = ContentRepo::set_status(&state.pool, id, action.target_status(), actor).await?;

    if updated.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Content",
            id,
        }));
    }

    tracing::info!(
        content_id = id,
        action = action.as_str(),
        status = %action.target_status(),
        "Workflow transition"
    );

    Ok(Json(SuccessResponse::ok()))
}

/// POST /content/{id}/submit -- status := In Review.
pub async fn submit(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    transition(&state, id, WorkflowAction::Submit, &admin.email).await
}

/// POST /content/{id}/approve -- status := Approved.
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    transition(&state, id, WorkflowAction::Approve, &admin.email).await
}

/// POST /content/{id}/reject -- status := Draft.
pub async fn reject(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    transition(&state, id, WorkflowAction::Reject, &admin.email).await
}

/// POST /content/{id}/publish -- status := Published.
pub async fn publish(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    transition(&state, id, WorkflowAction::Publish, &admin.email).await
}

// ---------------------------------------------------------------------------
// Versions
// ---------------------------------------------------------------------------

/// GET /content/{id}/versions
///
/// Version history, newest first. An unknown id yields an empty list
/// rather than 404.
pub async fn versions(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ContentVersion>>> {
    let versions = ContentVersionRepo::list_for_content(&state.pool, id).await?;
    Ok(Json(versions))
}
