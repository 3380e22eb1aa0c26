//! Folder hierarchy handlers.

use axum::Json;
use axum::extract::{Path, State};

use coursehub_core::error::AppError;

use crate::dto::request::{CreateFolderRequest, RenameFolderRequest};
use crate::dto::response::{ApiResponse, FolderResponse, MessageResponse};
use crate::extractors::AuthAdmin;
use crate::handlers::validated;
use crate::state::AppState;

/// POST /api/v1/batches/{batch_id}/folders
pub async fn create_folder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(batch_id): Path<i64>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, AppError> {
    let req = validated(req)?;

    let folder = state
        .folder_service
        .create_folder(batch_id, &req.name, req.parent_id)
        .await?;

    Ok(Json(ApiResponse::ok(folder.into())))
}

/// GET /api/v1/batches/{batch_id}/folders
pub async fn list_folders(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(batch_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<FolderResponse>>>, AppError> {
    let folders = state.folder_service.list_folders(batch_id).await?;

    Ok(Json(ApiResponse::ok(
        folders.into_iter().map(FolderResponse::from).collect(),
    )))
}

/// PUT /api/v1/folders/{folder_id}
pub async fn rename_folder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(folder_id): Path<i64>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, AppError> {
    let req = validated(req)?;

    let folder = state.folder_service.rename_folder(folder_id, &req.name).await?;

    Ok(Json(ApiResponse::ok(folder.into())))
}

/// DELETE /api/v1/folders/{folder_id}
pub async fn delete_folder(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(folder_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.folder_service.delete_folder(folder_id).await?;
    Ok(Json(MessageResponse::ok("Folder deleted successfully")))
}
