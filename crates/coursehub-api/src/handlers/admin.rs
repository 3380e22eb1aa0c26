//! Admin account management handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use coursehub_core::error::AppError;
use coursehub_service::admin::{CreateAdminData, UpdateAdminData};

use crate::dto::request::{CreateAdminRequest, UpdateAdminRequest};
use crate::dto::response::{
    AdminListResponse, AdminResponse, AvatarUploadResponse, MessageResponse,
};
use crate::extractors::AuthAdmin;
use crate::handlers::validated;
use crate::state::AppState;

/// GET /api/v1/auth/admin/list
pub async fn list_admins(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<AdminListResponse>, AppError> {
    let admins = state.admin_service.list_admins().await?;

    Ok(Json(AdminListResponse {
        total: admins.len(),
        admins: admins.into_iter().map(AdminResponse::from).collect(),
    }))
}

/// POST /api/v1/auth/admin/create
pub async fn create_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Json(req): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<AdminResponse>), AppError> {
    let req = validated(req)?;

    let admin = state
        .admin_service
        .create_admin(CreateAdminData {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            mobile_number: req.mobile_number,
            photo_url: req.photo_url,
            role: req.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(admin.into())))
}

/// PUT /api/v1/auth/admin/{id}
pub async fn update_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<i32>,
    Json(req): Json<UpdateAdminRequest>,
) -> Result<Json<AdminResponse>, AppError> {
    let req = validated(req)?;

    let admin = state
        .admin_service
        .update_admin(
            id,
            UpdateAdminData {
                email: req.email,
                first_name: req.first_name,
                last_name: req.last_name,
                role: req.role,
                mobile_number: req.mobile_number,
                photo_url: req.photo_url,
            },
        )
        .await?;

    Ok(Json(admin.into()))
}

/// DELETE /api/v1/auth/admin/{id}
pub async fn delete_admin(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    state.admin_service.delete_admin(id).await?;
    Ok(Json(MessageResponse::ok("Admin deleted successfully")))
}

/// POST /api/v1/auth/admin/{id}/avatar
///
/// Multipart upload; the file arrives in the `file` field. The previous
/// avatar file, if any, is removed after the new one is recorded.
pub async fn upload_avatar(
    State(state): State<AppState>,
    _auth: AuthAdmin,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<Json<AvatarUploadResponse>, AppError> {
    let mut upload: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let original_name = field.file_name().map(String::from);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
            upload = Some((original_name, data));
            break;
        }
    }

    let (original_name, data) =
        upload.ok_or_else(|| AppError::validation("Missing 'file' field in upload"))?;
    if data.is_empty() {
        return Err(AppError::validation("Uploaded file is empty"));
    }

    let previous = state.admin_service.get_admin(id).await?.photo_url;

    let filename = state
        .avatar_store
        .store(id, original_name.as_deref(), data)
        .await?;

    state.admin_service.update_photo(id, &filename).await?;

    if let Some(old) = previous {
        state.avatar_store.delete(&old).await?;
    }

    Ok(Json(AvatarUploadResponse {
        success: true,
        id,
        photo_url: filename,
    }))
}

/// GET /api/v1/auth/admin/image/{filename} and
/// GET /api/v1/auth/admin/avatar/{filename}
pub async fn get_avatar(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let (stream, content_type) = state.avatar_store.open(&filename).await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Failed to build response: {e}")))
}
