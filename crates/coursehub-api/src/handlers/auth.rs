//! Auth handlers: login and bearer-token self-service.

use axum::Json;
use axum::extract::State;

use coursehub_core::error::AppError;
use coursehub_service::admin::ProfileUpdate;

use crate::dto::request::{ChangePasswordRequest, LoginRequest, UpdateProfileRequest};
use crate::dto::response::{AdminResponse, LoginResponse, MessageResponse};
use crate::extractors::AuthAdmin;
use crate::handlers::validated;
use crate::state::AppState;

/// POST /api/v1/auth/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let req = validated(req)?;

    let result = state
        .admin_service
        .authenticate(&req.email, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token: result.token,
        expires_in: result.expires_in,
        id: result.admin.id,
        email: result.admin.email,
        first_name: result.admin.first_name,
        last_name: result.admin.last_name,
        role: result.admin.role,
    }))
}

/// GET /api/v1/auth/admin/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<AdminResponse>, AppError> {
    let admin = state.admin_service.get_admin(auth.admin_id()).await?;
    Ok(Json(admin.into()))
}

/// PUT /api/v1/auth/admin/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<AdminResponse>, AppError> {
    let admin = state
        .admin_service
        .update_profile(
            auth.admin_id(),
            ProfileUpdate {
                first_name: req.first_name,
                last_name: req.last_name,
                photo_url: req.photo_url,
            },
        )
        .await?;

    Ok(Json(admin.into()))
}

/// PUT /api/v1/auth/admin/me/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let req = validated(req)?;

    state
        .admin_service
        .change_password(auth.admin_id(), &req.current_password, &req.new_password)
        .await?;

    Ok(Json(MessageResponse::ok("Password changed successfully")))
}
