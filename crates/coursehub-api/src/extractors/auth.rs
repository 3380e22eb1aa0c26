//! `AuthAdmin` extractor that pulls the bearer token from the Authorization
//! header, validates it, and injects the admin claims.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use coursehub_auth::jwt::claims::AdminClaims;
use coursehub_core::error::AppError;

use crate::state::AppState;

/// Extracted authenticated admin claims available in handlers.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub AdminClaims);

impl AuthAdmin {
    /// The authenticated admin's id.
    pub fn admin_id(&self) -> i32 {
        self.0.admin_id
    }
}

impl std::ops::Deref for AuthAdmin {
    type Target = AdminClaims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.token_decoder.decode_admin_token(token)?;

        Ok(AuthAdmin(claims))
    }
}
