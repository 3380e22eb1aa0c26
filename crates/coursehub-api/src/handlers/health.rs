//! Health check handlers.

/// GET /api/v1/health
pub async fn health_check() -> &'static str {
    "OK"
}

/// GET /api/v1/auth/admin/health
pub async fn admin_health() -> &'static str {
    "Admin service is running"
}
