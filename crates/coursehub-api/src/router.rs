//! Route definitions for the CourseHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(folder_routes())
        .merge(catalog_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Login and bearer-token self-service endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/admin/login", post(handlers::auth::login))
        .route("/auth/admin/health", get(handlers::health::admin_health))
        .route("/auth/admin/me", get(handlers::auth::me))
        .route("/auth/admin/me", put(handlers::auth::update_me))
        .route(
            "/auth/admin/me/password",
            put(handlers::auth::change_password),
        )
}

/// Admin account management and avatar endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/admin/list", get(handlers::admin::list_admins))
        .route("/auth/admin/create", post(handlers::admin::create_admin))
        .route("/auth/admin/{id}", put(handlers::admin::update_admin))
        .route("/auth/admin/{id}", delete(handlers::admin::delete_admin))
        .route(
            "/auth/admin/{id}/avatar",
            post(handlers::admin::upload_avatar),
        )
        .route(
            "/auth/admin/image/{filename}",
            get(handlers::admin::get_avatar),
        )
        .route(
            "/auth/admin/avatar/{filename}",
            get(handlers::admin::get_avatar),
        )
}

/// Per-batch folder hierarchy endpoints.
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/batches/{batch_id}/folders",
            post(handlers::folder::create_folder),
        )
        .route(
            "/batches/{batch_id}/folders",
            get(handlers::folder::list_folders),
        )
        .route("/folders/{folder_id}", put(handlers::folder::rename_folder))
        .route(
            "/folders/{folder_id}",
            delete(handlers::folder::delete_folder),
        )
}

/// Course, batch, and enrollment endpoints.
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", post(handlers::catalog::create_course))
        .route("/courses", get(handlers::catalog::list_courses))
        .route(
            "/courses/tutor/{tutor_id}",
            get(handlers::catalog::list_courses_by_tutor),
        )
        .route(
            "/courses/{course_id}/batches",
            post(handlers::catalog::create_batch),
        )
        .route(
            "/courses/{course_id}/batches",
            get(handlers::catalog::list_batches),
        )
        .route(
            "/courses/{course_id}/batches/{batch_id}/students",
            post(handlers::catalog::add_student),
        )
        .route(
            "/courses/{course_id}/batches/{batch_id}/students",
            get(handlers::catalog::list_students),
        )
        .route(
            "/courses/{course_id}/batches/{batch_id}/students/{email}",
            delete(handlers::catalog::remove_student),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::{AllowHeaders, Any};

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request());

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
