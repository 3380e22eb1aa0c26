//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use coursehub_auth::jwt::decoder::TokenDecoder;
use coursehub_auth::jwt::encoder::TokenEncoder;
use coursehub_auth::password::PasswordHasher;
use coursehub_core::config::AppConfig;
use coursehub_storage::avatar::AvatarStore;

use coursehub_database::repositories::admin::AdminRepository;
use coursehub_database::repositories::batch::BatchRepository;
use coursehub_database::repositories::course::CourseRepository;
use coursehub_database::repositories::folder::FolderRepository;
use coursehub_database::repositories::student::StudentRepository;

use coursehub_service::admin::AdminService;
use coursehub_service::catalog::CatalogService;
use coursehub_service::folder::FolderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Session token decoder and validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Avatar file store.
    pub avatar_store: Arc<AvatarStore>,

    /// Admin identity service.
    pub admin_service: Arc<AdminService>,
    /// Folder hierarchy service.
    pub folder_service: Arc<FolderService>,
    /// Course catalog service.
    pub catalog_service: Arc<CatalogService>,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(config: AppConfig, db_pool: PgPool, avatar_store: AvatarStore) -> Self {
        let admin_repo = Arc::new(AdminRepository::new(db_pool.clone()));
        let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
        let course_repo = Arc::new(CourseRepository::new(db_pool.clone()));
        let batch_repo = Arc::new(BatchRepository::new(db_pool.clone()));
        let student_repo = Arc::new(StudentRepository::new(db_pool.clone()));

        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
        let password_hasher = PasswordHasher::new();

        let admin_service = Arc::new(AdminService::new(
            admin_repo,
            password_hasher,
            token_encoder,
            config.auth.password_min_length,
        ));
        let folder_service = Arc::new(FolderService::new(folder_repo, batch_repo.clone()));
        let catalog_service = Arc::new(CatalogService::new(course_repo, batch_repo, student_repo));

        Self {
            config: Arc::new(config),
            db_pool,
            token_decoder,
            avatar_store: Arc::new(avatar_store),
            admin_service,
            folder_service,
            catalog_service,
        }
    }
}
