//! Batch repository implementation.

use sqlx::PgPool;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_entity::catalog::Batch;

/// Repository for batch records.
#[derive(Debug, Clone)]
pub struct BatchRepository {
    pool: PgPool,
}

impl BatchRepository {
    /// Create a new batch repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a batch by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Batch>> {
        sqlx::query_as::<_, Batch>("SELECT * FROM batches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find batch", e))
    }

    /// List batches under a course.
    pub async fn find_by_course(&self, course_id: i64) -> AppResult<Vec<Batch>> {
        sqlx::query_as::<_, Batch>(
            "SELECT * FROM batches WHERE course_id = $1 ORDER BY created_at ASC",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list batches", e))
    }

    /// Insert a new batch under a course.
    pub async fn create(&self, course_id: i64, name: &str) -> AppResult<Batch> {
        sqlx::query_as::<_, Batch>(
            "INSERT INTO batches (course_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(course_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create batch", e))
    }
}
