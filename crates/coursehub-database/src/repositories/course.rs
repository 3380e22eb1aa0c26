//! Course repository implementation.

use sqlx::PgPool;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_entity::catalog::Course;

/// Repository for course records.
#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// Create a new course repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a course by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find course", e))
    }

    /// List all courses, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list courses", e))
    }

    /// List courses run by a tutor.
    pub async fn find_by_tutor(&self, tutor_id: &str) -> AppResult<Vec<Course>> {
        sqlx::query_as::<_, Course>(
            "SELECT * FROM courses WHERE tutor_id = $1 ORDER BY created_at DESC",
        )
        .bind(tutor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list courses by tutor", e)
        })
    }

    /// Insert a new course.
    pub async fn create(
        &self,
        title: &str,
        tutor_name: &str,
        tutor_id: &str,
        image: Option<&str>,
    ) -> AppResult<Course> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (title, tutor_name, tutor_id, image) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(title)
        .bind(tutor_name)
        .bind(tutor_id)
        .bind(image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create course", e))
    }
}
