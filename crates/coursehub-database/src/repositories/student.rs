//! Student repository: student records and batch membership.

use sqlx::PgPool;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_entity::catalog::Student;

/// Repository for students and the `batch_students` membership rows.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a student by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find student", e))
    }

    /// Insert a student record if none exists for the email, returning the
    /// stored row either way.
    pub async fn get_or_create(&self, email: &str) -> AppResult<Student> {
        if let Some(existing) = self.find_by_email(email).await? {
            return Ok(existing);
        }
        sqlx::query_as::<_, Student>("INSERT INTO students (email) VALUES ($1) RETURNING *")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create student", e))
    }

    /// List students enrolled in a batch via the membership join.
    pub async fn find_by_batch(&self, batch_id: i64) -> AppResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT s.* FROM students s \
             INNER JOIN batch_students bs ON bs.student_id = s.id \
             WHERE bs.batch_id = $1 ORDER BY s.email ASC",
        )
        .bind(batch_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list batch students", e)
        })
    }

    /// Add a student to a batch. Duplicate memberships are ignored.
    pub async fn add_to_batch(&self, batch_id: i64, student_id: i64) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO batch_students (batch_id, student_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(batch_id)
        .bind(student_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to add student to batch", e)
        })?;
        Ok(())
    }

    /// Remove a student's membership in a batch by email. Returns the
    /// number of membership rows removed.
    pub async fn remove_from_batch(&self, batch_id: i64, email: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM batch_students bs USING students s \
             WHERE bs.student_id = s.id AND bs.batch_id = $1 AND LOWER(s.email) = LOWER($2)",
        )
        .bind(batch_id)
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to remove student from batch", e)
        })?;
        Ok(result.rows_affected())
    }
}
