//! Admin repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::result::AppResult;
use coursehub_entity::admin::{Admin, CreateAdmin};

/// Repository for admin identity records.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an admin by ID.
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find admin", e))
    }

    /// Find an admin by email, case-insensitively.
    pub async fn find_by_email_ignore_case(&self, email: &str) -> AppResult<Option<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find admin by email", e)
            })
    }

    /// List all admins, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Admin>> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list admins", e))
    }

    /// Insert a new admin with status ACTIVE.
    pub async fn create(&self, data: &CreateAdmin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "INSERT INTO admins \
                (email, password_hash, first_name, last_name, mobile_number, photo_url, role, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'ACTIVE') RETURNING *",
        )
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.mobile_number)
        .bind(&data.photo_url)
        .bind(&data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("admins_email_lower_key") =>
            {
                AppError::validation(format!("Email already exists: {}", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create admin", e),
        })
    }

    /// Persist every mutable field of an existing admin.
    pub async fn update(&self, admin: &Admin) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "UPDATE admins SET \
                email = $2, password_hash = $3, first_name = $4, last_name = $5, \
                mobile_number = $6, photo_url = $7, role = $8, status = $9, \
                updated_at = $10, last_login = $11 \
             WHERE id = $1 RETURNING *",
        )
        .bind(admin.id)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(&admin.first_name)
        .bind(&admin.last_name)
        .bind(&admin.mobile_number)
        .bind(&admin.photo_url)
        .bind(&admin.role)
        .bind(&admin.status)
        .bind(admin.updated_at)
        .bind(admin.last_login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update admin", e))?
        .ok_or_else(|| AppError::not_found(format!("Admin {} not found", admin.id)))
    }

    /// Update only the stored credential (legacy migration, password change).
    pub async fn update_password_hash(&self, id: i32, password_hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE admins SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update credential", e)
            })?;
        Ok(())
    }

    /// Stamp a successful login.
    pub async fn update_last_login(&self, id: i32, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("UPDATE admins SET last_login = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;
        Ok(())
    }

    /// Hard-delete an admin. Returns whether a row was removed.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete admin", e))?;
        Ok(result.rows_affected() > 0)
    }
}
