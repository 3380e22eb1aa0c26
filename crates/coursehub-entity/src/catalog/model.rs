//! Catalog entity models: courses, batches, and students.
//!
//! Batch membership is a join table (`batch_students`) queried on demand;
//! no entity embeds a collection of another.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course offered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Unique course identifier.
    pub id: i64,
    /// Course title.
    pub title: String,
    /// Display name of the tutor running the course.
    pub tutor_name: String,
    /// External tutor identifier.
    pub tutor_id: String,
    /// Cover image reference (optional).
    pub image: Option<String>,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A named grouping of students under a course.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Batch {
    /// Unique batch identifier.
    pub id: i64,
    /// Batch name.
    pub name: String,
    /// The course this batch belongs to.
    pub course_id: i64,
    /// When the batch was created.
    pub created_at: DateTime<Utc>,
    /// When the batch was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A student enrolled in one or more batches.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique student identifier.
    pub id: i64,
    /// Student email address.
    pub email: String,
    /// When the student record was created.
    pub created_at: DateTime<Utc>,
}
