//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coursehub_entity::admin::Admin;
use coursehub_entity::catalog::{Batch, Course, Student};
use coursehub_entity::folder::Folder;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the request was successful.
    pub success: bool,
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a successful message response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Login response, flattened the way the frontend consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Signed session token.
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// Admin id.
    pub id: i32,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role.
    pub role: String,
}

/// Admin summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    /// Admin id.
    pub id: i32,
    /// Email address.
    pub email: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Mobile number.
    pub mobile_number: Option<String>,
    /// Stored avatar filename.
    pub photo_url: Option<String>,
    /// Role.
    pub role: String,
    /// Account status.
    pub status: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
    /// Last login.
    pub last_login: Option<DateTime<Utc>>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            first_name: admin.first_name,
            last_name: admin.last_name,
            mobile_number: admin.mobile_number,
            photo_url: admin.photo_url,
            role: admin.role,
            status: admin.status,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
            last_login: admin.last_login,
        }
    }
}

/// Admin listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminListResponse {
    /// Total number of admins.
    pub total: usize,
    /// Admin records.
    pub admins: Vec<AdminResponse>,
}

/// Folder summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderResponse {
    /// Folder id.
    pub id: i64,
    /// Owning batch id.
    pub batch_id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder id (absent for roots).
    pub parent_id: Option<i64>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Folder> for FolderResponse {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            batch_id: folder.batch_id,
            name: folder.name,
            parent_id: folder.parent_id,
            created_at: folder.created_at,
        }
    }
}

/// Course summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    /// Course id.
    pub id: i64,
    /// Course title.
    pub title: String,
    /// Tutor display name.
    pub tutor_name: String,
    /// External tutor identifier.
    pub tutor_id: String,
    /// Cover image reference.
    pub image: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            tutor_name: course.tutor_name,
            tutor_id: course.tutor_id,
            image: course.image,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Batch summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    /// Batch id.
    pub id: i64,
    /// Batch name.
    pub name: String,
    /// Owning course id.
    pub course_id: i64,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Batch> for BatchResponse {
    fn from(batch: Batch) -> Self {
        Self {
            id: batch.id,
            name: batch.name,
            course_id: batch.course_id,
            created_at: batch.created_at,
        }
    }
}

/// Student summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    /// Student id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            email: student.email,
            created_at: student.created_at,
        }
    }
}

/// Avatar upload result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUploadResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Admin id.
    pub id: i32,
    /// Stored avatar filename.
    pub photo_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_response_is_camel_case() {
        let admin = Admin {
            id: 3,
            email: "a@b.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            mobile_number: None,
            photo_url: Some("admin_3_x.jpg".to_string()),
            role: "ADMIN".to_string(),
            status: "ACTIVE".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
        };

        let json = serde_json::to_value(AdminResponse::from(admin)).expect("serialize");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["photoUrl"], "admin_3_x.jpg");
        assert!(json.get("password_hash").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
