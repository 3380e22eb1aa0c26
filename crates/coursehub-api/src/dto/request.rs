//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create admin request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Mobile number.
    pub mobile_number: Option<String>,
    /// Avatar reference.
    pub photo_url: Option<String>,
    /// Assigned role.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
}

/// Full admin update request (management screen).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// First name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Assigned role.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    /// Mobile number; blanks are ignored.
    pub mobile_number: Option<String>,
    /// Avatar reference; blanks are ignored.
    pub photo_url: Option<String>,
}

/// Partial self-service profile update. Absent fields stay untouched;
/// `photoUrl: ""` clears the avatar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Avatar reference.
    pub photo_url: Option<String>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Folder name is required"))]
    pub name: String,
    /// Parent folder id (absent for root-level).
    pub parent_id: Option<i64>,
}

/// Rename folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameFolderRequest {
    /// New folder name.
    #[validate(length(min = 1, max = 255, message = "Folder name is required"))]
    pub name: String,
}

/// Create course request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    /// Course title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Tutor display name.
    #[validate(length(min = 1, message = "Tutor name is required"))]
    pub tutor_name: String,
    /// External tutor identifier.
    #[validate(length(min = 1, message = "Tutor id is required"))]
    pub tutor_id: String,
    /// Cover image reference.
    pub image: Option<String>,
}

/// Create batch request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchRequest {
    /// Batch name.
    #[validate(length(min = 1, message = "Batch name is required"))]
    pub name: String,
}

/// Enroll student request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentRequest {
    /// Student email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}
