//! Admin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status value for admins allowed to log in. Stored as free text, so
/// anything else (e.g. `"DISABLED"`) means the account is inactive.
pub const STATUS_ACTIVE: &str = "ACTIVE";

/// A privileged system user able to manage courses, batches, and folders.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique admin identifier.
    pub id: i32,
    /// Email address; unique case-insensitively.
    pub email: String,
    /// Argon2 PHC hash, or a legacy plaintext credential awaiting
    /// migration on the next successful login.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Mobile number (optional).
    pub mobile_number: Option<String>,
    /// Stored avatar filename (optional).
    pub photo_url: Option<String>,
    /// Free-text role, e.g. `"ADMIN"`.
    pub role: String,
    /// Account status; only `"ACTIVE"` may log in.
    pub status: String,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
    /// When the admin was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login: Option<DateTime<Utc>>,
}

impl Admin {
    /// Check whether this account is allowed to log in.
    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Data required to create a new admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdmin {
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Mobile number (optional).
    pub mobile_number: Option<String>,
    /// Avatar filename (optional).
    pub photo_url: Option<String>,
    /// Assigned role.
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_with_status(status: &str) -> Admin {
        Admin {
            id: 1,
            email: "admin@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            mobile_number: None,
            photo_url: None,
            role: "ADMIN".to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn test_is_active() {
        assert!(admin_with_status("ACTIVE").is_active());
        assert!(!admin_with_status("DISABLED").is_active());
        assert!(!admin_with_status("active").is_active());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(admin_with_status("ACTIVE")).expect("serialize");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "admin@example.com");
    }
}
