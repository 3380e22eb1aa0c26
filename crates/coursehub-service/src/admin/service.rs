//! Admin authentication and account management.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use coursehub_auth::jwt::TokenEncoder;
use coursehub_auth::password::PasswordHasher;
use coursehub_core::error::AppError;
use coursehub_database::repositories::admin::AdminRepository;
use coursehub_entity::admin::{Admin, CreateAdmin};

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginSuccess {
    /// Signed session token.
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// The authenticated admin, post login-stamp.
    pub admin: Admin,
}

/// Data for a new admin account, with the plaintext password still
/// unhashed.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateAdminData {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: Option<String>,
    pub photo_url: Option<String>,
    pub role: String,
}

/// Full admin update as submitted by another admin.
///
/// Names and role always overwrite; `mobile_number` and `photo_url` are
/// only applied when non-empty, matching how the management screen
/// submits untouched fields as blanks.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateAdminData {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub mobile_number: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial self-service profile update.
///
/// Absent fields stay untouched. A present-but-empty `photo_url`
/// explicitly clears the avatar reference.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Outcome of checking a submitted password against a stored credential.
#[derive(Debug)]
enum CredentialCheck {
    /// The submitted password does not match.
    Mismatch,
    /// The submitted password matches the stored Argon2 hash.
    Match,
    /// The submitted password matches a stored plaintext credential;
    /// the account must be re-stamped with the carried hash.
    MatchNeedsRehash(String),
}

/// Checks a submitted password against a stored credential.
///
/// Stored credentials may still be plaintext values imported from the
/// previous system. A plaintext match produces a fresh Argon2 hash for
/// the caller to persist, so the account self-heals on its next
/// successful check.
fn verify_credential(
    hasher: &PasswordHasher,
    stored: &str,
    submitted: &str,
) -> Result<CredentialCheck, AppError> {
    if PasswordHasher::is_hashed(stored) {
        if hasher.verify_password(submitted, stored)? {
            Ok(CredentialCheck::Match)
        } else {
            Ok(CredentialCheck::Mismatch)
        }
    } else if stored == submitted {
        let rehashed = hasher.hash_password(submitted)?;
        Ok(CredentialCheck::MatchNeedsRehash(rehashed))
    } else {
        Ok(CredentialCheck::Mismatch)
    }
}

/// Gate applied before any credential check: only ACTIVE accounts may
/// log in, regardless of what they submit.
fn ensure_active_for_login(admin: &Admin) -> Result<(), AppError> {
    if !admin.is_active() {
        warn!(admin_id = admin.id, "Login attempt on inactive account");
        return Err(AppError::unauthorized("Admin account is not active"));
    }
    Ok(())
}

/// Returns the email to store when the submitted value differs from the
/// current one byte-wise. A case-only change is still a change, so stored
/// casing can be corrected.
fn email_change(current: &str, submitted: &str) -> Option<String> {
    let submitted = submitted.trim();
    if submitted == current {
        None
    } else {
        Some(submitted.to_string())
    }
}

/// Rejects an email when the case-insensitive lookup found a different
/// account already using it. `exclude_id` is the account being edited,
/// so a self-match (a case-only correction) passes.
fn ensure_email_available(
    conflict: Option<&Admin>,
    exclude_id: Option<i32>,
    email: &str,
) -> Result<(), AppError> {
    if let Some(other) = conflict {
        if exclude_id != Some(other.id) {
            return Err(AppError::validation(format!(
                "Email already exists: {email}"
            )));
        }
    }
    Ok(())
}

/// Merges a partial profile update into an admin record.
///
/// Absent fields stay untouched; an empty `photo_url` clears the avatar.
fn apply_profile_update(admin: &mut Admin, update: ProfileUpdate) {
    if let Some(first_name) = update.first_name {
        admin.first_name = first_name;
    }
    if let Some(last_name) = update.last_name {
        admin.last_name = last_name;
    }
    if let Some(photo_url) = update.photo_url {
        admin.photo_url = if photo_url.is_empty() {
            None
        } else {
            Some(photo_url)
        };
    }
}

/// Manages admin accounts and session issuance.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Admin repository.
    admin_repo: Arc<AdminRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Session token encoder.
    encoder: Arc<TokenEncoder>,
    /// Minimum length for new passwords.
    password_min_length: usize,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(
        admin_repo: Arc<AdminRepository>,
        hasher: PasswordHasher,
        encoder: Arc<TokenEncoder>,
        password_min_length: usize,
    ) -> Self {
        Self {
            admin_repo,
            hasher,
            encoder,
            password_min_length,
        }
    }

    fn check_password_policy(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        Ok(())
    }

    /// Authenticates an admin and issues a session token.
    ///
    /// Stored credentials may still be plaintext values imported from the
    /// previous system. A plaintext match is migrated to an Argon2 hash
    /// inline, before the token is issued, so the account self-heals on
    /// its first successful login.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<LoginSuccess, AppError> {
        let email = email.trim();

        let mut admin = self
            .admin_repo
            .find_by_email_ignore_case(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        ensure_active_for_login(&admin)?;

        match verify_credential(&self.hasher, &admin.password_hash, password)? {
            CredentialCheck::Mismatch => {
                return Err(AppError::unauthorized("Invalid email or password"));
            }
            CredentialCheck::Match => {}
            CredentialCheck::MatchNeedsRehash(rehashed) => {
                self.admin_repo
                    .update_password_hash(admin.id, &rehashed)
                    .await?;
                admin.password_hash = rehashed;
                info!(admin_id = admin.id, "Migrated legacy credential to Argon2");
            }
        }

        let now = Utc::now();
        self.admin_repo.update_last_login(admin.id, now).await?;
        admin.last_login = Some(now);

        let (token, expires_in) =
            self.encoder
                .generate_admin_token(admin.id, &admin.email, &admin.role)?;

        info!(admin_id = admin.id, "Admin logged in");

        Ok(LoginSuccess {
            token,
            expires_in,
            admin,
        })
    }

    /// Creates a new admin account with status ACTIVE.
    pub async fn create_admin(&self, data: CreateAdminData) -> Result<Admin, AppError> {
        let email = data.email.trim().to_string();

        let conflict = self.admin_repo.find_by_email_ignore_case(&email).await?;
        ensure_email_available(conflict.as_ref(), None, &email)?;

        self.check_password_policy(&data.password)?;
        let password_hash = self.hasher.hash_password(&data.password)?;

        let admin = self
            .admin_repo
            .create(&CreateAdmin {
                email,
                password_hash,
                first_name: data.first_name,
                last_name: data.last_name,
                mobile_number: data.mobile_number,
                photo_url: data.photo_url,
                role: data.role,
            })
            .await?;

        info!(admin_id = admin.id, email = %admin.email, "Admin created");
        Ok(admin)
    }

    /// Updates an existing admin from the management screen.
    pub async fn update_admin(&self, id: i32, data: UpdateAdminData) -> Result<Admin, AppError> {
        let mut admin = self
            .admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Admin not found with id: {id}")))?;

        if let Some(new_email) = email_change(&admin.email, &data.email) {
            let conflict = self.admin_repo.find_by_email_ignore_case(&new_email).await?;
            ensure_email_available(conflict.as_ref(), Some(id), &new_email)?;
            admin.email = new_email;
        }

        admin.first_name = data.first_name;
        admin.last_name = data.last_name;
        admin.role = data.role;

        if let Some(mobile) = data.mobile_number.filter(|m| !m.trim().is_empty()) {
            admin.mobile_number = Some(mobile);
        }
        if let Some(photo) = data.photo_url.filter(|p| !p.trim().is_empty()) {
            admin.photo_url = Some(photo);
        }

        admin.updated_at = Utc::now();

        let updated = self.admin_repo.update(&admin).await?;
        info!(admin_id = id, "Admin updated");
        Ok(updated)
    }

    /// Applies a partial self-service profile update.
    pub async fn update_profile(&self, id: i32, update: ProfileUpdate) -> Result<Admin, AppError> {
        let mut admin = self
            .admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Admin not found with id: {id}")))?;

        apply_profile_update(&mut admin, update);
        admin.updated_at = Utc::now();
        self.admin_repo.update(&admin).await
    }

    /// Changes an admin's password after verifying the current one.
    pub async fn change_password(
        &self,
        id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let admin = self
            .admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Admin not found with id: {id}")))?;

        if matches!(
            verify_credential(&self.hasher, &admin.password_hash, current_password)?,
            CredentialCheck::Mismatch
        ) {
            return Err(AppError::validation("Current password is incorrect"));
        }

        self.check_password_policy(new_password)?;
        let new_hash = self.hasher.hash_password(new_password)?;
        self.admin_repo.update_password_hash(id, &new_hash).await?;

        info!(admin_id = id, "Password changed");
        Ok(())
    }

    /// Returns an ACTIVE admin by id. Inactive accounts read as absent.
    pub async fn get_admin(&self, id: i32) -> Result<Admin, AppError> {
        let admin = self
            .admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Admin not found with id: {id}")))?;

        if !admin.is_active() {
            return Err(AppError::not_found(format!("Admin not found with id: {id}")));
        }

        Ok(admin)
    }

    /// Lists every admin account, newest first.
    pub async fn list_admins(&self) -> Result<Vec<Admin>, AppError> {
        self.admin_repo.find_all().await
    }

    /// Deletes an admin account.
    pub async fn delete_admin(&self, id: i32) -> Result<(), AppError> {
        if !self.admin_repo.delete(id).await? {
            return Err(AppError::validation(format!("Admin not found with id: {id}")));
        }
        info!(admin_id = id, "Admin deleted");
        Ok(())
    }

    /// Records a newly stored avatar filename on the admin.
    pub async fn update_photo(&self, id: i32, filename: &str) -> Result<Admin, AppError> {
        let mut admin = self
            .admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Admin not found with id: {id}")))?;

        admin.photo_url = Some(filename.to_string());
        admin.updated_at = Utc::now();

        let updated = self.admin_repo.update(&admin).await?;
        info!(admin_id = id, photo = %filename, "Admin avatar updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use coursehub_core::error::ErrorKind;

    fn admin() -> Admin {
        Admin {
            id: 7,
            email: "admin@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            mobile_number: Some("555-0100".to_string()),
            photo_url: Some("admin_7_old.jpg".to_string()),
            role: "ADMIN".to_string(),
            status: "ACTIVE".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
        }
    }

    #[test]
    fn test_legacy_credential_match_carries_argon2_rehash() {
        let hasher = PasswordHasher::new();

        let check = verify_credential(&hasher, "s3cret-pass", "s3cret-pass").expect("verify");
        let CredentialCheck::MatchNeedsRehash(rehashed) = check else {
            panic!("expected a rehash, got {check:?}");
        };
        assert!(PasswordHasher::is_hashed(&rehashed));

        // Once the rehash is stored, later logins take the hash path.
        assert!(matches!(
            verify_credential(&hasher, &rehashed, "s3cret-pass").expect("verify"),
            CredentialCheck::Match
        ));
        assert!(matches!(
            verify_credential(&hasher, &rehashed, "wrong-pass").expect("verify"),
            CredentialCheck::Mismatch
        ));
    }

    #[test]
    fn test_legacy_credential_mismatch_never_rehashes() {
        let hasher = PasswordHasher::new();
        assert!(matches!(
            verify_credential(&hasher, "s3cret-pass", "S3CRET-PASS").expect("verify"),
            CredentialCheck::Mismatch
        ));
    }

    #[test]
    fn test_inactive_account_rejected_before_credentials() {
        let mut target = admin();
        target.status = "INACTIVE".to_string();

        let err = ensure_active_for_login(&target).expect_err("inactive must not log in");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Admin account is not active");

        assert!(ensure_active_for_login(&admin()).is_ok());
    }

    #[test]
    fn test_duplicate_email_rejected_on_create() {
        let existing = admin();

        let err = ensure_email_available(Some(&existing), None, "Admin@Example.com")
            .expect_err("duplicate email must fail");
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Email already exists: Admin@Example.com");

        assert!(ensure_email_available(None, None, "new@example.com").is_ok());
    }

    #[test]
    fn test_case_only_email_change_is_applied() {
        assert_eq!(
            email_change("Admin@Example.com", "admin@example.com").as_deref(),
            Some("admin@example.com")
        );
        assert_eq!(
            email_change("admin@example.com", " admin@example.com "),
            None
        );

        // The lookup finds the account itself; that is not a conflict.
        let this_one = admin();
        assert!(
            ensure_email_available(Some(&this_one), Some(this_one.id), "ADMIN@example.com")
                .is_ok()
        );
    }

    #[test]
    fn test_profile_update_absent_fields_untouched() {
        let mut target = admin();
        apply_profile_update(
            &mut target,
            ProfileUpdate {
                first_name: Some("Grace".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(target.first_name, "Grace");
        assert_eq!(target.last_name, "Admin");
        assert_eq!(target.photo_url.as_deref(), Some("admin_7_old.jpg"));
    }

    #[test]
    fn test_profile_update_empty_photo_clears() {
        let mut target = admin();
        apply_profile_update(
            &mut target,
            ProfileUpdate {
                photo_url: Some(String::new()),
                ..Default::default()
            },
        );

        assert!(target.photo_url.is_none());
        assert_eq!(target.first_name, "Ada");
    }

    #[test]
    fn test_profile_update_sets_photo() {
        let mut target = admin();
        apply_profile_update(
            &mut target,
            ProfileUpdate {
                photo_url: Some("admin_7_new.png".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(target.photo_url.as_deref(), Some("admin_7_new.png"));
    }
}
