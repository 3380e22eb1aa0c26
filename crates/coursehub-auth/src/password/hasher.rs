//! Argon2id password hashing and verification.
//!
//! Credentials imported from the previous system may still be plaintext;
//! [`PasswordHasher::is_hashed`] tells the two apart so the login path
//! can migrate legacy values inline.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use coursehub_core::error::AppError;

/// PHC string prefix shared by every Argon2 variant.
const ARGON2_PREFIX: &str = "$argon2";

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Whether a stored credential is an Argon2 hash (as opposed to a
    /// legacy plaintext value).
    pub fn is_hashed(credential: &str) -> bool {
        credential.starts_with(ARGON2_PREFIX)
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("correct horse").expect("hash");

        assert!(PasswordHasher::is_hashed(&hash));
        assert!(hasher.verify_password("correct horse", &hash).expect("verify"));
        assert!(!hasher.verify_password("wrong horse", &hash).expect("verify"));
    }

    #[test]
    fn test_is_hashed_rejects_plaintext() {
        assert!(!PasswordHasher::is_hashed("hunter2"));
        assert!(!PasswordHasher::is_hashed(""));
        assert!(PasswordHasher::is_hashed(
            "$argon2id$v=19$m=19456,t=2,p=1$salt$hash"
        ));
    }

    #[test]
    fn test_verify_against_garbage_hash_errors() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify_password("pw", "not-a-phc-string").is_err());
    }
}
