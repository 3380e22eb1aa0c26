//! Session token creation with configurable signing secret and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use coursehub_core::config::auth::AuthConfig;
use coursehub_core::error::AppError;

use super::claims::{AdminClaims, TOKEN_TYPE_ADMIN};

/// Creates signed admin session tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.jwt_ttl_minutes as i64,
        }
    }

    /// Generates a session token for the given admin.
    ///
    /// Returns the encoded token and its lifetime in seconds.
    pub fn generate_admin_token(
        &self,
        admin_id: i32,
        email: &str,
        role: &str,
    ) -> Result<(String, i64), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = AdminClaims {
            sub: email.to_string(),
            admin_id,
            role: role.to_string(),
            token_type: TOKEN_TYPE_ADMIN.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok((token, self.ttl_minutes * 60))
    }

    /// Token lifetime in seconds, as reported to clients.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes * 60
    }
}
