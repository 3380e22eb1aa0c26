//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use coursehub_core::config::auth::AuthConfig;
use coursehub_core::error::AppError;

use super::claims::AdminClaims;

/// Validates admin session tokens.
///
/// Checks signature and expiry only; there is no revocation list and no
/// token rotation.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Fails with an unauthorized error on an expired token, a tampered
    /// signature, or a structurally malformed string, without panicking.
    pub fn decode_admin_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let token_data = decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            })?;

        Ok(token_data.claims)
    }

    /// Whether the token passes signature and expiry checks.
    pub fn validate(&self, token: &str) -> bool {
        self.decode_admin_token(token).is_ok()
    }

    /// Extracts the admin id claim, or `None` if the token is malformed
    /// or unverifiable.
    pub fn admin_id_from_token(&self, token: &str) -> Option<i32> {
        match self.decode_admin_token(token) {
            Ok(claims) => Some(claims.admin_id),
            Err(e) => {
                debug!(error = %e.message, "Could not extract admin id from token");
                None
            }
        }
    }

    /// Extracts the email (subject) claim, or `None` if the token is
    /// malformed or unverifiable.
    pub fn email_from_token(&self, token: &str) -> Option<String> {
        match self.decode_admin_token(token) {
            Ok(claims) => Some(claims.sub),
            Err(e) => {
                debug!(error = %e.message, "Could not extract email from token");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::TokenEncoder;
    use coursehub_core::error::ErrorKind;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret-key-with-adequate-length".to_string(),
            jwt_ttl_minutes: 60,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_roundtrip_preserves_claims() {
        let config = test_config();
        let encoder = TokenEncoder::new(&config);
        let decoder = TokenDecoder::new(&config);

        let (token, expires_in) = encoder
            .generate_admin_token(42, "admin@lms.test", "ADMIN")
            .expect("encode");
        assert_eq!(expires_in, 3600);

        let claims = decoder.decode_admin_token(&token).expect("decode");
        assert_eq!(claims.admin_id, 42);
        assert_eq!(claims.sub, "admin@lms.test");
        assert_eq!(claims.role, "ADMIN");
        assert_eq!(claims.token_type, "ADMIN");
        assert_eq!(decoder.admin_id_from_token(&token), Some(42));
        assert_eq!(
            decoder.email_from_token(&token).as_deref(),
            Some("admin@lms.test")
        );
    }

    #[test]
    fn test_malformed_token_rejected_without_panic() {
        let decoder = TokenDecoder::new(&test_config());
        for garbage in ["", "not-a-token", "a.b", "a.b.c.d"] {
            let err = decoder.decode_admin_token(garbage).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Unauthorized);
            assert_eq!(decoder.admin_id_from_token(garbage), None);
            assert_eq!(decoder.email_from_token(garbage), None);
        }
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let config = test_config();
        let encoder = TokenEncoder::new(&config);
        let (token, _) = encoder
            .generate_admin_token(1, "a@b.test", "ADMIN")
            .expect("encode");

        let other = AuthConfig {
            jwt_secret: "a-completely-different-signing-secret".to_string(),
            ..test_config()
        };
        let decoder = TokenDecoder::new(&other);
        assert!(!decoder.validate(&token));
        assert_eq!(decoder.admin_id_from_token(&token), None);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = TokenDecoder::new(&config);

        // Hand-roll an already-expired claim set; the leeway is 5 seconds,
        // so back-date well past it.
        let now = chrono::Utc::now().timestamp();
        let claims = AdminClaims {
            sub: "a@b.test".to_string(),
            admin_id: 1,
            role: "ADMIN".to_string(),
            token_type: "ADMIN".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .expect("encode");

        let err = decoder.decode_admin_token(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert!(err.message.contains("expired"));
    }
}
