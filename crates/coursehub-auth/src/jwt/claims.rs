//! JWT claims structure embedded in every admin session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marker value distinguishing admin tokens from any future token kinds.
pub const TOKEN_TYPE_ADMIN: &str = "ADMIN";

/// Claims payload for an admin session token.
///
/// Validity is determined purely by signature and expiry; tokens are
/// never persisted and there is no server-side revocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject: the admin's email.
    pub sub: String,
    /// Numeric admin identifier.
    pub admin_id: i32,
    /// Role at the time of issuance.
    pub role: String,
    /// Token type marker, always `"ADMIN"`.
    pub token_type: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl AdminClaims {
    /// Returns the email from the subject claim.
    pub fn email(&self) -> &str {
        &self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_helpers() {
        let now = Utc::now().timestamp();
        let live = AdminClaims {
            sub: "a@b.com".to_string(),
            admin_id: 7,
            role: "ADMIN".to_string(),
            token_type: TOKEN_TYPE_ADMIN.to_string(),
            iat: now,
            exp: now + 600,
        };
        assert!(!live.is_expired());
        assert!(live.expires_at() > Utc::now());

        let stale = AdminClaims { exp: now - 600, ..live };
        assert!(stale.is_expired());
    }
}
