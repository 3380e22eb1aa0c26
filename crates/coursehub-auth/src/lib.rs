//! # coursehub-auth
//!
//! Stateless session tokens (jsonwebtoken, HS256) and Argon2id password
//! hashing, including detection of legacy plaintext credentials awaiting
//! migration.

pub mod jwt;
pub mod password;

pub use jwt::{AdminClaims, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
