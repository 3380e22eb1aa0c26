//! Password hashing and legacy credential detection.

pub mod hasher;

pub use hasher::PasswordHasher;
