//! Request and response DTOs.
//!
//! The wire format is camelCase throughout, matching what the existing
//! frontend sends and expects.

pub mod request;
pub mod response;
