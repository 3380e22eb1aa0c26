//! # coursehub-api
//!
//! HTTP API layer for CourseHub built on Axum.
//!
//! Provides the REST endpoints, bearer-token extractor, DTOs, and error
//! mapping. All routes are mounted under `/api/v1`.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
