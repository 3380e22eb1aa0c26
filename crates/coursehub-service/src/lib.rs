//! # coursehub-service
//!
//! Business rules for CourseHub. Services are stateless and
//! request-scoped: each call reads current persisted state, computes a
//! result, and performs at most one logical write. No HTTP types appear
//! here.

pub mod admin;
pub mod catalog;
pub mod folder;

pub use admin::service::AdminService;
pub use catalog::service::CatalogService;
pub use folder::service::FolderService;
