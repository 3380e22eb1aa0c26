//! Folder hierarchy management.

pub mod plan;
pub mod service;

pub use service::FolderService;
