//! # coursehub-entity
//!
//! Domain entity models for CourseHub: admins, folders, and the
//! course/batch/student catalog. Entities hold only data and trivial
//! accessors; business rules live in `coursehub-service`.

pub mod admin;
pub mod catalog;
pub mod folder;

pub use admin::{Admin, CreateAdmin};
pub use catalog::{Batch, Course, Student};
pub use folder::{CreateFolder, Folder};
