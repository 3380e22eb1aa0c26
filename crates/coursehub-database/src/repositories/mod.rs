//! Repository implementations, one per aggregate.

pub mod admin;
pub mod batch;
pub mod course;
pub mod folder;
pub mod student;
