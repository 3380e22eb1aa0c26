//! Folder hierarchy entity.

pub mod model;

pub use model::{CreateFolder, Folder};
