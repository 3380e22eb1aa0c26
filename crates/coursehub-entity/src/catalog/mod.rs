//! Course/batch/student catalog entities.

pub mod model;

pub use model::{Batch, Course, Student};
