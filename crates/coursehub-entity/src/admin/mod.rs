//! Admin identity entity.

pub mod model;

pub use model::{Admin, CreateAdmin, STATUS_ACTIVE};
