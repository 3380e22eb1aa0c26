//! Admin identity management.

pub mod service;

pub use service::{AdminService, CreateAdminData, LoginSuccess, ProfileUpdate, UpdateAdminData};
