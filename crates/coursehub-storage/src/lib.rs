//! # coursehub-storage
//!
//! Local-filesystem storage for uploaded admin avatars.

pub mod avatar;

pub use avatar::AvatarStore;
