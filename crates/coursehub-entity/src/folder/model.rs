//! Folder entity model.
//!
//! Folders form a forest per batch. Ownership is unidirectional: a folder
//! stores only its parent id, and children are resolved by a reverse
//! query on `parent_id`. There is no embedded child list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named node in a per-batch hierarchical tree of course-material
/// containers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: i64,
    /// The batch this folder belongs to.
    pub batch_id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder id (None for root folders).
    pub parent_id: Option<i64>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The owning batch.
    pub batch_id: i64,
    /// Folder name.
    pub name: String,
    /// Parent folder (None for root-level).
    pub parent_id: Option<i64>,
}
