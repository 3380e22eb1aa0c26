//! Folder CRUD operations scoped to a batch.

use std::sync::Arc;

use tracing::info;

use coursehub_core::error::AppError;
use coursehub_database::repositories::batch::BatchRepository;
use coursehub_database::repositories::folder::FolderRepository;
use coursehub_entity::folder::{CreateFolder, Folder};

use crate::folder::plan::{children_by_parent, plan_subtree_deletion};

/// Manages per-batch folder hierarchies.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Batch repository, used to verify the owning batch exists.
    batch_repo: Arc<BatchRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>, batch_repo: Arc<BatchRepository>) -> Self {
        Self {
            folder_repo,
            batch_repo,
        }
    }

    /// Creates a folder inside a batch, optionally under a parent folder.
    ///
    /// The parent, when given, must exist and belong to the same batch.
    pub async fn create_folder(
        &self,
        batch_id: i64,
        name: &str,
        parent_id: Option<i64>,
    ) -> Result<Folder, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        self.batch_repo
            .find_by_id(batch_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Batch {batch_id} not found")))?;

        if let Some(parent_id) = parent_id {
            let parent = self
                .folder_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Folder {parent_id} not found")))?;

            if parent.batch_id != batch_id {
                return Err(AppError::validation(
                    "Parent folder belongs to a different batch",
                ));
            }
        }

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                batch_id,
                name: name.trim().to_string(),
                parent_id,
            })
            .await?;

        info!(
            batch_id = batch_id,
            folder_id = folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Lists every folder of a batch as a flat collection.
    ///
    /// Clients rebuild the tree from `parent_id`; the server never nests.
    pub async fn list_folders(&self, batch_id: i64) -> Result<Vec<Folder>, AppError> {
        self.batch_repo
            .find_by_id(batch_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Batch {batch_id} not found")))?;

        self.folder_repo.find_by_batch(batch_id).await
    }

    /// Renames a folder. The tree shape is untouched.
    pub async fn rename_folder(&self, folder_id: i64, new_name: &str) -> Result<Folder, AppError> {
        if new_name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let folder = self.folder_repo.rename(folder_id, new_name.trim()).await?;

        info!(folder_id = folder_id, new_name = %folder.name, "Folder renamed");

        Ok(folder)
    }

    /// Deletes a folder and its entire subtree atomically.
    ///
    /// Loads the batch's folders once, plans a post-order deletion over
    /// the in-memory arena and executes the plan in a single transaction,
    /// so either the whole subtree disappears or none of it does.
    pub async fn delete_folder(&self, folder_id: i64) -> Result<(), AppError> {
        let root = self
            .folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        let batch_folders = self.folder_repo.find_by_batch(root.batch_id).await?;
        let children = children_by_parent(&batch_folders);
        let ordered_ids = plan_subtree_deletion(folder_id, &children)?;

        self.folder_repo.delete_all(&ordered_ids).await?;

        info!(
            batch_id = root.batch_id,
            folder_id = folder_id,
            deleted = ordered_ids.len(),
            "Folder subtree deleted"
        );

        Ok(())
    }
}
