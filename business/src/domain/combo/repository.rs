use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Combo, ComboTranslation, PoolComboAssociation};

/// Port over the document store. Write-only: the worker upserts and patches
/// combo documents, it never reads them back.
#[async_trait]
pub trait ComboRepository: Send + Sync {
    /// Merge-writes the combo document keyed by `combo.id`. Idempotent under
    /// retry; fields written by earlier passes survive the merge.
    async fn save_combo(&self, combo: &Combo) -> Result<(), RepositoryError>;

    /// Merge-writes the pool association document keyed by the combo id,
    /// scoped to `pool_id`.
    async fn save_pool_association(
        &self,
        pool_id: &str,
        association: &PoolComboAssociation,
    ) -> Result<(), RepositoryError>;

    /// Patches the translated fields of an existing combo document.
    /// Fails with `RepositoryError::NotFound` when the document is missing.
    async fn update_translations(
        &self,
        combo_id: &str,
        translation: &ComboTranslation,
    ) -> Result<(), RepositoryError>;
}
