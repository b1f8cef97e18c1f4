use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::combo::model::{Combo, ComboTranslation, PoolComboAssociation};
use business::domain::combo::repository::ComboRepository;
use business::domain::errors::RepositoryError;

use super::entity::{ComboDocument, PoolComboDocument, TranslationPatch};

/// Document store over Postgres JSONB. `data || EXCLUDED.data` is a top-level
/// merge: keys written by earlier passes (translations) survive re-discovery.
pub struct ComboRepositoryPostgres {
    pool: PgPool,
}

impl ComboRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComboRepository for ComboRepositoryPostgres {
    async fn save_combo(&self, combo: &Combo) -> Result<(), RepositoryError> {
        let document = serde_json::to_value(ComboDocument::from_domain(combo))
            .map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO combos (id, data, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (id) DO UPDATE SET
                data = combos.data || EXCLUDED.data,
                updated_at = now()"#,
        )
        .bind(&combo.id)
        .bind(&document)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn save_pool_association(
        &self,
        pool_id: &str,
        association: &PoolComboAssociation,
    ) -> Result<(), RepositoryError> {
        let document = serde_json::to_value(PoolComboDocument::from_domain(association))
            .map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO pool_combos (pool_id, combo_id, data, updated_at)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (pool_id, combo_id) DO UPDATE SET
                data = pool_combos.data || EXCLUDED.data,
                updated_at = now()"#,
        )
        .bind(pool_id)
        .bind(&association.id)
        .bind(&document)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn update_translations(
        &self,
        combo_id: &str,
        translation: &ComboTranslation,
    ) -> Result<(), RepositoryError> {
        let patch = serde_json::to_value(TranslationPatch::from_domain(translation))
            .map_err(|_| RepositoryError::Persistence)?;

        let result = sqlx::query(
            r#"UPDATE combos SET
                data = data || $2,
                updated_at = now()
            WHERE id = $1"#,
        )
        .bind(combo_id)
        .bind(&patch)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        // Translation is a patch of an existing document, not an upsert.
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
