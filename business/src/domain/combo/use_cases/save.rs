use async_trait::async_trait;

use crate::domain::card::model::CardRef;
use crate::domain::combo::errors::ComboSaveError;

pub struct SaveCombosParams {
    pub pool_id: String,
    pub cards: Vec<CardRef>,
}

#[async_trait]
pub trait SaveCombosUseCase: Send + Sync {
    /// Discovers combos for the card list and persists each one, in stream
    /// order, together with its pool association. Returns the number of
    /// combos saved.
    async fn execute(&self, params: SaveCombosParams) -> Result<usize, ComboSaveError>;
}
