use async_trait::async_trait;

use crate::domain::card::model::NameDictionaryEntry;

pub struct LocalizeCardsParams {
    pub names: Vec<String>,
}

/// Best-effort lookup pass: names that fail to resolve or have no Japanese
/// printing are skipped, so the result may be shorter than the input.
#[async_trait]
pub trait LocalizeCardsUseCase: Send + Sync {
    async fn execute(&self, params: LocalizeCardsParams) -> Vec<NameDictionaryEntry>;
}
