use async_trait::async_trait;

use crate::domain::card::model::NameDictionaryEntry;

/// One stored combo whose text should be translated.
pub struct TranslateComboItem {
    pub id: String,
    pub description: String,
    pub notable_prerequisites: String,
    pub name_dictionary: Vec<NameDictionaryEntry>,
}

pub struct TranslateCombosParams {
    pub combos: Vec<TranslateComboItem>,
}

/// Outcome of a best-effort translation pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub translated: usize,
    /// Ids of items whose translation or update failed.
    pub failed: Vec<String>,
}

#[async_trait]
pub trait TranslateCombosUseCase: Send + Sync {
    /// Translates each item in caller order. A failed item is recorded in
    /// the report and does not stop the pass.
    async fn execute(&self, params: TranslateCombosParams) -> TranslationReport;
}
