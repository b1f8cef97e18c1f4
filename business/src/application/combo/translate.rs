use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::combo::errors::ComboTranslateError;
use crate::domain::combo::model::ComboTranslation;
use crate::domain::combo::repository::ComboRepository;
use crate::domain::combo::services::{ComboTranslatorService, TranslationMode};
use crate::domain::combo::use_cases::translate::{
    TranslateComboItem, TranslateCombosParams, TranslateCombosUseCase, TranslationReport,
};
use crate::domain::logger::Logger;

pub struct TranslateCombosUseCaseImpl {
    pub translator: Arc<dyn ComboTranslatorService>,
    pub repository: Arc<dyn ComboRepository>,
    pub logger: Arc<dyn Logger>,
}

impl TranslateCombosUseCaseImpl {
    async fn translate_one(&self, item: &TranslateComboItem) -> Result<(), ComboTranslateError> {
        let description_ja = self
            .translator
            .translate(
                &item.description,
                &item.name_dictionary,
                TranslationMode::Description,
            )
            .await?;
        let notable_prerequisites_ja = self
            .translator
            .translate(
                &item.notable_prerequisites,
                &item.name_dictionary,
                TranslationMode::Prerequisites,
            )
            .await?;

        self.repository
            .update_translations(
                &item.id,
                &ComboTranslation {
                    description_ja,
                    notable_prerequisites_ja,
                },
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl TranslateCombosUseCase for TranslateCombosUseCaseImpl {
    async fn execute(&self, params: TranslateCombosParams) -> TranslationReport {
        let mut report = TranslationReport::default();

        // Enrichment over already-persisted data: one failed item must not
        // cost the rest of the batch its translations.
        for item in &params.combos {
            self.logger.info(&format!("Translating combo: {}", item.id));
            match self.translate_one(item).await {
                Ok(()) => report.translated += 1,
                Err(err) => {
                    self.logger
                        .error(&format!("Error translating combo {}: {}", item.id, err));
                    report.failed.push(item.id.clone());
                }
            }
        }

        report
    }
}
