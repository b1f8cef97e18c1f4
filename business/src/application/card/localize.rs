use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::card::model::NameDictionaryEntry;
use crate::domain::card::services::CardLocalizationService;
use crate::domain::card::use_cases::localize::{LocalizeCardsParams, LocalizeCardsUseCase};
use crate::domain::logger::Logger;

pub struct LocalizeCardsUseCaseImpl {
    pub localization: Arc<dyn CardLocalizationService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LocalizeCardsUseCase for LocalizeCardsUseCaseImpl {
    async fn execute(&self, params: LocalizeCardsParams) -> Vec<NameDictionaryEntry> {
        let mut dictionary = Vec::new();

        // One lookup per name, in caller order. A failed lookup or a card
        // without a Japanese printing yields no entry.
        for name in &params.names {
            match self.localization.localize(name).await {
                Ok(card) => {
                    self.logger
                        .info(&format!("Localized card {}: {:?}", name, card.ja));
                    if let Some(ja) = card.ja {
                        dictionary.push(NameDictionaryEntry { en: card.en, ja });
                    }
                }
                Err(err) => {
                    self.logger
                        .error(&format!("Error localizing card {}: {}", name, err));
                }
            }
        }

        dictionary
    }
}
