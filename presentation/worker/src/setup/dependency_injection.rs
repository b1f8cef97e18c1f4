use std::sync::Arc;

use logger::TracingLogger;
use persistence::combo::repository::ComboRepositoryPostgres;

use scryfall::client::ScryfallClient;
use scryfall::localizer::CardLocalizationScryfall;
use spellbook::client::SpellbookClient;
use spellbook::discovery::ComboDiscoverySpellbook;
use vertex::client::VertexClient;
use vertex::translator::ComboTranslatorVertex;

use business::application::card::localize::LocalizeCardsUseCaseImpl;
use business::application::combo::save::SaveCombosUseCaseImpl;
use business::application::combo::translate::TranslateCombosUseCaseImpl;

use crate::config::scryfall_config::ScryfallConfig;
use crate::config::spellbook_config::SpellbookConfig;
use crate::config::vertex_config::VertexConfig;

/// All adapters and use cases, constructed once at process start and shared
/// by reference for the lifetime of the worker.
pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub event_api: crate::api::event::routes::EventApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let combo_repository = Arc::new(ComboRepositoryPostgres::new(pool));

        let spellbook_config = SpellbookConfig::from_env();
        let discovery = Arc::new(ComboDiscoverySpellbook::new(SpellbookClient::new(
            spellbook_config.base_url,
        )));

        let vertex_config = VertexConfig::from_env();
        let translator = Arc::new(ComboTranslatorVertex::new(VertexClient::new(
            vertex_config.project_id,
            vertex_config.location,
            vertex_config.model,
            vertex_config.access_token,
        )));

        let scryfall_config = ScryfallConfig::from_env();
        let localization = Arc::new(CardLocalizationScryfall::new(ScryfallClient::new(
            scryfall_config.base_url,
        )));

        // Use cases
        let save_combos_use_case = Arc::new(SaveCombosUseCaseImpl {
            discovery,
            repository: combo_repository.clone(),
            logger: logger.clone(),
        });
        let translate_combos_use_case = Arc::new(TranslateCombosUseCaseImpl {
            translator,
            repository: combo_repository,
            logger: logger.clone(),
        });
        let localize_cards_use_case = Arc::new(LocalizeCardsUseCaseImpl {
            localization,
            logger: logger.clone(),
        });

        let event_api = crate::api::event::routes::EventApi::new(
            save_combos_use_case,
            translate_combos_use_case,
            localize_cards_use_case,
            logger,
        );

        Ok(Self {
            health_api,
            event_api,
        })
    }
}
