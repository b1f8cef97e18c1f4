use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;

use crate::domain::combo::errors::ComboSaveError;
use crate::domain::combo::repository::ComboRepository;
use crate::domain::combo::services::ComboDiscoveryService;
use crate::domain::combo::use_cases::save::{SaveCombosParams, SaveCombosUseCase};
use crate::domain::logger::Logger;

/// Page size requested from the discovery endpoint. Also the practical upper
/// bound on combos processed per invocation when the upstream serves one page.
const DISCOVERY_PAGE_LIMIT: u32 = 1000;

pub struct SaveCombosUseCaseImpl {
    pub discovery: Arc<dyn ComboDiscoveryService>,
    pub repository: Arc<dyn ComboRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveCombosUseCase for SaveCombosUseCaseImpl {
    async fn execute(&self, params: SaveCombosParams) -> Result<usize, ComboSaveError> {
        self.logger.info(&format!(
            "Discovering combos for pool {} ({} cards)",
            params.pool_id,
            params.cards.len()
        ));

        let mut stream = self.discovery.discover(&params.cards, DISCOVERY_PAGE_LIMIT);
        let mut saved = 0usize;

        // Writes follow stream order: both documents of combo N are written
        // before combo N+1 is pulled, and any failure ends the run.
        while let Some(combo) = stream.try_next().await? {
            self.repository.save_combo(&combo).await?;
            self.repository
                .save_pool_association(&params.pool_id, &combo.pool_association())
                .await?;
            saved += 1;
        }

        self.logger.info(&format!(
            "Completed combos for pool {}: {} saved",
            params.pool_id, saved
        ));

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::card::model::CardRef;
    use crate::domain::combo::errors::DiscoveryError;
    use crate::domain::combo::model::{Combo, ComboCardUse, ComboTranslation, PoolComboAssociation, UsedCard};
    use crate::domain::combo::services::ComboStream;
    use crate::domain::errors::RepositoryError;
    use futures::stream;
    use mockall::mock;

    mock! {
        pub Discovery {}

        impl ComboDiscoveryService for Discovery {
            fn discover(&self, cards: &[CardRef], page_limit: u32) -> ComboStream;
        }
    }

    mock! {
        pub ComboRepo {}

        #[async_trait]
        impl ComboRepository for ComboRepo {
            async fn save_combo(&self, combo: &Combo) -> Result<(), RepositoryError>;
            async fn save_pool_association(
                &self,
                pool_id: &str,
                association: &PoolComboAssociation,
            ) -> Result<(), RepositoryError>;
            async fn update_translations(
                &self,
                combo_id: &str,
                translation: &ComboTranslation,
            ) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_combo(id: &str, card_names: &[&str]) -> Combo {
        Combo {
            id: id.to_string(),
            uses: card_names
                .iter()
                .enumerate()
                .map(|(i, name)| ComboCardUse {
                    card: UsedCard {
                        id: i as i64,
                        name: name.to_string(),
                    },
                    quantity: 1,
                    zone_locations: vec!["B".to_string()],
                })
                .collect(),
            mana_needed: "{2}".to_string(),
            identity: "c".to_string(),
            produces: vec![],
            easy_prerequisites: String::new(),
            notable_prerequisites: String::new(),
            description: String::new(),
            popularity: 1,
        }
    }

    fn stream_of(combos: Vec<Combo>) -> ComboStream {
        Box::pin(stream::iter(combos.into_iter().map(Ok)))
    }

    fn params() -> SaveCombosParams {
        SaveCombosParams {
            pool_id: "pool-1".to_string(),
            cards: vec![CardRef::new("Basalt Monolith")],
        }
    }

    #[tokio::test]
    async fn should_persist_combos_in_stream_order() {
        let combos = vec![
            sample_combo("c1", &["A"]),
            sample_combo("c2", &["B"]),
            sample_combo("c3", &["C"]),
        ];

        let mut mock_discovery = MockDiscovery::new();
        mock_discovery
            .expect_discover()
            .returning(move |_, _| stream_of(combos.clone()));

        let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let mut mock_repo = MockComboRepo::new();
        let combo_events = events.clone();
        mock_repo.expect_save_combo().returning(move |combo| {
            combo_events.lock().unwrap().push(format!("combo:{}", combo.id));
            Ok(())
        });
        let association_events = events.clone();
        mock_repo
            .expect_save_pool_association()
            .returning(move |pool_id, association| {
                association_events
                    .lock()
                    .unwrap()
                    .push(format!("association:{}:{}", pool_id, association.id));
                Ok(())
            });

        let use_case = SaveCombosUseCaseImpl {
            discovery: Arc::new(mock_discovery),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                "combo:c1",
                "association:pool-1:c1",
                "combo:c2",
                "association:pool-1:c2",
                "combo:c3",
                "association:pool-1:c3",
            ]
        );
    }

    #[tokio::test]
    async fn should_write_recomputed_card_names_to_association() {
        let combos = vec![sample_combo(
            "c1",
            &["Basalt Monolith", "Rings of Brighthearth"],
        )];

        let mut mock_discovery = MockDiscovery::new();
        mock_discovery
            .expect_discover()
            .returning(move |_, _| stream_of(combos.clone()));

        let mut mock_repo = MockComboRepo::new();
        mock_repo.expect_save_combo().returning(|_| Ok(()));
        mock_repo
            .expect_save_pool_association()
            .withf(|pool_id, association| {
                pool_id == "pool-1"
                    && association.id == "c1"
                    && association.card_names
                        == vec!["Basalt Monolith", "Rings of Brighthearth"]
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = SaveCombosUseCaseImpl {
            discovery: Arc::new(mock_discovery),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert_eq!(result.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_stop_at_first_persistence_failure() {
        let combos = vec![
            sample_combo("c1", &["A"]),
            sample_combo("c2", &["B"]),
            sample_combo("c3", &["C"]),
        ];

        let mut mock_discovery = MockDiscovery::new();
        mock_discovery
            .expect_discover()
            .returning(move |_, _| stream_of(combos.clone()));

        let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let mut mock_repo = MockComboRepo::new();
        let combo_events = events.clone();
        mock_repo.expect_save_combo().returning(move |combo| {
            combo_events.lock().unwrap().push(format!("combo:{}", combo.id));
            if combo.id == "c2" {
                Err(RepositoryError::Persistence)
            } else {
                Ok(())
            }
        });
        let association_events = events.clone();
        mock_repo
            .expect_save_pool_association()
            .returning(move |_, association| {
                association_events
                    .lock()
                    .unwrap()
                    .push(format!("association:{}", association.id));
                Ok(())
            });

        let use_case = SaveCombosUseCaseImpl {
            discovery: Arc::new(mock_discovery),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ComboSaveError::Persistence(RepositoryError::Persistence)
        ));
        // c3 must never be attempted after c2's write fails.
        assert_eq!(
            *events.lock().unwrap(),
            vec!["combo:c1", "association:c1", "combo:c2"]
        );
    }

    #[tokio::test]
    async fn should_fail_when_discovery_fails_mid_stream() {
        let mut mock_discovery = MockDiscovery::new();
        mock_discovery.expect_discover().returning(|_, _| {
            Box::pin(stream::iter(vec![
                Ok(sample_combo("c1", &["A"])),
                Err(DiscoveryError::SchemaViolation("missing field".to_string())),
            ]))
        });

        let mut mock_repo = MockComboRepo::new();
        mock_repo.expect_save_combo().times(1).returning(|_| Ok(()));
        mock_repo
            .expect_save_pool_association()
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = SaveCombosUseCaseImpl {
            discovery: Arc::new(mock_discovery),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            ComboSaveError::Discovery(DiscoveryError::SchemaViolation(_))
        ));
    }

    #[tokio::test]
    async fn should_save_nothing_for_empty_stream() {
        let mut mock_discovery = MockDiscovery::new();
        mock_discovery
            .expect_discover()
            .returning(|_, _| stream_of(vec![]));

        let mock_repo = MockComboRepo::new();

        let use_case = SaveCombosUseCaseImpl {
            discovery: Arc::new(mock_discovery),
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;
        assert_eq!(result.unwrap(), 0);
    }
}
