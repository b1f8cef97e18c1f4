use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::card::use_cases::localize::{LocalizeCardsParams, LocalizeCardsUseCase};
use business::domain::combo::use_cases::save::{SaveCombosParams, SaveCombosUseCase};
use business::domain::combo::use_cases::translate::{TranslateCombosParams, TranslateCombosUseCase};
use business::domain::logger::Logger;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::event::dto::{PushEnvelope, WorkerTask};
use crate::api::tags::ApiTags;

pub struct EventApi {
    save_combos_use_case: Arc<dyn SaveCombosUseCase>,
    translate_combos_use_case: Arc<dyn TranslateCombosUseCase>,
    localize_cards_use_case: Arc<dyn LocalizeCardsUseCase>,
    logger: Arc<dyn Logger>,
}

impl EventApi {
    pub fn new(
        save_combos_use_case: Arc<dyn SaveCombosUseCase>,
        translate_combos_use_case: Arc<dyn TranslateCombosUseCase>,
        localize_cards_use_case: Arc<dyn LocalizeCardsUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            save_combos_use_case,
            translate_combos_use_case,
            localize_cards_use_case,
            logger,
        }
    }
}

/// Event API
///
/// Push-subscription front door. One envelope per request; a non-2xx
/// response tells the deliverer the event is unprocessed and should be
/// redelivered, so only driver failures return 500. Undecodable envelopes
/// are rejected with 400 to avoid a redelivery loop.
#[OpenApi]
impl EventApi {
    /// Handle one pushed event
    #[oai(path = "/events", method = "post", tag = "ApiTags::Events")]
    async fn handle_event(&self, envelope: Json<PushEnvelope>) -> HandleEventResponse {
        self.logger.info(&format!(
            "Received event {} from {}",
            envelope.0.message.message_id.as_deref().unwrap_or("unknown"),
            envelope.0.subscription.as_deref().unwrap_or("unknown"),
        ));

        let task = match WorkerTask::from_envelope(&envelope.0) {
            Ok(task) => task,
            Err(err) => {
                self.logger.error(&format!("Rejecting event: {}", err));
                return HandleEventResponse::BadRequest(Json(ErrorResponse {
                    name: "DecodeError".to_string(),
                    message: err.to_string(),
                }));
            }
        };

        match task {
            WorkerTask::SaveCombos { pool_id, cards } => {
                let params = SaveCombosParams {
                    pool_id,
                    cards: cards.into_iter().map(|card| card.into_domain()).collect(),
                };
                match self.save_combos_use_case.execute(params).await {
                    Ok(_) => HandleEventResponse::NoContent,
                    Err(err) => {
                        let (_, json) = err.into_error_response();
                        HandleEventResponse::InternalError(json)
                    }
                }
            }
            WorkerTask::TranslateCombos { combos } => {
                let params = TranslateCombosParams {
                    combos: combos.into_iter().map(|combo| combo.into_domain()).collect(),
                };
                // Best-effort pass: per-item failures are already contained
                // and logged by the driver.
                let report = self.translate_combos_use_case.execute(params).await;
                self.logger.info(&format!(
                    "Translation pass finished: {} translated, {} failed",
                    report.translated,
                    report.failed.len()
                ));
                HandleEventResponse::NoContent
            }
            WorkerTask::LocalizeCards { names } => {
                let dictionary = self
                    .localize_cards_use_case
                    .execute(LocalizeCardsParams { names })
                    .await;
                self.logger.info(&format!(
                    "Localization pass finished: {} dictionary entries",
                    dictionary.len()
                ));
                HandleEventResponse::NoContent
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum HandleEventResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
