use async_trait::async_trait;

use super::errors::CardLookupError;
use super::model::LocalizedCard;

/// Service port for looking up localized card data, one name per call.
#[async_trait]
pub trait CardLocalizationService: Send + Sync {
    async fn localize(&self, name: &str) -> Result<LocalizedCard, CardLookupError>;
}
