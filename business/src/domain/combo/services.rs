use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::domain::card::model::{CardRef, NameDictionaryEntry};

use super::errors::{DiscoveryError, TranslationError};
use super::model::Combo;

/// Pull-driven sequence of discovered combos. The producer keeps at most one
/// page in flight: the next page is fetched only once the current page's
/// items have been consumed.
pub type ComboStream = Pin<Box<dyn Stream<Item = Result<Combo, DiscoveryError>> + Send>>;

/// Service port for the external combo discovery endpoint.
pub trait ComboDiscoveryService: Send + Sync {
    /// Starts a fresh paginated search over `cards`. Each call re-issues the
    /// initial request; streams are not restartable. Combo ids may recur
    /// across pages, so consumers must persist idempotently.
    fn discover(&self, cards: &[CardRef], page_limit: u32) -> ComboStream;
}

/// Which kind of combo text is being translated. The modes share the
/// translation contract and differ only in supplementary terminology
/// guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationMode {
    Description,
    Prerequisites,
}

/// Service port for constrained Japanese translation of combo text.
#[async_trait]
pub trait ComboTranslatorService: Send + Sync {
    /// Translates `text`, substituting names via `dictionary` and passing
    /// `{...}` symbol tokens through unmodified. Empty input returns an
    /// empty string without calling the backend.
    async fn translate(
        &self,
        text: &str,
        dictionary: &[NameDictionaryEntry],
        mode: TranslationMode,
    ) -> Result<String, TranslationError>;
}
