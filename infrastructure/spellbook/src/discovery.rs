use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream;

use business::domain::card::model::CardRef;
use business::domain::combo::errors::DiscoveryError;
use business::domain::combo::model::Combo;
use business::domain::combo::services::{ComboDiscoveryService, ComboStream};

use crate::client::{SpellbookClient, find_my_combos_url};
use crate::dto::{ComboPageDto, ComboSearchBody};

/// Transport for one page request. Split from the cursor logic so pagination
/// can be exercised against a scripted source.
#[async_trait]
pub trait ComboPageSource: Send + Sync {
    async fn fetch_page(
        &self,
        url: &str,
        body: &ComboSearchBody,
    ) -> Result<ComboPageDto, DiscoveryError>;
}

pub struct HttpComboPageSource {
    client: SpellbookClient,
}

impl HttpComboPageSource {
    pub fn new(client: SpellbookClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ComboPageSource for HttpComboPageSource {
    async fn fetch_page(
        &self,
        url: &str,
        body: &ComboSearchBody,
    ) -> Result<ComboPageDto, DiscoveryError> {
        let response = self
            .client
            .client
            .post(url)
            .header("accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| DiscoveryError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| DiscoveryError::Transport(err.to_string()))?;

        serde_json::from_slice(&bytes)
            .map_err(|err| DiscoveryError::SchemaViolation(err.to_string()))
    }
}

/// Combo discovery against the Commander Spellbook paginated search.
pub struct ComboDiscoverySpellbook {
    source: Arc<dyn ComboPageSource>,
    base_url: String,
}

impl ComboDiscoverySpellbook {
    pub fn new(client: SpellbookClient) -> Self {
        let base_url = client.base_url.clone();
        Self {
            source: Arc::new(HttpComboPageSource::new(client)),
            base_url,
        }
    }

    /// Runs the cursor logic over an arbitrary page source.
    pub fn with_source(source: Arc<dyn ComboPageSource>, base_url: String) -> Self {
        Self { source, base_url }
    }
}

/// Cursor state of one traversal: the URL of the page still to fetch, plus
/// the not-yet-yielded remainder of the page already fetched.
struct PageCursor {
    next_url: Option<String>,
    buffered: VecDeque<Combo>,
}

impl ComboDiscoveryService for ComboDiscoverySpellbook {
    fn discover(&self, cards: &[CardRef], page_limit: u32) -> ComboStream {
        let source = self.source.clone();
        let body = ComboSearchBody::from_cards(cards);
        let cursor = PageCursor {
            next_url: Some(find_my_combos_url(&self.base_url, page_limit)),
            buffered: VecDeque::new(),
        };

        Box::pin(stream::try_unfold(cursor, move |mut cursor| {
            let source = source.clone();
            let body = body.clone();
            async move {
                loop {
                    if let Some(combo) = cursor.buffered.pop_front() {
                        return Ok(Some((combo, cursor)));
                    }

                    // Buffer drained: fetch the next page, or finish when the
                    // server returned no continuation.
                    let Some(url) = cursor.next_url.take() else {
                        return Ok(None);
                    };

                    let page = source.fetch_page(&url, &body).await?;
                    cursor.next_url = page.next;
                    cursor.buffered = page
                        .results
                        .included
                        .into_iter()
                        .map(|dto| dto.into_domain())
                        .collect();
                }
            }
        }))
    }
}
