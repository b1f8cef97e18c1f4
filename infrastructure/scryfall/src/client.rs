use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Shared Scryfall HTTP client configuration.
pub struct ScryfallClient {
    pub client: Client,
    pub base_url: String,
}

impl ScryfallClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Exact-name lookup URL for the canonical English card.
    pub fn named_url(&self, name: &str) -> String {
        format!(
            "{}/cards/named?exact={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// Search URL for the card's Japanese printings, newest first.
    pub fn japanese_printings_url(&self, name: &str) -> String {
        let query = format!("!\"{}\" lang:ja", name);
        format!(
            "{}/cards/search?order=released&unique=prints&q={}",
            self.base_url,
            urlencoding::encode(&query)
        )
    }
}
