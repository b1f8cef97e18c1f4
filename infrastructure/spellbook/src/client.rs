use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://backend.commanderspellbook.com";

/// Fixed search filter: combos castable with fewer than four colors.
const SEARCH_FILTER: &str = "colors%3C4";

/// Shared Commander Spellbook HTTP client configuration.
pub struct SpellbookClient {
    pub client: Client,
    pub base_url: String,
}

impl SpellbookClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }
}

/// First-page URL of a combo search. Later pages use the `next` URL returned
/// by the server verbatim.
pub fn find_my_combos_url(base_url: &str, page_limit: u32) -> String {
    format!(
        "{}/find-my-combos?limit={}&q={}",
        base_url, page_limit, SEARCH_FILTER
    )
}
