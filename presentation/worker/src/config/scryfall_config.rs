use scryfall::client::DEFAULT_BASE_URL;

/// Configuration for the card localization service.
pub struct ScryfallConfig {
    pub base_url: String,
}

impl ScryfallConfig {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SCRYFALL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}
