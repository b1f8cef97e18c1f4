use spellbook::client::DEFAULT_BASE_URL;

/// Configuration for the combo discovery service.
pub struct SpellbookConfig {
    pub base_url: String,
}

impl SpellbookConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("SPELLBOOK_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}
