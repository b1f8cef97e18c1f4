use serde::{Deserialize, Serialize};

/// Reference to a card by its canonical English name.
/// Immutable once constructed from caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRef {
    pub id: Option<String>,
    pub name: String,
}

impl CardRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }
}

/// One substitution rule handed to the translator: an English card name and
/// the Japanese name it must be replaced with. Lives only for the duration of
/// a translation call and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDictionaryEntry {
    pub en: String,
    pub ja: String,
}

/// Localized card data returned by the card lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedCard {
    pub en: String,
    /// Japanese printed name, when the card has a Japanese printing.
    pub ja: Option<String>,
    pub price_usd: Option<String>,
}
