use async_trait::async_trait;
use serde::Deserialize;

use business::domain::card::errors::CardLookupError;
use business::domain::card::model::LocalizedCard;
use business::domain::card::services::CardLocalizationService;

use crate::client::ScryfallClient;

#[derive(Debug, Deserialize)]
struct NamedCardDto {
    name: String,
    #[serde(default)]
    prices: PricesDto,
}

#[derive(Debug, Default, Deserialize)]
struct PricesDto {
    usd: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PrintingSearchDto {
    data: Vec<PrintingDto>,
}

#[derive(Debug, Deserialize)]
struct PrintingDto {
    printed_name: Option<String>,
}

pub struct CardLocalizationScryfall {
    client: ScryfallClient,
}

impl CardLocalizationScryfall {
    pub fn new(client: ScryfallClient) -> Self {
        Self { client }
    }

    async fn fetch_named(&self, name: &str) -> Result<NamedCardDto, CardLookupError> {
        let response = self
            .client
            .client
            .get(self.client.named_url(name))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|err| CardLookupError::Transport(err.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(CardLookupError::NotFound);
        }
        if !status.is_success() {
            return Err(CardLookupError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| CardLookupError::Transport(err.to_string()))?;

        serde_json::from_slice(&bytes)
            .map_err(|err| CardLookupError::SchemaViolation(err.to_string()))
    }

    /// Newest Japanese printed name, if the card ever had a Japanese
    /// printing. The search endpoint answers 404 for zero matches.
    async fn fetch_japanese_name(&self, name: &str) -> Result<Option<String>, CardLookupError> {
        let response = self
            .client
            .client
            .get(self.client.japanese_printings_url(name))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|err| CardLookupError::Transport(err.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CardLookupError::HttpStatus(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| CardLookupError::Transport(err.to_string()))?;

        let search: PrintingSearchDto = serde_json::from_slice(&bytes)
            .map_err(|err| CardLookupError::SchemaViolation(err.to_string()))?;

        Ok(search
            .data
            .into_iter()
            .find_map(|printing| printing.printed_name))
    }
}

#[async_trait]
impl CardLocalizationService for CardLocalizationScryfall {
    async fn localize(&self, name: &str) -> Result<LocalizedCard, CardLookupError> {
        let card = self.fetch_named(name).await?;
        let ja = self.fetch_japanese_name(name).await?;

        Ok(LocalizedCard {
            en: card.name,
            ja,
            price_usd: card.prices.usd,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_named_card_payload() {
        let payload = r#"{
            "name": "Basalt Monolith",
            "prices": {"usd": "1.23", "eur": "0.99"}
        }"#;
        let card: NamedCardDto = serde_json::from_str(payload).unwrap();
        assert_eq!(card.name, "Basalt Monolith");
        assert_eq!(card.prices.usd.as_deref(), Some("1.23"));
    }

    #[test]
    fn should_take_first_printing_with_a_printed_name() {
        let payload = r#"{
            "data": [
                {"printed_name": null},
                {"printed_name": "玄武岩のモノリス"},
                {"printed_name": "ignored"}
            ]
        }"#;
        let search: PrintingSearchDto = serde_json::from_str(payload).unwrap();
        let ja = search
            .data
            .into_iter()
            .find_map(|printing| printing.printed_name);
        assert_eq!(ja.as_deref(), Some("玄武岩のモノリス"));
    }
}
