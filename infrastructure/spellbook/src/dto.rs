use serde::{Deserialize, Serialize};

use business::domain::card::model::CardRef;
use business::domain::combo::model::{Combo, ComboCardUse, ProducedFeature, UsedCard};

/// Request body of a combo search. Fixed for the lifetime of one paginated
/// traversal; every page request re-sends the same body.
#[derive(Debug, Clone, Serialize)]
pub struct ComboSearchBody {
    pub main: Vec<CardQuantityDto>,
    pub commanders: Vec<CardQuantityDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardQuantityDto {
    pub card: String,
    pub quantity: u32,
}

impl ComboSearchBody {
    /// One entry per distinct card name, quantity normalized to 1.
    pub fn from_cards(cards: &[CardRef]) -> Self {
        let mut main: Vec<CardQuantityDto> = Vec::with_capacity(cards.len());
        for card in cards {
            if main.iter().any(|entry| entry.card == card.name) {
                continue;
            }
            main.push(CardQuantityDto {
                card: card.name.clone(),
                quantity: 1,
            });
        }

        Self {
            main,
            commanders: Vec::new(),
        }
    }
}

/// One page of the paginated search response. Deserialization is the schema
/// check: a payload that does not fit this shape fails the page.
#[derive(Debug, Clone, Deserialize)]
pub struct ComboPageDto {
    pub count: i64,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub results: ComboPageResultsDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComboPageResultsDto {
    pub included: Vec<ComboDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboDto {
    pub id: String,
    pub uses: Vec<ComboCardUseDto>,
    pub mana_needed: String,
    pub identity: String,
    pub produces: Vec<ProducedFeatureWrapperDto>,
    pub easy_prerequisites: String,
    pub notable_prerequisites: String,
    pub description: String,
    pub popularity: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboCardUseDto {
    pub card: UsedCardDto,
    pub quantity: u32,
    pub zone_locations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsedCardDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProducedFeatureWrapperDto {
    pub feature: FeatureDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureDto {
    pub id: i64,
    pub name: String,
}

impl ComboDto {
    pub fn into_domain(self) -> Combo {
        Combo {
            id: self.id,
            uses: self
                .uses
                .into_iter()
                .map(|use_dto| ComboCardUse {
                    card: UsedCard {
                        id: use_dto.card.id,
                        name: use_dto.card.name,
                    },
                    quantity: use_dto.quantity,
                    zone_locations: use_dto.zone_locations,
                })
                .collect(),
            mana_needed: self.mana_needed,
            identity: self.identity,
            produces: self
                .produces
                .into_iter()
                .map(|wrapper| ProducedFeature {
                    id: wrapper.feature.id,
                    name: wrapper.feature.name,
                })
                .collect(),
            easy_prerequisites: self.easy_prerequisites,
            notable_prerequisites: self.notable_prerequisites,
            description: self.description,
            popularity: self.popularity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "count": 1,
        "previous": null,
        "next": "https://backend.commanderspellbook.com/find-my-combos?limit=2&page=2",
        "results": {
            "included": [
                {
                    "id": "450",
                    "uses": [
                        {
                            "card": {"id": 1, "name": "Basalt Monolith"},
                            "quantity": 1,
                            "zoneLocations": ["B"]
                        },
                        {
                            "card": {"id": 2, "name": "Rings of Brighthearth"},
                            "quantity": 1,
                            "zoneLocations": ["B"]
                        }
                    ],
                    "manaNeeded": "{2}",
                    "identity": "c",
                    "produces": [{"feature": {"id": 7, "name": "Infinite colorless mana"}}],
                    "easyPrerequisites": "",
                    "notablePrerequisites": "All permanents untapped.",
                    "description": "Tap {T} to add {C}.",
                    "popularity": 4200
                }
            ]
        }
    }"#;

    #[test]
    fn should_parse_a_full_page() {
        let page: ComboPageDto = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(page.count, 1);
        assert!(page.next.is_some());
        assert_eq!(page.results.included.len(), 1);

        let combo = page.results.included[0].clone().into_domain();
        assert_eq!(combo.id, "450");
        assert_eq!(
            combo.card_names(),
            vec!["Basalt Monolith", "Rings of Brighthearth"]
        );
        assert_eq!(combo.uses[0].zone_locations, vec!["B"]);
        assert_eq!(combo.produces[0].name, "Infinite colorless mana");
        assert_eq!(combo.popularity, 4200);
    }

    #[test]
    fn should_reject_a_page_missing_required_fields() {
        // A combo without `description` does not satisfy the contract.
        let malformed = r#"{
            "count": 1,
            "previous": null,
            "next": null,
            "results": {
                "included": [
                    {
                        "id": "450",
                        "uses": [],
                        "manaNeeded": "",
                        "identity": "c",
                        "produces": [],
                        "easyPrerequisites": "",
                        "notablePrerequisites": "",
                        "popularity": 0
                    }
                ]
            }
        }"#;
        assert!(serde_json::from_str::<ComboPageDto>(malformed).is_err());
    }

    #[test]
    fn should_build_body_with_distinct_cards_and_unit_quantity() {
        let cards = vec![
            CardRef::new("Basalt Monolith"),
            CardRef::new("Rings of Brighthearth"),
            CardRef::new("Basalt Monolith"),
        ];

        let body = ComboSearchBody::from_cards(&cards);

        assert_eq!(body.main.len(), 2);
        assert!(body.main.iter().all(|entry| entry.quantity == 1));
        assert_eq!(body.main[0].card, "Basalt Monolith");
        assert_eq!(body.main[1].card, "Rings of Brighthearth");
        assert!(body.commanders.is_empty());
    }
}
