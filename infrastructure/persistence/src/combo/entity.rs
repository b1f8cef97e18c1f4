use serde::Serialize;

use business::domain::combo::model::{Combo, ComboTranslation, PoolComboAssociation};

/// Stored shape of a combo document. Field names follow the upstream wire
/// format so merge writes line up key-for-key across discovery runs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboDocument {
    pub id: String,
    pub uses: Vec<ComboCardUseDocument>,
    pub mana_needed: String,
    pub identity: String,
    pub produces: Vec<ProducedFeatureDocument>,
    pub easy_prerequisites: String,
    pub notable_prerequisites: String,
    pub description: String,
    pub popularity: i64,
    /// Derived from `uses` at serialization time, every time.
    pub card_names: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboCardUseDocument {
    pub card: UsedCardDocument,
    pub quantity: u32,
    pub zone_locations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UsedCardDocument {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ProducedFeatureDocument {
    pub feature: FeatureDocument,
}

#[derive(Debug, Serialize)]
pub struct FeatureDocument {
    pub id: i64,
    pub name: String,
}

impl ComboDocument {
    pub fn from_domain(combo: &Combo) -> Self {
        Self {
            id: combo.id.clone(),
            uses: combo
                .uses
                .iter()
                .map(|combo_use| ComboCardUseDocument {
                    card: UsedCardDocument {
                        id: combo_use.card.id,
                        name: combo_use.card.name.clone(),
                    },
                    quantity: combo_use.quantity,
                    zone_locations: combo_use.zone_locations.clone(),
                })
                .collect(),
            mana_needed: combo.mana_needed.clone(),
            identity: combo.identity.clone(),
            produces: combo
                .produces
                .iter()
                .map(|feature| ProducedFeatureDocument {
                    feature: FeatureDocument {
                        id: feature.id,
                        name: feature.name.clone(),
                    },
                })
                .collect(),
            easy_prerequisites: combo.easy_prerequisites.clone(),
            notable_prerequisites: combo.notable_prerequisites.clone(),
            description: combo.description.clone(),
            popularity: combo.popularity,
            card_names: combo.card_names(),
        }
    }
}

/// Stored shape of a pool association document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolComboDocument {
    pub id: String,
    pub card_names: Vec<String>,
}

impl PoolComboDocument {
    pub fn from_domain(association: &PoolComboAssociation) -> Self {
        Self {
            id: association.id.clone(),
            card_names: association.card_names.clone(),
        }
    }
}

/// Merge patch carrying only the translated fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPatch {
    pub description_ja: String,
    pub notable_prerequisites_ja: String,
}

impl TranslationPatch {
    pub fn from_domain(translation: &ComboTranslation) -> Self {
        Self {
            description_ja: translation.description_ja.clone(),
            notable_prerequisites_ja: translation.notable_prerequisites_ja.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::combo::model::{ComboCardUse, UsedCard};

    fn combo() -> Combo {
        Combo {
            id: "450".to_string(),
            uses: vec![
                ComboCardUse {
                    card: UsedCard {
                        id: 1,
                        name: "Basalt Monolith".to_string(),
                    },
                    quantity: 1,
                    zone_locations: vec!["B".to_string()],
                },
                ComboCardUse {
                    card: UsedCard {
                        id: 2,
                        name: "Rings of Brighthearth".to_string(),
                    },
                    quantity: 1,
                    zone_locations: vec!["B".to_string()],
                },
            ],
            mana_needed: "{2}".to_string(),
            identity: "c".to_string(),
            produces: vec![],
            easy_prerequisites: String::new(),
            notable_prerequisites: "All permanents untapped.".to_string(),
            description: "Tap {T} to add {C}.".to_string(),
            popularity: 4200,
        }
    }

    #[test]
    fn should_serialize_with_wire_format_keys_and_derived_card_names() {
        let value = serde_json::to_value(ComboDocument::from_domain(&combo())).unwrap();

        assert_eq!(value["manaNeeded"], "{2}");
        assert_eq!(value["notablePrerequisites"], "All permanents untapped.");
        assert_eq!(value["uses"][0]["zoneLocations"][0], "B");
        assert_eq!(
            value["cardNames"],
            serde_json::json!(["Basalt Monolith", "Rings of Brighthearth"])
        );
    }

    #[test]
    fn should_recompute_card_names_when_uses_changed() {
        let mut combo = combo();
        combo.uses.truncate(1);

        let value = serde_json::to_value(ComboDocument::from_domain(&combo)).unwrap();

        assert_eq!(value["cardNames"], serde_json::json!(["Basalt Monolith"]));
    }

    #[test]
    fn should_serialize_translation_patch_with_ja_suffix_keys() {
        let patch = TranslationPatch::from_domain(&ComboTranslation {
            description_ja: "説明".to_string(),
            notable_prerequisites_ja: "前提".to_string(),
        });
        let value = serde_json::to_value(patch).unwrap();

        assert_eq!(value["descriptionJa"], "説明");
        assert_eq!(value["notablePrerequisitesJa"], "前提");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
