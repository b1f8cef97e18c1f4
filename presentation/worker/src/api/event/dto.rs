use base64::Engine;
use poem_openapi::Object;
use serde::Deserialize;

use business::domain::card::model::{CardRef, NameDictionaryEntry};
use business::domain::combo::use_cases::translate::TranslateComboItem;

/// Push delivery envelope for one subscription message.
#[derive(Debug, Clone, Object)]
pub struct PushEnvelope {
    pub message: PushMessage,
    pub subscription: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct PushMessage {
    #[oai(rename = "messageId")]
    pub message_id: Option<String>,
    /// Base64-encoded task payload.
    pub data: String,
}

/// Decode failure for an incoming envelope. Always a client error:
/// redelivering an undecodable message would loop forever.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeDecodeError {
    #[error("event.invalid_base64")]
    InvalidBase64,
    #[error("event.invalid_task: {0}")]
    InvalidTask(String),
}

/// Task carried by the envelope data.
#[derive(Debug, Deserialize)]
#[serde(tag = "action")]
pub enum WorkerTask {
    #[serde(rename = "saveCombos")]
    SaveCombos {
        #[serde(rename = "poolId")]
        pool_id: String,
        cards: Vec<CardRefDto>,
    },
    #[serde(rename = "translateCombos")]
    TranslateCombos { combos: Vec<TranslateComboDto> },
    #[serde(rename = "localizeCards")]
    LocalizeCards { names: Vec<String> },
}

impl WorkerTask {
    pub fn from_envelope(envelope: &PushEnvelope) -> Result<Self, EnvelopeDecodeError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(envelope.message.data.as_bytes())
            .map_err(|_| EnvelopeDecodeError::InvalidBase64)?;

        serde_json::from_slice(&bytes)
            .map_err(|err| EnvelopeDecodeError::InvalidTask(err.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct CardRefDto {
    pub id: Option<String>,
    pub name: String,
}

impl CardRefDto {
    pub fn into_domain(self) -> CardRef {
        match self.id {
            Some(id) => CardRef::with_id(id, self.name),
            None => CardRef::new(self.name),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateComboDto {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notable_prerequisites: String,
    #[serde(default)]
    pub name_dictionary: Vec<NameDictionaryDto>,
}

impl TranslateComboDto {
    pub fn into_domain(self) -> TranslateComboItem {
        TranslateComboItem {
            id: self.id,
            description: self.description,
            notable_prerequisites: self.notable_prerequisites,
            name_dictionary: self
                .name_dictionary
                .into_iter()
                .map(|entry| NameDictionaryEntry {
                    en: entry.en,
                    ja: entry.ja,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NameDictionaryDto {
    pub en: String,
    pub ja: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn envelope_with(payload: &str) -> PushEnvelope {
        PushEnvelope {
            message: PushMessage {
                message_id: Some("m-1".to_string()),
                data: base64::engine::general_purpose::STANDARD.encode(payload),
            },
            subscription: Some("projects/p/subscriptions/s".to_string()),
        }
    }

    #[test]
    fn should_decode_save_combos_task() {
        let envelope = envelope_with(
            r#"{
                "action": "saveCombos",
                "poolId": "pool-1",
                "cards": [
                    {"id": "card-1", "name": "Basalt Monolith"},
                    {"name": "Rings of Brighthearth"}
                ]
            }"#,
        );

        let task = WorkerTask::from_envelope(&envelope).unwrap();
        match task {
            WorkerTask::SaveCombos { pool_id, cards } => {
                assert_eq!(pool_id, "pool-1");
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[1].id, None);
            }
            other => panic!("unexpected task: {:?}", other),
        }
    }

    #[test]
    fn should_decode_translate_combos_task_with_dictionary() {
        let envelope = envelope_with(
            r#"{
                "action": "translateCombos",
                "combos": [
                    {
                        "id": "450",
                        "description": "Tap {T} to add {C}.",
                        "notablePrerequisites": "All permanents untapped.",
                        "nameDictionary": [
                            {"en": "Mishra's Bauble", "ja": "ミシュラのガラクタ"}
                        ]
                    }
                ]
            }"#,
        );

        let task = WorkerTask::from_envelope(&envelope).unwrap();
        match task {
            WorkerTask::TranslateCombos { combos } => {
                let item = combos.into_iter().next().unwrap().into_domain();
                assert_eq!(item.id, "450");
                assert_eq!(item.name_dictionary[0].ja, "ミシュラのガラクタ");
            }
            other => panic!("unexpected task: {:?}", other),
        }
    }

    #[test]
    fn should_reject_invalid_base64() {
        let envelope = PushEnvelope {
            message: PushMessage {
                message_id: None,
                data: "not-base64!".to_string(),
            },
            subscription: None,
        };

        assert!(matches!(
            WorkerTask::from_envelope(&envelope).unwrap_err(),
            EnvelopeDecodeError::InvalidBase64
        ));
    }

    #[test]
    fn should_reject_unknown_action() {
        let envelope = envelope_with(r#"{"action": "analyzeCube", "cubeId": "x"}"#);

        assert!(matches!(
            WorkerTask::from_envelope(&envelope).unwrap_err(),
            EnvelopeDecodeError::InvalidTask(_)
        ));
    }
}
