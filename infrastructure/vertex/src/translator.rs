use async_trait::async_trait;
use serde_json::json;

use business::domain::card::model::NameDictionaryEntry;
use business::domain::combo::errors::TranslationError;
use business::domain::combo::services::{ComboTranslatorService, TranslationMode};

use crate::client::VertexClient;

/// Sampling setup for terminology-constrained translation rather than
/// creative paraphrase.
const TEMPERATURE: f64 = 0.2;
const MAX_OUTPUT_TOKENS: u32 = 4000;

pub struct ComboTranslatorVertex {
    client: VertexClient,
}

impl ComboTranslatorVertex {
    pub fn new(client: VertexClient) -> Self {
        Self { client }
    }

    fn dictionary_block(dictionary: &[NameDictionaryEntry]) -> String {
        dictionary
            .iter()
            .map(|pair| format!("- \"{}\" -> \"{}\"", pair.en, pair.ja))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn build_system_instruction(
        mode: TranslationMode,
        dictionary: &[NameDictionaryEntry],
    ) -> String {
        let (subject, fallback_guidance, output_noun) = match mode {
            TranslationMode::Description => (
                "combo descriptions",
                "translate it naturally based on MTG's official terminology context.".to_string(),
                "steps",
            ),
            TranslationMode::Prerequisites => (
                "combo \"Prerequisites\" or \"Requirements\"",
                "translate it naturally using MTG's official terminology (e.g., \"battlefield\" as \"戦場\", \"graveyard\" as \"墓地\").".to_string(),
                "prerequisites",
            ),
        };

        format!(
            r#"You are an expert translator specializing in Magic: The Gathering (MTG).
Translate the provided {subject} into Japanese, strictly adhering to the following rules:

1. **Card Name Replacement (Dictionary-based)**:
   Check the dictionary below. If an English card name from the list appears in the text, replace it with the corresponding Japanese card name provided.
   If a card name or term is not in the list, {fallback_guidance}
   <dictionary>
   {dictionary}
   </dictionary>

2. **Preserve Symbols & No Decorations**:
   - Keep all symbols enclosed in curly braces (e.g., {{T}}, {{C}}, {{0}}, {{Q}}) exactly as they are. Do not translate or modify them.
   - **IMPORTANT: Do not enclose card names in brackets like 「 」 or 『 』.** Use the Japanese card names from the dictionary as-is within the sentence.

3. **Output Format**:
   Output ONLY the translated {output_noun}. Do not include any introductory remarks, concluding explanations, or additional decorations.
"#,
            subject = subject,
            fallback_guidance = fallback_guidance,
            dictionary = Self::dictionary_block(dictionary),
            output_noun = output_noun,
        )
    }
}

#[async_trait]
impl ComboTranslatorService for ComboTranslatorVertex {
    async fn translate(
        &self,
        text: &str,
        dictionary: &[NameDictionaryEntry],
        mode: TranslationMode,
    ) -> Result<String, TranslationError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let system_instruction = Self::build_system_instruction(mode, dictionary);

        let body = json!({
            "systemInstruction": {
                "role": "system",
                "parts": [{"text": system_instruction}],
            },
            "contents": [
                {"role": "user", "parts": [{"text": text}]},
            ],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            },
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|err| TranslationError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::HttpStatus(status.as_u16()));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|err| TranslationError::Transport(err.to_string()))?;

        let translated = data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part["text"].as_str());

        match translated {
            Some(translation) => Ok(translation.to_string()),
            None => Err(TranslationError::EmptyGeneration(data.to_string())),
        }
    }
}
