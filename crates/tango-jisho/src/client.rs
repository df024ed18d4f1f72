use async_trait::async_trait;
use serde::Deserialize;

use crate::{DefinitionRecord, Glossary, LookupError};

pub const DEFAULT_API_URL: &str = "https://jisho.org/api/v1/search/words";

/// Client for the Jisho keyword-search API.
#[derive(Clone)]
pub struct JishoClient {
    base_url: String,
    client: reqwest::Client,
}

impl JishoClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for JishoClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl Glossary for JishoClient {
    async fn define(&self, word: &str) -> Result<DefinitionRecord, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("keyword", word)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}

// JSON structures for the search response; everything defaults so a
// sparse entry deserializes instead of failing deep in serde.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(default)]
    japanese: Vec<JapaneseForm>,
    #[serde(default)]
    senses: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct JapaneseForm {
    #[serde(default)]
    reading: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(default)]
    english_definitions: Vec<String>,
}

fn parse_body(body: &str) -> Result<DefinitionRecord, LookupError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    best_match(response)
}

/// Reduce a search response to the first entry's primary reading and the
/// first English gloss of each of its senses.
fn best_match(response: SearchResponse) -> Result<DefinitionRecord, LookupError> {
    let entry = response.data.into_iter().next().ok_or(LookupError::NotFound)?;

    let reading = entry
        .japanese
        .into_iter()
        .next()
        .and_then(|form| form.reading)
        .ok_or_else(|| LookupError::Parse("entry carries no reading".to_string()))?;

    let meanings = entry
        .senses
        .iter()
        .filter_map(|sense| sense.english_definitions.first().cloned())
        .collect();

    Ok(DefinitionRecord { reading, meanings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_entry_and_first_gloss_per_sense() {
        let body = r#"{
            "data": [
                {
                    "japanese": [
                        { "word": "猫", "reading": "ねこ" },
                        { "word": "ネコ", "reading": "ネコ" }
                    ],
                    "senses": [
                        { "english_definitions": ["cat", "felid"] },
                        { "english_definitions": ["shamisen"] }
                    ]
                },
                {
                    "japanese": [{ "reading": "びょう" }],
                    "senses": [{ "english_definitions": ["unrelated"] }]
                }
            ]
        }"#;

        let record = parse_body(body).unwrap();
        assert_eq!(record.reading, "ねこ");
        assert_eq!(record.meanings, vec!["cat", "shamisen"]);
    }

    #[test]
    fn empty_data_is_not_found() {
        let result = parse_body(r#"{ "data": [] }"#);
        assert!(matches!(result, Err(LookupError::NotFound)));
    }

    #[test]
    fn missing_data_field_is_not_found() {
        let result = parse_body(r#"{ "meta": { "status": 200 } }"#);
        assert!(matches!(result, Err(LookupError::NotFound)));
    }

    #[test]
    fn malformed_body_is_parse_error() {
        let result = parse_body("<html>rate limited</html>");
        assert!(matches!(result, Err(LookupError::Parse(_))));
    }

    #[test]
    fn entry_without_reading_is_parse_error() {
        let body = r#"{
            "data": [
                { "japanese": [], "senses": [{ "english_definitions": ["cat"] }] }
            ]
        }"#;

        let result = parse_body(body);
        assert!(matches!(result, Err(LookupError::Parse(_))));
    }

    #[test]
    fn sense_without_glosses_is_skipped() {
        let body = r#"{
            "data": [
                {
                    "japanese": [{ "reading": "ねこ" }],
                    "senses": [
                        { "english_definitions": [] },
                        { "english_definitions": ["cat"] }
                    ]
                }
            ]
        }"#;

        let record = parse_body(body).unwrap();
        assert_eq!(record.meanings, vec!["cat"]);
    }
}
