use std::fmt;

use async_trait::async_trait;

pub mod client;

pub use client::JishoClient;

/// Best-match dictionary record for a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionRecord {
    /// Phonetic transcription of the headword.
    pub reading: String,
    /// First English gloss of each sense, in sense order.
    pub meanings: Vec<String>,
}

impl fmt::Display for DefinitionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.reading, self.meanings.join("; "))
    }
}

/// Remote dictionary interface
#[async_trait]
pub trait Glossary: Send + Sync {
    /// Resolve `word` to its best matching dictionary record.
    async fn define(&self, word: &str) -> Result<DefinitionRecord, LookupError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("dictionary service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("no entry matched")]
    NotFound,

    #[error("unexpected response shape: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_renders_reading_and_glosses() {
        let record = DefinitionRecord {
            reading: "ねこ".to_string(),
            meanings: vec!["cat".to_string(), "shamisen".to_string()],
        };

        assert_eq!(record.to_string(), "ねこ [cat; shamisen]");
    }
}
