use std::collections::HashSet;

use crate::error::ExtractError;
use crate::tokenize::Tokenizer;
use crate::validate::is_valid_word;

/// Collect the deduplicated set of plausible headwords in `text`.
///
/// Segmentation boundary decisions belong entirely to the tokenizer; this
/// only filters and collapses its output. Iteration order of the returned
/// set is unspecified.
pub async fn extract_words(
    text: &str,
    tokenizer: &dyn Tokenizer,
) -> Result<HashSet<String>, ExtractError> {
    let segmented = tokenizer.tokenize(text).await?;

    Ok(segmented
        .split_whitespace()
        .filter(|token| is_valid_word(token))
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct FixedTokenizer(&'static str);

    #[async_trait]
    impl Tokenizer for FixedTokenizer {
        async fn tokenize(&self, _text: &str) -> Result<String, ExtractError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingTokenizer;

    #[async_trait]
    impl Tokenizer for FailingTokenizer {
        async fn tokenize(&self, _text: &str) -> Result<String, ExtractError> {
            Err(ExtractError::Segmenter("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn collapses_duplicate_surface_forms() {
        let tokenizer = FixedTokenizer("猫 が 猫 を");
        let words = extract_words("猫が猫を", &tokenizer).await.unwrap();

        let expected: HashSet<String> = ["猫", "が", "を"].iter().map(|w| w.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[tokio::test]
    async fn drops_punctuation_and_latin_tokens() {
        let tokenizer = FixedTokenizer("猫 123 。 cat 好き");
        let words = extract_words("", &tokenizer).await.unwrap();

        let expected: HashSet<String> = ["猫", "好き"].iter().map(|w| w.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[tokio::test]
    async fn empty_segmenter_output_yields_empty_set() {
        let tokenizer = FixedTokenizer("");
        let words = extract_words("", &tokenizer).await.unwrap();
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn segmenter_failure_propagates() {
        let result = extract_words("猫", &FailingTokenizer).await;
        assert!(matches!(result, Err(ExtractError::Segmenter(_))));
    }
}
