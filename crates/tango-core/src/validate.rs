use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").unwrap());
static JAPANESE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Hiragana}|\p{Katakana}|\p{Han}").unwrap());

/// Whether a surface form is a plausible standalone dictionary headword.
///
/// A candidate must be non-empty, carry no punctuation, symbols, or
/// embedded whitespace, and contain at least one Hiragana, Katakana, or
/// Han character.
pub fn is_valid_word(token: &str) -> bool {
    !token.trim().is_empty() && !NON_WORD.is_match(token) && JAPANESE.is_match(token)
}
