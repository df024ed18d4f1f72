use unicode_normalization::UnicodeNormalization;

/// Normalize raw input (NFKC) so fullwidth/halfwidth variants collapse to
/// one surface form before segmentation.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect()
}
