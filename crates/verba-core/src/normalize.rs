use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation dropped before comparison: en-dash, hyphen, parentheses, equals
const STRIPPED_PUNCTUATION: [char; 5] = ['–', '-', '(', ')', '='];

/// Canonical form used for every text comparison.
///
/// Lower-cases, decomposes (NFD) and drops combining marks, then drops
/// [`STRIPPED_PUNCTUATION`]. So `Rōma`, `roma` and `ro-ma` all become `roma`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}
