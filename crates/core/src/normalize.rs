//! Text normalization for manuscript lines.

/// Strip punctuation and digits, lowercase the rest.
///
/// Anything that is neither alphabetic nor whitespace is dropped, which also
/// covers the curly quotes and em-dashes found in edited texts. Whitespace is
/// left untouched. Idempotent.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
