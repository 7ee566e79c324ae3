//! Short description derived from the leading words of a receipt.

/// Join the first `max_words` whitespace-separated words with single spaces,
/// or return `fallback` when the text has no words.
pub fn derive_description(text: &str, max_words: usize, fallback: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().take(max_words).collect();

    if words.is_empty() {
        fallback.to_string()
    } else {
        words.join(" ")
    }
}
