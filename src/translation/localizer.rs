//! Renders upstream recipe titles and ingredient names back into the
//! user's language, word by word.

use super::table::TranslationTable;

const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', ':', ';',
];

/// Localizes a title or ingredient name.
///
/// The text is lowercased and split on whitespace. Each word loses its
/// leading and trailing punctuation and is looked up in `table`; unmatched
/// words are kept as they are. The words are re-joined with single spaces
/// and only the first character of the result is uppercased.
///
/// Blank input is returned unchanged.
pub fn localize(table: &TranslationTable, text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let words: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .map(|word| localize_word(table, word))
        .collect();

    capitalize_first(&words.join(" "))
}

/// Looks up a single lowercase word, stripping surrounding punctuation.
pub fn localize_word(table: &TranslationTable, word: &str) -> String {
    let word = word.trim_matches(PUNCTUATION);

    table
        .lookup(word)
        .map(str::to_string)
        .unwrap_or_else(|| word.to_string())
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
