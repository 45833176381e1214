//! Turns a user's comma-separated ingredient list into the query vocabulary
//! of the upstream recipe API.

use super::table::TranslationTable;

/// Normalizes every comma-separated phrase of `raw` and joins them back with
/// commas.
///
/// The output always has as many segments as the input, in the same order.
/// Phrases without a translation are passed through trimmed and lowercased,
/// and empty segments stay empty.
///
/// Running this twice is not guaranteed to be a no-op: an already translated
/// phrase can still hit the substring fallback on a second pass.
pub fn normalize_ingredients(table: &TranslationTable, raw: &str) -> String {
    raw.split(',')
        .map(|phrase| normalize_phrase(table, phrase))
        .collect::<Vec<_>>()
        .join(",")
}

/// Normalizes a single ingredient phrase.
pub fn normalize_phrase(table: &TranslationTable, phrase: &str) -> String {
    let phrase = phrase.trim().to_lowercase();

    match table.lookup(&phrase) {
        Some(translated) => {
            tracing::trace!("Ingredient '{}' -> '{}'", phrase, translated);
            translated.to_string()
        }
        None => phrase,
    }
}

/// Counts the non-empty segments of a normalized ingredient list.
pub fn count_ingredients(normalized: &str) -> usize {
    normalized
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .count()
}
