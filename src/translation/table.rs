//! Ordered word-substitution tables.
//!
//! A [`TranslationTable`] keeps its entries in definition order. That order is
//! the tie-breaker for the substring fallback in [`TranslationTable::fuzzy`]:
//! the first entry whose key contains the term, or whose key is contained in
//! the term, wins. This is a first-hit heuristic, not a best-match search.

use std::collections::HashMap;

/// An immutable phrase → phrase mapping with a stable iteration order.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TranslationTable {
    /// Builds a table from `(key, value)` pairs.
    ///
    /// Keys are trimmed and lowercased. When two pairs normalize to the same
    /// key, the first one is kept.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for (key, value) in pairs {
            let key = key.as_ref().trim().to_lowercase();
            if key.is_empty() || index.contains_key(&key) {
                tracing::debug!("Skipping empty or duplicate translation key: {:?}", key);
                continue;
            }
            index.insert(key.clone(), entries.len());
            entries.push((key, value.into()));
        }

        Self { entries, index }
    }

    /// Exact lookup of an already-normalized term.
    pub fn exact(&self, term: &str) -> Option<&str> {
        self.index
            .get(term)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Bidirectional substring lookup in definition order.
    ///
    /// An empty term never matches, since every key trivially contains it.
    pub fn fuzzy(&self, term: &str) -> Option<&str> {
        if term.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(key, _)| key.contains(term) || term.contains(key.as_str()))
            .map(|(_, value)| value.as_str())
    }

    /// Exact match first, then the substring fallback.
    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.exact(term).or_else(|| self.fuzzy(term))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
