//! # Ingredient and Title Translation
//!
//! Bidirectional word substitution between the user's language (Turkish)
//! and the vocabulary of the upstream recipe API (English).
//!
//! - [`normalizer`] maps a comma-separated ingredient list into API query terms
//! - [`localizer`] maps recipe titles and ingredient names back for display
//! - [`table`] holds the ordered lookup tables both directions share
//!
//! All functions here are pure and total: a lookup miss falls back to the
//! input word, so nothing in this module can fail.
//!
//! ## Quick Start
//!
//! ```
//! use mcp_recipe_finder::translation::Translations;
//!
//! let translations = Translations::builtin();
//! assert_eq!(
//!     translations.normalize_ingredients("yumurta,domates,peynir"),
//!     "egg,tomato,cheese"
//! );
//! assert_eq!(
//!     translations.localize("Grilled Chicken with Cheese"),
//!     "Izgara tavuk ile peynir"
//! );
//! ```

pub mod builtin;
pub mod localizer;
pub mod normalizer;
pub mod table;

pub use localizer::localize;
pub use normalizer::{count_ingredients, normalize_ingredients};
pub use table::TranslationTable;

/// The two vocabularies used by the server.
///
/// Built once at start-up and shared read-only between all server instances.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    /// Source language ingredient phrase → upstream query term.
    pub ingredients: TranslationTable,
    /// Upstream recipe word → source language word.
    pub recipe_terms: TranslationTable,
}

impl Translations {
    pub fn new(ingredients: TranslationTable, recipe_terms: TranslationTable) -> Self {
        Self {
            ingredients,
            recipe_terms,
        }
    }

    /// The Turkish/English tables shipped with the server.
    pub fn builtin() -> Self {
        Self::new(
            TranslationTable::new(builtin::INGREDIENTS.iter().copied()),
            TranslationTable::new(builtin::RECIPE_TERMS.iter().copied()),
        )
    }

    pub fn normalize_ingredients(&self, raw: &str) -> String {
        normalizer::normalize_ingredients(&self.ingredients, raw)
    }

    pub fn localize(&self, text: &str) -> String {
        localizer::localize(&self.recipe_terms, text)
    }
}
