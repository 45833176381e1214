//! Type definitions for the Spoonacular recipe API.
//!
//! Only the fields the server displays are modelled; everything else in the
//! responses is ignored during deserialization.
//!
//! ## Key Types
//!
//! - [`RecipeResult`] - one hit of `findByIngredients`
//! - [`RecipeIngredient`] - an ingredient as reported inside a result
//! - [`RecipeInformation`] - full recipe record from `/{id}/information`

use serde::{Deserialize, Serialize};

/// A recipe returned by `GET /recipes/findByIngredients`.
///
/// The endpoint returns these in ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResult {
    /// Recipe identifier (positive when present)
    #[serde(default)]
    pub id: Option<i64>,
    /// Recipe title in the API's language
    #[serde(default)]
    pub title: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// How many of the queried ingredients the recipe uses
    #[serde(default)]
    pub used_ingredient_count: u32,
    /// How many ingredients the recipe needs beyond the query
    #[serde(default)]
    pub missed_ingredient_count: u32,
    #[serde(default)]
    pub used_ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub missed_ingredients: Vec<RecipeIngredient>,
}

/// An ingredient entry inside a recipe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    #[serde(default)]
    pub id: Option<i64>,
    /// Normalized ingredient name, e.g. "eggs"
    #[serde(default)]
    pub name: String,
    /// Ingredient line as written in the recipe, e.g. "2 large eggs"
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Full recipe record from `GET /recipes/{id}/information`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    /// Total preparation and cooking time in minutes
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
    /// Instructions, usually HTML
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<RecipeIngredient>,
}
