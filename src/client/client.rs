use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use crate::client::{
    auth::SpoonacularAuth,
    types::*,
};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximise used ingredients rather than minimise missing ones.
const RANKING_MAXIMIZE_USED: u8 = 1;

pub struct SpoonacularClient {
    base_url: String,
    client: Client,
    auth: SpoonacularAuth,
}

impl SpoonacularClient {
    pub fn new(auth: SpoonacularAuth) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), auth)
    }

    pub fn with_base_url(base_url: String, auth: SpoonacularAuth) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.auth.has_api_key()
    }

    /// Issues an authenticated GET and decodes the JSON body.
    ///
    /// Transport, status and decoding failures are returned as
    /// `reqwest::Error` with the URL removed, so the API key never ends up
    /// in logs or user-facing messages.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let api_key = self.auth.api_key()?;

        let mut query: Vec<String> = params
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect();
        query.push(format!("apiKey={}", urlencoding::encode(api_key)));

        let url = format!("{}{}?{}", self.base_url, path, query.join("&"));
        tracing::debug!("Making request to {}", path);

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Network error calling {}: {}", path, e);
                e
            })?;

        let status = response.status();
        tracing::debug!("{} response status: {}", path, status);

        let response = response.error_for_status().map_err(|e| {
            tracing::error!("{} failed with status {}", path, status);
            e.without_url()
        })?;

        let body = response.json::<T>().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse {} response: {}", path, e);
            e
        })?;

        Ok(body)
    }

    // Recipe search
    pub async fn find_by_ingredients(&self, ingredients: &str, number: u32) -> Result<Vec<RecipeResult>> {
        let params = [
            ("ingredients", ingredients.to_string()),
            ("number", number.to_string()),
            ("ranking", RANKING_MAXIMIZE_USED.to_string()),
            ("ignorePantry", "true".to_string()),
        ];

        let recipes: Vec<RecipeResult> = self
            .get_json("/recipes/findByIngredients", &params)
            .await?;

        tracing::debug!("Found {} recipes for '{}'", recipes.len(), ingredients);
        Ok(recipes)
    }

    // Recipe details
    pub async fn get_recipe_information(&self, id: i64) -> Result<RecipeInformation> {
        let path = format!("/recipes/{}/information", id);
        let params = [("includeNutrition", "false".to_string())];

        self.get_json(&path, &params).await
    }
}
