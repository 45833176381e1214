//! API key handling for the Spoonacular API.
//!
//! Spoonacular authenticates every request with an `apiKey` query parameter.
//! The key is optional at start-up so the server can still come up and tell
//! the user what is missing when a tool is called.

use anyhow::Result;

/// Environment variable the key is read from.
pub const API_KEY_ENV: &str = "SPOONACULAR_API_KEY";

/// User-facing message returned when no key is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "Hata: SPOONACULAR_API_KEY environment variable bulunamadı. Lütfen API anahtarınızı ayarlayın.";

/// Holds the Spoonacular API key, if one was configured.
#[derive(Clone, Default)]
pub struct SpoonacularAuth {
    api_key: Option<String>,
}

impl SpoonacularAuth {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn from_env() -> Self {
        let auth = Self::new(std::env::var(API_KEY_ENV).ok());
        if auth.has_api_key() {
            tracing::debug!("Loaded Spoonacular API key from {}", API_KEY_ENV);
        } else {
            tracing::warn!("{} is not set; recipe tools will report an error", API_KEY_ENV);
        }
        auth
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) => Ok(key),
            None => anyhow::bail!(MISSING_API_KEY_MESSAGE),
        }
    }

    /// First few characters of the key, safe to log.
    pub fn key_preview(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|k| format!("{}...", k.chars().take(4).collect::<String>()))
    }
}

impl std::fmt::Debug for SpoonacularAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpoonacularAuth")
            .field("api_key", &self.key_preview())
            .finish()
    }
}
