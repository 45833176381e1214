//! # Spoonacular HTTP Client
//!
//! This module provides a thin HTTP client for the Spoonacular recipe API,
//! the upstream service the MCP server proxies.
//!
//! ## Modules
//!
//! - [`auth`] - API key handling
//! - [`client`] - HTTP client with the recipe lookup calls
//! - [`types`] - Response types
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_recipe_finder::client::{SpoonacularAuth, SpoonacularClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SpoonacularClient::new(SpoonacularAuth::from_env());
//!
//! let recipes = client.find_by_ingredients("egg,tomato,cheese", 5).await?;
//! println!("Found {} recipes", recipes.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod types;

pub use auth::SpoonacularAuth;
pub use client::SpoonacularClient;
pub use types::*;
