//! # Recipe Finder MCP Library
//!
//! Suggests recipes for a list of ingredients through the Model Context
//! Protocol (MCP), backed by the Spoonacular recipe API. Ingredients arrive
//! in Turkish, are translated into the API's English vocabulary, and the
//! returned titles are translated back for display.
//!
//! ## Modules
//!
//! - [`translation`] - ingredient normalizer and title localizer
//! - [`text`] - slug and HTML clean-up helpers
//! - [`client`] - HTTP client for the Spoonacular API
//! - [`server`] - MCP server exposing the recipe tools
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use mcp_recipe_finder::{RecipeFinderMcpServer, SpoonacularClient, Translations};
//! use mcp_recipe_finder::client::SpoonacularAuth;
//!
//! let client = SpoonacularClient::new(SpoonacularAuth::from_env());
//! let server = RecipeFinderMcpServer::new(
//!     Arc::new(client),
//!     Arc::new(Translations::builtin()),
//! );
//! ```

pub mod client;
pub mod server;
pub mod text;
pub mod translation;

pub use client::SpoonacularClient;
pub use server::RecipeFinderMcpServer;
pub use translation::Translations;
