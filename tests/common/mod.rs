#![allow(dead_code)]

use std::sync::Arc;
use mcp_recipe_finder::client::{SpoonacularAuth, SpoonacularClient};
use mcp_recipe_finder::server::RecipeFinderMcpServer;
use mcp_recipe_finder::translation::Translations;
use rmcp::model::CallToolResult;

pub const TEST_API_KEY: &str = "test-key-123";

pub const FIND_BY_INGREDIENTS_BODY: &str = r#"[
    {
        "id": 715415,
        "title": "Grilled Chicken with Cheese",
        "image": "https://img.spoonacular.com/recipes/715415-312x231.jpg",
        "imageType": "jpg",
        "usedIngredientCount": 2,
        "missedIngredientCount": 1,
        "missedIngredients": [
            {"id": 20081, "name": "flour", "original": "1 cup flour", "amount": 1.0, "unit": "cup"}
        ],
        "usedIngredients": [
            {"id": 1123, "name": "eggs", "original": "2 eggs", "amount": 2.0, "unit": ""},
            {"id": 1041009, "name": "cheese", "original": "100g cheese", "amount": 100.0, "unit": "g"}
        ],
        "unusedIngredients": [],
        "likes": 12
    },
    {
        "title": "Creamy Mushroom Soup",
        "usedIngredientCount": 1,
        "missedIngredientCount": 3
    }
]"#;

pub const RECIPE_INFORMATION_BODY: &str = r#"{
    "id": 716429,
    "title": "Tom's Spicy Soup!",
    "image": "https://img.spoonacular.com/recipes/716429-556x370.jpg",
    "servings": 2,
    "readyInMinutes": 45,
    "sourceUrl": "https://example.com/toms-soup",
    "instructions": "<ol><li>Boil <b>water</b>.</li><li>Add the tomatoes.</li></ol>",
    "extendedIngredients": [
        {"id": 11529, "name": "tomatoes", "original": "3 ripe tomatoes", "amount": 3.0, "unit": ""},
        {"id": 11215, "name": "garlic", "original": "2 cloves garlic", "amount": 2.0, "unit": "cloves"}
    ]
}"#;

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub fn test_client(base_url: String) -> SpoonacularClient {
    SpoonacularClient::with_base_url(base_url, SpoonacularAuth::new(Some(TEST_API_KEY.to_string())))
}

pub fn test_server(base_url: String) -> RecipeFinderMcpServer {
    RecipeFinderMcpServer::new(
        Arc::new(test_client(base_url)),
        Arc::new(Translations::builtin()),
    )
}

/// Serialized tool result, for substring assertions on its text content.
pub fn result_json(result: &CallToolResult) -> String {
    serde_json::to_string(result).expect("tool result should serialize")
}
