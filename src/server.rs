use std::sync::Arc;
use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};

use crate::client::{RecipeInformation, RecipeResult, SpoonacularClient};
use crate::client::auth::MISSING_API_KEY_MESSAGE;
use crate::text::{recipe_url, strip_html};
use crate::translation::{count_ingredients, Translations};

pub const DEFAULT_RECIPE_COUNT: i32 = 5;
pub const MIN_RECIPE_COUNT: i32 = 1;
pub const MAX_RECIPE_COUNT: i32 = 20;

const UNKNOWN_RECIPE_TITLE: &str = "Bilinmeyen Tarif";

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct FindRecipesParams {
    /// Malzemeleri virgül ile ayırarak yazın (örnek: yumurta,domates,peynir)
    pub ingredients: String,
    /// Kaç tane tarif istiyorsunuz (varsayılan: 5, en az 1, en fazla 20)
    #[serde(default = "default_number")]
    pub number: i32,
}

fn default_number() -> i32 {
    DEFAULT_RECIPE_COUNT
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetRecipeDetailsParams {
    /// Tarif ID'si (find_recipes_by_ingredients sonucundaki ID)
    pub id: i64,
}

/// Bounds a requested recipe count to what the upstream API accepts.
pub fn clamp_recipe_count(number: i32) -> u32 {
    number.clamp(MIN_RECIPE_COUNT, MAX_RECIPE_COUNT) as u32
}

/// Turns a failure into the message shown to the user.
///
/// Anything raised by the HTTP layer is reported as an API error with its
/// message verbatim; everything else is an unexpected error.
pub fn describe_error(error: &anyhow::Error) -> String {
    let upstream = error
        .chain()
        .any(|cause| cause.downcast_ref::<reqwest::Error>().is_some());

    if upstream {
        format!("API isteği sırasında hata oluştu: {}", error)
    } else {
        format!("Beklenmeyen hata: {}", error)
    }
}

/// Renders the `findByIngredients` results as a Markdown listing.
///
/// `query` is the ingredient list as the user typed it.
pub fn format_recipe_list(query: &str, recipes: &[RecipeResult], translations: &Translations) -> String {
    if recipes.is_empty() {
        return format!(
            "'{}' malzemeleri ile hiç tarif bulunamadı. Farklı malzemeler deneyin.",
            query
        );
    }

    let mut text = format!("🍳 **{}** malzemeleri ile bulduğum tarifler:\n\n", query);

    for (i, recipe) in recipes.iter().enumerate() {
        let title = recipe
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| translations.localize(t))
            .unwrap_or_else(|| UNKNOWN_RECIPE_TITLE.to_string());

        text.push_str(&format!("**{}. {}**\n", i + 1, title));
        text.push_str(&format!("   • Kullanılan malzemeler: {}\n", recipe.used_ingredient_count));

        let missing: Vec<String> = recipe
            .missed_ingredients
            .iter()
            .filter(|ingredient| !ingredient.name.trim().is_empty())
            .map(|ingredient| translations.localize(&ingredient.name))
            .collect();
        if missing.is_empty() {
            text.push_str(&format!("   • Eksik malzemeler: {}\n", recipe.missed_ingredient_count));
        } else {
            text.push_str(&format!(
                "   • Eksik malzemeler: {} ({})\n",
                recipe.missed_ingredient_count,
                missing.join(", ")
            ));
        }

        if let Some(id) = recipe.id.filter(|id| *id > 0) {
            text.push_str(&format!("   • Detaylı tarif için ID: {}\n", id));
        }
        if let Some(image) = recipe.image.as_deref().filter(|url| !url.is_empty()) {
            text.push_str(&format!("   • Görsel: {}\n", image));
        }

        text.push('\n');
    }

    text.push_str("\n💡 **İpucu:** Daha iyi sonuçlar için daha fazla malzeme ekleyin!");
    text
}

/// Renders a full recipe with localized title and ingredients and plain-text
/// instructions.
pub fn format_recipe_details(recipe: &RecipeInformation, translations: &Translations) -> String {
    let mut text = format!("🍽️ **{}**\n\n", translations.localize(&recipe.title));

    if let Some(servings) = recipe.servings {
        text.push_str(&format!("   • Porsiyon: {}\n", servings));
    }
    if let Some(minutes) = recipe.ready_in_minutes {
        text.push_str(&format!("   • Hazırlık süresi: {} dakika\n", minutes));
    }
    text.push_str(&format!("   • Tarif bağlantısı: {}\n", recipe_url(&recipe.title, recipe.id)));
    if let Some(source) = recipe.source_url.as_deref().filter(|url| !url.is_empty()) {
        text.push_str(&format!("   • Kaynak: {}\n", source));
    }

    if !recipe.extended_ingredients.is_empty() {
        text.push_str("\n**Malzemeler:**\n");
        for ingredient in &recipe.extended_ingredients {
            let name = translations.localize(&ingredient.name);
            match ingredient.original.as_deref().filter(|o| !o.trim().is_empty()) {
                Some(original) => text.push_str(&format!("- {} ({})\n", name, original)),
                None => text.push_str(&format!("- {}\n", name)),
            }
        }
    }

    text.push_str("\n**Yapılışı:**\n");
    let instructions = recipe
        .instructions
        .as_deref()
        .map(strip_html)
        .filter(|s| !s.is_empty());
    match instructions {
        Some(instructions) => text.push_str(&instructions),
        None => text.push_str("Bu tarif için talimat bulunamadı."),
    }

    text
}

#[derive(Clone)]
pub struct RecipeFinderMcpServer {
    client: Arc<SpoonacularClient>,
    translations: Arc<Translations>,
    tool_router: ToolRouter<RecipeFinderMcpServer>,
}

#[tool_router]
impl RecipeFinderMcpServer {
    pub fn new(client: Arc<SpoonacularClient>, translations: Arc<Translations>) -> Self {
        Self {
            client,
            translations,
            tool_router: Self::tool_router(),
        }
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    #[tool(description = "Malzemelere göre yemek tarifleri bulur")]
    pub async fn find_recipes_by_ingredients(
        &self,
        Parameters(params): Parameters<FindRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        if !self.client.has_api_key() {
            return Ok(CallToolResult::error(vec![Content::text(MISSING_API_KEY_MESSAGE)]));
        }

        let query = params.ingredients.trim();
        let normalized = self.translations.normalize_ingredients(query);
        if count_ingredients(&normalized) == 0 {
            return Ok(CallToolResult::error(vec![Content::text(
                "Lütfen en az bir malzeme girin (örnek: yumurta,domates,peynir).",
            )]));
        }

        let number = clamp_recipe_count(params.number);
        tracing::info!("Searching recipes for '{}' -> '{}' (number={})", query, normalized, number);

        match self.client.find_by_ingredients(&normalized, number).await {
            Ok(recipes) => {
                let text = format_recipe_list(query, &recipes, &self.translations);
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                tracing::error!("Recipe search failed: {}", e);
                Ok(CallToolResult::error(vec![Content::text(describe_error(&e))]))
            }
        }
    }

    #[tool(description = "Tarif ID'sine göre malzemeler ve yapılış dahil tarif detaylarını getirir")]
    pub async fn get_recipe_details(
        &self,
        Parameters(params): Parameters<GetRecipeDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        if !self.client.has_api_key() {
            return Ok(CallToolResult::error(vec![Content::text(MISSING_API_KEY_MESSAGE)]));
        }

        if params.id <= 0 {
            return Ok(CallToolResult::error(vec![Content::text(format!(
                "Geçersiz tarif ID'si: {}",
                params.id
            ))]));
        }

        tracing::info!("Fetching recipe details for id {}", params.id);

        match self.client.get_recipe_information(params.id).await {
            Ok(recipe) => {
                let text = format_recipe_details(&recipe, &self.translations);
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                tracing::error!("Recipe details request failed: {}", e);
                Ok(CallToolResult::error(vec![Content::text(describe_error(&e))]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for RecipeFinderMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("Bu sunucu, verdiğiniz malzemelere göre yemek tarifi önerir. Malzemeleri Türkçe yazabilirsiniz; sorgu Spoonacular API'sine İngilizce olarak iletilir ve tarif başlıkları Türkçeye çevrilerek gösterilir. Araçlar: find_recipes_by_ingredients (malzemelere göre tarif arama) ve get_recipe_details (ID ile tarif detayı).".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
