use serde::{Deserialize, Serialize};

/// Base URL of the recipe search API.
pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

/// Path of the recipe search endpoint, relative to the base URL.
pub const COMPLEX_SEARCH_PATH: &str = "/recipes/complexSearch";

/// Base URL of the public recipe pages, used to build canonical links.
pub const RECIPE_SITE_BASE_URL: &str = "https://spoonacular.com";

/// Environment variable the API key is read from.
pub const API_KEY_ENV_VAR: &str = "SPOONACULAR_API_KEY";

/// One `{name, amount}` nutrient entry from the nutrition breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f32,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeNutrition {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

/// A single search hit as the service returns it. The nutrition block is
/// only present when the query asked for it, so it stays optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub nutrition: Option<RecipeNutrition>,
}

/// Top-level `complexSearch` response. A missing `results` key is treated
/// the same as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeSearchResponse {
    #[serde(default)]
    pub results: Vec<RawRecipe>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<u32>,
}
