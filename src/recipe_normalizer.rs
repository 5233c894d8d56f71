use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::api_connection::endpoints::{RawRecipe, RecipeSearchResponse, RECIPE_SITE_BASE_URL};

/// A recipe in display form. Built fresh from every response; the previous
/// list is discarded wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub calories: f32,
    pub image: String,
    pub recipe_url: String,
}

/// Zero matching recipes. Surfaced to the user as a "no matches" condition,
/// not as a transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoRecipesFound;

impl fmt::Display for NoRecipesFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No recipes found matching your criteria")
    }
}

impl Error for NoRecipesFound {}

/// Lowercases the title and collapses whitespace runs into single hyphens,
/// matching the canonical recipe-page URL scheme.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn calories_of(raw: &RawRecipe) -> f32 {
    raw.nutrition
        .as_ref()
        .and_then(|nutrition| {
            nutrition
                .nutrients
                .iter()
                .find(|nutrient| nutrient.name == "Calories")
        })
        .map(|nutrient| nutrient.amount)
        .unwrap_or(0.0)
}

fn normalize_recipe(raw: &RawRecipe) -> Recipe {
    Recipe {
        id: raw.id,
        title: raw.title.clone(),
        calories: calories_of(raw),
        image: raw.image.clone(),
        recipe_url: format!(
            "{}/recipes/{}-{}",
            RECIPE_SITE_BASE_URL,
            slugify(&raw.title),
            raw.id
        ),
    }
}

/// Turns a raw search response into the display list, in response order.
/// An empty (or absent) results list is an error for the caller to surface.
pub fn normalize_results(response: &RecipeSearchResponse) -> Result<Vec<Recipe>, NoRecipesFound> {
    if response.results.is_empty() {
        return Err(NoRecipesFound);
    }
    Ok(response.results.iter().map(normalize_recipe).collect())
}
