use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;
use tracing::debug;

use super::endpoints::{
    RecipeSearchResponse, API_KEY_ENV_VAR, COMPLEX_SEARCH_PATH, SPOONACULAR_BASE_URL,
};
use crate::query_builder::RecipeQuery;

#[derive(Debug)]
pub enum ApiConnectionError {
    MissingApiKey(String),
    NetworkError(reqwest::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::MissingApiKey(key_name) => {
                write!(f, "API key not found in environment: {}", key_name)
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

/// Thin client around the recipe search endpoint. The key is resolved once
/// at construction instead of being baked into the request path, and the
/// base URL is injectable so tests can point it at a local mock server.
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Reads the API key from `SPOONACULAR_API_KEY` (a `.env` file is
    /// honoured) and targets the production endpoint.
    pub fn from_env() -> Result<Self, ApiConnectionError> {
        dotenv().ok();
        let api_key = env::var(API_KEY_ENV_VAR)
            .map_err(|_| ApiConnectionError::MissingApiKey(API_KEY_ENV_VAR.to_string()))?;
        Ok(Self::new(api_key, SPOONACULAR_BASE_URL))
    }

    /// Issues one GET against `complexSearch`. A non-success status is
    /// returned as `ApiError` with whatever body the service sent.
    pub async fn search_recipes(
        &self,
        query: &RecipeQuery,
    ) -> Result<RecipeSearchResponse, ApiConnectionError> {
        let url = format!("{}{}", self.base_url, COMPLEX_SEARCH_PATH);
        debug!(
            max_calories = query.max_calories,
            diet = ?query.diet,
            "requesting recipe search"
        );

        let response = self
            .client
            .get(&url)
            .query(&query.to_params(&self.api_key))
            .send()
            .await?;

        if response.status().is_success() {
            let search_response = response.json::<RecipeSearchResponse>().await?;
            Ok(search_response)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }
}
