pub mod api_connection;
pub mod calorie_target;
pub mod cli;
pub mod health_metrics;
pub mod planner;
pub mod profile;
pub mod query_builder;
pub mod recipe_normalizer;
