use anyhow::{Context, Result};
use mealcraft::cli::parse_args;
use mealcraft::planner::{DietPlanner, PlanState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mealcraft=warn")),
        )
        .init();

    let cli = parse_args();
    let profile = cli.to_profile();

    let planner =
        DietPlanner::from_env().context("Failed to configure the recipe search client")?;

    let mut state = PlanState::default();
    let seq = planner.issue_submission();
    state.begin(seq);
    let outcome = planner.submit(seq, &profile).await;
    state.apply(outcome);

    if cli.json {
        let plan = serde_json::json!({
            "health_report": &state.report,
            "recipes": &state.recipes,
            "error": &state.error,
        });
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        if let Some(report) = &state.report {
            println!("Health Report");
            println!("  BMI: {:.2}", report.bmi);
            println!("  Status: {}", report.status);
        }
        if state.error.is_none() {
            println!("\nPersonalized Diet Plan");
            for recipe in &state.recipes {
                println!("\n  {}", recipe.title);
                println!("  Calories: {} kcal", recipe.calories);
                println!("  {}", recipe.recipe_url);
            }
        }
    }

    if let Some(message) = state.error {
        anyhow::bail!(message);
    }

    Ok(())
}
