use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

use crate::api_connection::{ApiConnectionError, SpoonacularClient};
use crate::calorie_target::calorie_target;
use crate::health_metrics::{health_report, HealthReport};
use crate::profile::{ProfileError, UserProfile};
use crate::query_builder::build_query;
use crate::recipe_normalizer::{normalize_results, NoRecipesFound, Recipe};

/// Everything that can go wrong for one submission. All variants are caught
/// at the planner boundary and surfaced as a message; nothing propagates
/// uncaught past `submit`.
#[derive(Debug)]
pub enum PlanError {
    InvalidProfile(ProfileError),
    Transport {
        status: reqwest::StatusCode,
    },
    NoMatches,
    Unknown(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InvalidProfile(err) => write!(f, "Invalid profile: {}", err),
            PlanError::Transport { .. } => write!(f, "Failed to fetch recipes"),
            PlanError::NoMatches => write!(f, "No recipes found matching your criteria"),
            PlanError::Unknown(message) => {
                if message.is_empty() {
                    write!(f, "Failed to generate diet plan")
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl Error for PlanError {}

impl From<ProfileError> for PlanError {
    fn from(err: ProfileError) -> Self {
        PlanError::InvalidProfile(err)
    }
}

impl From<NoRecipesFound> for PlanError {
    fn from(_: NoRecipesFound) -> Self {
        PlanError::NoMatches
    }
}

impl From<ApiConnectionError> for PlanError {
    fn from(err: ApiConnectionError) -> Self {
        match err {
            // Non-success status from the service is the one transport
            // failure with a fixed user-facing message.
            ApiConnectionError::ApiError { status, .. } => PlanError::Transport { status },
            other => PlanError::Unknown(other.to_string()),
        }
    }
}

/// Result of one submission, tagged with its sequence number so stale
/// responses can be fenced off. The health report is filled in whenever the
/// profile was valid, independent of how the fetch went.
#[derive(Debug)]
pub struct PlanOutcome {
    pub seq: u64,
    pub report: Option<HealthReport>,
    pub result: Result<Vec<Recipe>, PlanError>,
}

/// The values the presentation layer reads: report, recipe list, loading
/// flag, error message. Mutated only through `begin` and `apply`.
#[derive(Debug, Default)]
pub struct PlanState {
    latest_seq: u64,
    pub report: Option<HealthReport>,
    pub recipes: Vec<Recipe>,
    pub loading: bool,
    pub error: Option<String>,
}

impl PlanState {
    /// Marks a new submission as in flight: the loading indicator goes up,
    /// any previous error is cleared, and `seq` becomes the only sequence
    /// number `apply` will accept.
    pub fn begin(&mut self, seq: u64) {
        self.latest_seq = seq;
        self.loading = true;
        self.error = None;
    }

    /// Folds an outcome into the published state. Outcomes from superseded
    /// submissions are discarded, so overlapping requests resolve to
    /// whichever was *issued* last rather than whichever finished last.
    /// Returns whether the outcome was applied.
    pub fn apply(&mut self, outcome: PlanOutcome) -> bool {
        if outcome.seq != self.latest_seq {
            warn!(
                seq = outcome.seq,
                latest = self.latest_seq,
                "discarding stale plan outcome"
            );
            return false;
        }
        self.loading = false;
        if let Some(report) = outcome.report {
            self.report = Some(report);
        }
        match outcome.result {
            Ok(recipes) => {
                self.recipes = recipes;
                self.error = None;
            }
            Err(err) => {
                self.recipes.clear();
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

/// Sequences the whole pipeline: validate, compute metrics, build the
/// query, fetch once, normalize. Owns the HTTP client and hands out
/// sequence numbers for fencing.
pub struct DietPlanner {
    client: SpoonacularClient,
    seq: AtomicU64,
}

impl DietPlanner {
    pub fn new(client: SpoonacularClient) -> Self {
        Self {
            client,
            seq: AtomicU64::new(0),
        }
    }

    pub fn from_env() -> Result<Self, ApiConnectionError> {
        Ok(Self::new(SpoonacularClient::from_env()?))
    }

    /// Hands out the next sequence number. Call this before `submit` and
    /// pass the number to `PlanState::begin` so the state knows which
    /// outcome is current.
    pub fn issue_submission(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Runs one full submission. Never returns an uncaught error; failures
    /// come back inside the outcome with a user-facing message.
    pub async fn submit(&self, seq: u64, profile: &UserProfile) -> PlanOutcome {
        if let Err(err) = profile.validate() {
            return PlanOutcome {
                seq,
                report: None,
                result: Err(err.into()),
            };
        }

        // The health report only depends on the profile, so it is computed
        // and published before the network is touched.
        let report = health_report(profile.weight_kg, profile.height_cm);
        let target = calorie_target(profile, report.bmi);
        let query = build_query(profile, target);
        info!(
            seq,
            bmi = report.bmi,
            calorie_target = target,
            "submitting diet plan request"
        );

        let result = match self.client.search_recipes(&query).await {
            Ok(response) => normalize_results(&response).map_err(PlanError::from),
            Err(err) => Err(err.into()),
        };

        if let Err(err) = &result {
            warn!(seq, error = %err, "diet plan submission failed");
        }

        PlanOutcome {
            seq,
            report: Some(report),
            result,
        }
    }
}
