use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthStatus::Underweight => "Underweight",
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Overweight => "Overweight",
            HealthStatus::Obese => "Obese",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub bmi: f32,
    pub status: HealthStatus,
}

/// BMI = weight(kg) / height(m)^2, rounded to 2 decimal places.
///
/// Callers must guard against zero or negative height (the result would be
/// infinite or meaningless); `UserProfile::validate` does that before the
/// pipeline reaches this point.
pub fn calculate_bmi(weight_kg: f32, height_cm: f32) -> f32 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 100.0).round() / 100.0
}

/// Classifies a BMI into the four standard bands. Total over all finite
/// values; each boundary belongs to the higher band (18.5 is Healthy,
/// 25 is Overweight, 30 is Obese).
pub fn classify(bmi: f32) -> HealthStatus {
    if bmi < 18.5 {
        HealthStatus::Underweight
    } else if bmi < 25.0 {
        HealthStatus::Healthy
    } else if bmi < 30.0 {
        HealthStatus::Overweight
    } else {
        HealthStatus::Obese
    }
}

pub fn health_report(weight_kg: f32, height_cm: f32) -> HealthReport {
    let bmi = calculate_bmi(weight_kg, height_cm);
    HealthReport {
        bmi,
        status: classify(bmi),
    }
}
