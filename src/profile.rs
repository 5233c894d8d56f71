use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

/// Medical conditions the form offers. Only some of them map to a recipe
/// search tag (see `query_builder`); the rest are accepted but unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Condition {
    Diabetes,
    HeartProblems,
    Asthma,
    Cancer,
    Hypertension,
    Obesity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Allergy {
    LactoseIntolerance,
    GlutenIntolerance,
    NutAllergy,
    ShellfishAllergy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DietType {
    Veg,
    NonVeg,
    Both,
}

/// Immutable snapshot of the user's biometric and dietary details, taken at
/// submission time. The whole derivation pipeline (BMI, calorie target,
/// recipe query) reads from this and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f32,
    pub height_cm: f32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub conditions: Vec<Condition>,
    pub allergies: Vec<Allergy>,
    pub diet_type: DietType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    NonPositiveAge,
    NonPositiveWeight,
    NonPositiveHeight,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NonPositiveAge => write!(f, "age must be a positive number of years"),
            ProfileError::NonPositiveWeight => write!(f, "weight must be a positive number of kilograms"),
            ProfileError::NonPositiveHeight => write!(f, "height must be a positive number of centimetres"),
        }
    }
}

impl Error for ProfileError {}

impl UserProfile {
    /// Rejects profiles the closed-form arithmetic cannot handle. A zero or
    /// negative height would make the BMI non-finite, so validation runs
    /// before any metric is computed.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::NonPositiveAge);
        }
        if !(self.weight_kg > 0.0) {
            return Err(ProfileError::NonPositiveWeight);
        }
        if !(self.height_cm > 0.0) {
            return Err(ProfileError::NonPositiveHeight);
        }
        Ok(())
    }
}
