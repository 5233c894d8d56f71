use crate::profile::{ActivityLevel, Gender, UserProfile};

/// Harris-Benedict basal metabolic rate, gender-specific. `Other` currently
/// uses the female coefficients, matching the form's mapping.
fn basal_metabolic_rate(profile: &UserProfile) -> f32 {
    match profile.gender {
        Gender::Male => {
            88.362 + 13.397 * profile.weight_kg + 4.799 * profile.height_cm
                - 5.677 * profile.age as f32
        }
        Gender::Female | Gender::Other => {
            447.593 + 9.247 * profile.weight_kg + 3.098 * profile.height_cm
                - 4.330 * profile.age as f32
        }
    }
}

fn activity_multiplier(level: ActivityLevel) -> f32 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}

/// Daily calorie target: BMR scaled by the activity multiplier, then nudged
/// by BMI band (15% deficit above 25, 15% surplus below 18.5). The result
/// becomes the upper calorie bound of the recipe search, not a per-meal
/// constraint.
pub fn calorie_target(profile: &UserProfile, bmi: f32) -> u32 {
    let mut calories = basal_metabolic_rate(profile) * activity_multiplier(profile.activity_level);

    if bmi > 25.0 {
        calories *= 0.85;
    } else if bmi < 18.5 {
        calories *= 1.15;
    }

    calories.round() as u32
}
