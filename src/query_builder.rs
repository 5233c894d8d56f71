use crate::profile::{Allergy, Condition, DietType, UserProfile};

/// How many recipes to request per search.
pub const RESULT_COUNT: u32 = 6;

/// Structured parameter set for one `complexSearch` call. Built once per
/// submission from the profile and the computed calorie target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeQuery {
    pub number: u32,
    pub add_recipe_nutrition: bool,
    pub max_calories: u32,
    pub diet: Option<&'static str>,
    pub intolerances: Vec<&'static str>,
    pub tags: Vec<&'static str>,
}

impl Allergy {
    /// Service-recognized intolerance tokens for this allergy. A nut allergy
    /// expands to two tokens; everything in the vocabulary maps to at least
    /// one.
    fn intolerance_tokens(self) -> &'static [&'static str] {
        match self {
            Allergy::LactoseIntolerance => &["dairy"],
            Allergy::GlutenIntolerance => &["gluten"],
            Allergy::NutAllergy => &["peanut", "tree-nut"],
            Allergy::ShellfishAllergy => &["shellfish"],
        }
    }
}

impl Condition {
    /// Recipe tag for this condition, if the service has one. Asthma and
    /// Cancer have no dietary tag and contribute nothing to the query.
    fn tag(self) -> Option<&'static str> {
        match self {
            Condition::Diabetes => Some("low-sugar"),
            Condition::HeartProblems => Some("low-fat"),
            Condition::Hypertension => Some("low-sodium"),
            Condition::Obesity => Some("low-calorie"),
            Condition::Asthma | Condition::Cancer => None,
        }
    }
}

/// Maps a profile and calorie target onto search parameters.
///
/// Only `Veg` adds a diet restriction; the service has no
/// "non-vegetarian" filter, so `NonVeg` and `Both` send none.
pub fn build_query(profile: &UserProfile, calorie_target: u32) -> RecipeQuery {
    let diet = match profile.diet_type {
        DietType::Veg => Some("vegetarian"),
        DietType::NonVeg | DietType::Both => None,
    };

    let intolerances: Vec<&'static str> = profile
        .allergies
        .iter()
        .flat_map(|allergy| allergy.intolerance_tokens().iter().copied())
        .collect();

    let tags: Vec<&'static str> = profile
        .conditions
        .iter()
        .filter_map(|condition| condition.tag())
        .collect();

    RecipeQuery {
        number: RESULT_COUNT,
        add_recipe_nutrition: true,
        max_calories: calorie_target,
        diet,
        intolerances,
        tags,
    }
}

impl RecipeQuery {
    /// Flattens the query into `(name, value)` pairs for the HTTP client.
    /// Empty intolerance and tag lists are omitted entirely rather than sent
    /// as empty parameters.
    pub fn to_params(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apiKey", api_key.to_string()),
            ("number", self.number.to_string()),
            ("addRecipeNutrition", self.add_recipe_nutrition.to_string()),
            ("maxCalories", self.max_calories.to_string()),
        ];
        if let Some(diet) = self.diet {
            params.push(("diet", diet.to_string()));
        }
        if !self.intolerances.is_empty() {
            params.push(("intolerances", self.intolerances.join(",")));
        }
        if !self.tags.is_empty() {
            params.push(("tags", self.tags.join(",")));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, Gender};

    fn profile_with(
        diet_type: DietType,
        conditions: Vec<Condition>,
        allergies: Vec<Allergy>,
    ) -> UserProfile {
        UserProfile {
            age: 25,
            weight_kg: 70.0,
            height_cm: 170.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::ModeratelyActive,
            conditions,
            allergies,
            diet_type,
        }
    }

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn test_fixed_parameters() {
        let query = build_query(&profile_with(DietType::Both, vec![], vec![]), 2100);
        let params = query.to_params("test-key");
        assert_eq!(param(&params, "apiKey"), Some("test-key"));
        assert_eq!(param(&params, "number"), Some("6"));
        assert_eq!(param(&params, "addRecipeNutrition"), Some("true"));
        assert_eq!(param(&params, "maxCalories"), Some("2100"));
    }

    #[test]
    fn test_veg_adds_vegetarian_restriction() {
        let query = build_query(&profile_with(DietType::Veg, vec![], vec![]), 2100);
        assert_eq!(query.diet, Some("vegetarian"));
        assert_eq!(param(&query.to_params("k"), "diet"), Some("vegetarian"));
    }

    #[test]
    fn test_non_veg_and_both_send_no_diet() {
        for diet_type in [DietType::NonVeg, DietType::Both] {
            let query = build_query(&profile_with(diet_type, vec![], vec![]), 2100);
            assert_eq!(query.diet, None);
            assert_eq!(param(&query.to_params("k"), "diet"), None);
        }
    }

    #[test]
    fn test_nut_allergy_expands_to_two_tokens() {
        let query = build_query(
            &profile_with(DietType::Both, vec![], vec![Allergy::NutAllergy]),
            2100,
        );
        assert_eq!(
            param(&query.to_params("k"), "intolerances"),
            Some("peanut,tree-nut")
        );
    }

    #[test]
    fn test_multiple_allergies_join_in_selection_order() {
        let query = build_query(
            &profile_with(
                DietType::Both,
                vec![],
                vec![Allergy::ShellfishAllergy, Allergy::LactoseIntolerance],
            ),
            2100,
        );
        assert_eq!(
            param(&query.to_params("k"), "intolerances"),
            Some("shellfish,dairy")
        );
    }

    #[test]
    fn test_unmapped_conditions_are_dropped() {
        let query = build_query(
            &profile_with(
                DietType::Both,
                vec![Condition::Diabetes, Condition::Asthma],
                vec![],
            ),
            2100,
        );
        assert_eq!(param(&query.to_params("k"), "tags"), Some("low-sugar"));
    }

    #[test]
    fn test_only_unmapped_conditions_omit_the_parameter() {
        let query = build_query(
            &profile_with(
                DietType::Both,
                vec![Condition::Asthma, Condition::Cancer],
                vec![],
            ),
            2100,
        );
        assert!(query.tags.is_empty());
        assert_eq!(param(&query.to_params("k"), "tags"), None);
    }

    #[test]
    fn test_empty_lists_omit_parameters() {
        let params = build_query(&profile_with(DietType::Both, vec![], vec![]), 2100)
            .to_params("k");
        assert_eq!(param(&params, "intolerances"), None);
        assert_eq!(param(&params, "tags"), None);
    }

    #[test]
    fn test_all_conditions_mapped() {
        let query = build_query(
            &profile_with(
                DietType::Both,
                vec![
                    Condition::Diabetes,
                    Condition::HeartProblems,
                    Condition::Hypertension,
                    Condition::Obesity,
                ],
                vec![],
            ),
            2100,
        );
        assert_eq!(
            param(&query.to_params("k"), "tags"),
            Some("low-sugar,low-fat,low-sodium,low-calorie")
        );
    }
}
