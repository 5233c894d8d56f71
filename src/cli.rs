use clap::Parser;

use crate::profile::{ActivityLevel, Allergy, Condition, DietType, Gender, UserProfile};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Body weight in kilograms
    #[arg(long)]
    pub weight: f32,

    /// Height in centimetres
    #[arg(long)]
    pub height: f32,

    #[arg(long, value_enum)]
    pub gender: Gender,

    #[arg(long, value_enum, default_value_t = ActivityLevel::ModeratelyActive)]
    pub activity: ActivityLevel,

    /// Medical condition, repeatable (e.g. --condition diabetes --condition asthma)
    #[arg(long = "condition", value_enum)]
    pub conditions: Vec<Condition>,

    /// Allergy, repeatable
    #[arg(long = "allergy", value_enum)]
    pub allergies: Vec<Allergy>,

    /// Dietary preference
    #[arg(long = "diet", value_enum, default_value_t = DietType::Both)]
    pub diet_type: DietType,

    /// Print the plan as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            age: self.age,
            weight_kg: self.weight,
            height_cm: self.height,
            gender: self.gender,
            activity_level: self.activity,
            conditions: self.conditions.clone(),
            allergies: self.allergies.clone(),
            diet_type: self.diet_type,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
