use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `diet_planner` as returned to callers. Unset columns
/// serialize as JSON null.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DietRecord {
    pub id: i64,
    pub meal_type: Option<String>,
    pub food_item: Option<String>,
    pub protein_g: Option<f64>,
    pub carbohydrates_g: Option<f64>,
    pub fats_g: Option<f64>,
    pub vitamins: Option<String>,
    pub minerals: Option<String>,
    pub calories_kcal: Option<f64>,
    pub quantity_g: Option<f64>,
    pub suitable_for_diabetes: Option<bool>,
    pub suitable_for_bp: Option<bool>,
    pub suitable_for_heart: Option<bool>,
    pub suitable_for_kidney: Option<bool>,
    pub suitable_for_liver: Option<bool>,
    pub suitable_for_obesity: Option<bool>,
    pub suitable_for_anemia: Option<bool>,
}

/// The 16 caller-supplied fields of a create or full-overwrite update.
/// Absent fields land in storage as NULL; no cross-field validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DietPayload {
    pub meal_type: Option<String>,
    pub food_item: Option<String>,
    pub protein_g: Option<f64>,
    pub carbohydrates_g: Option<f64>,
    pub fats_g: Option<f64>,
    pub vitamins: Option<String>,
    pub minerals: Option<String>,
    pub calories_kcal: Option<f64>,
    pub quantity_g: Option<f64>,
    pub suitable_for_diabetes: Option<bool>,
    pub suitable_for_bp: Option<bool>,
    pub suitable_for_heart: Option<bool>,
    pub suitable_for_kidney: Option<bool>,
    pub suitable_for_liver: Option<bool>,
    pub suitable_for_obesity: Option<bool>,
    pub suitable_for_anemia: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}
