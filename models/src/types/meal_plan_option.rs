use crate::ModelError;
use crate::types::require_non_empty;
use crate::types::{Meal, User};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanOption {
    pub id: String,
    pub meal: Meal,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub assigned_cook: Option<String>,
    #[serde(default)]
    pub meal_scale: f32,
    #[serde(default)]
    pub chosen: bool,
    #[serde(default)]
    pub tie_broken: bool,
    #[serde(default)]
    pub belongs_to_meal_plan_event: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

/// Carries the whole meal and cook; the request body only wants their IDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanOptionCreationRequestInput {
    pub meal: Meal,
    pub assigned_cook: Option<User>,
    pub notes: String,
    pub meal_scale: f32,
    pub belongs_to_meal_plan_event: Option<String>,
}

impl MealPlanOptionCreationRequestInput {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("meal", &self.meal.id)?;

        if self.meal_scale.is_nan() || self.meal_scale <= 0.0 {
            return Err(ModelError::validation(format!(
                "mealScale must be positive, got {}",
                self.meal_scale
            )));
        }

        Ok(())
    }
}
