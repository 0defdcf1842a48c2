use crate::ModelError;
use crate::types::require_non_empty;
use crate::types::{MealPlanOption, MealPlanOptionCreationRequestInput};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEvent {
    pub id: String,
    #[serde(default)]
    pub notes: String,
    pub meal_name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub belongs_to_meal_plan: String,
    #[serde(default)]
    pub options: Vec<MealPlanOption>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEventCreationRequestInput {
    pub notes: String,
    pub meal_name: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub options: Vec<MealPlanOptionCreationRequestInput>,
}

impl MealPlanEventCreationRequestInput {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("mealName", &self.meal_name)?;

        if self.starts_at >= self.ends_at {
            return Err(ModelError::validation("startsAt must be before endsAt"));
        }

        for option in &self.options {
            option.validate()?;
        }

        Ok(())
    }
}
