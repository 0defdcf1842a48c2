use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealPlanOptionCreationRequestInput {
    #[serde(rename = "mealID")]
    pub meal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_cook: Option<String>,
    pub notes: String,
    pub meal_scale: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub belongs_to_meal_plan_event: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealPlanEventCreationRequestInput {
    pub notes: String,
    pub meal_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Box<MealPlanOptionCreationRequestInput>>>,
}
