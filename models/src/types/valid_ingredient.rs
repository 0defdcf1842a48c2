use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidIngredient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub plural_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub warning: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub is_liquid: bool,
    #[serde(default)]
    pub is_protein: bool,
    #[serde(default)]
    pub restrict_to_preparations: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}
