use crate::ModelError;
use crate::types::require_non_empty;
use crate::types::{ValidIngredient, ValidIngredientState};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidIngredientStateIngredient {
    pub id: String,
    #[serde(default)]
    pub notes: String,
    pub ingredient_state: ValidIngredientState,
    pub ingredient: ValidIngredient,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidIngredientStateIngredientCreationRequestInput {
    pub notes: String,
    pub valid_ingredient: ValidIngredient,
    pub valid_ingredient_state: ValidIngredientState,
}

impl ValidIngredientStateIngredientCreationRequestInput {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("validIngredient", &self.valid_ingredient.id)?;
        require_non_empty("validIngredientState", &self.valid_ingredient_state.id)
    }
}
