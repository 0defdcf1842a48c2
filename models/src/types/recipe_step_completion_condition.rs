use crate::ModelError;
use crate::types::require_non_empty;
use crate::types::ValidIngredientState;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepCompletionConditionIngredient {
    pub id: String,
    pub belongs_to_recipe_step_completion_condition: String,
    pub recipe_step_ingredient: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepCompletionCondition {
    pub id: String,
    pub ingredient_state: ValidIngredientState,
    pub belongs_to_recipe_step: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub ingredients: Vec<RecipeStepCompletionConditionIngredient>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

/// `ingredients` are positions of the step's ingredients, not record IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepCompletionConditionCreationRequestInput {
    pub ingredient_state: String,
    pub belongs_to_recipe_step: String,
    pub notes: String,
    pub optional: bool,
    pub ingredients: Vec<u64>,
}

impl RecipeStepCompletionConditionCreationRequestInput {
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        require_non_empty("ingredientState", &self.ingredient_state)?;

        if self.ingredients.is_empty() {
            return Err(ModelError::validation(
                "a completion condition needs at least one ingredient",
            ));
        }

        Ok(())
    }
}
