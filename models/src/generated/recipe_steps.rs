use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeStepCompletionConditionIngredientForExistingRecipeCreationRequestInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_step_ingredient: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeStepCompletionConditionForExistingRecipeCreationRequestInput {
    pub ingredient_state: String,
    pub belongs_to_recipe_step: String,
    pub notes: String,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients:
        Option<Vec<Box<RecipeStepCompletionConditionIngredientForExistingRecipeCreationRequestInput>>>,
}
