//! Hand-written domain types.
//!
//! Creation inputs are what callers build; `validate()` rejects obviously
//! incomplete values before any request leaves the process. Request bodies
//! are produced from these by the client's copy layer.

pub mod household;
pub mod meal;
pub mod meal_plan_event;
pub mod meal_plan_option;
pub mod recipe_step_completion_condition;
pub mod user;
pub mod valid_ingredient;
pub mod valid_ingredient_state;
pub mod valid_ingredient_state_ingredient;

pub use household::{Household, HouseholdCreationRequestInput, HouseholdUpdateRequestInput};
pub use meal::Meal;
pub use meal_plan_event::{MealPlanEvent, MealPlanEventCreationRequestInput};
pub use meal_plan_option::{MealPlanOption, MealPlanOptionCreationRequestInput};
pub use recipe_step_completion_condition::{
    RecipeStepCompletionCondition, RecipeStepCompletionConditionCreationRequestInput,
    RecipeStepCompletionConditionIngredient,
};
pub use user::User;
pub use valid_ingredient::ValidIngredient;
pub use valid_ingredient_state::ValidIngredientState;
pub use valid_ingredient_state_ingredient::{
    ValidIngredientStateIngredient, ValidIngredientStateIngredientCreationRequestInput,
};

use crate::ModelError;

#[track_caller]
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} is required")));
    }
    Ok(())
}
