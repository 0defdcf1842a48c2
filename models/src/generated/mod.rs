//! Request bodies as the API schema defines them.
//!
//! These mirror the server's OpenAPI document field for field and are kept
//! separate from the domain inputs in [`crate::types`]. Nested collections
//! are optional and boxed the way the schema generator emits them. Every
//! field defaults so a body can be assembled from a partial source.

// Schema generator emits boxed collection elements.
#![allow(clippy::vec_box)]

mod households;
mod meal_plans;
mod recipe_steps;
mod valid_ingredients;

pub use households::{HouseholdCreationRequestInput, HouseholdUpdateRequestInput};
pub use meal_plans::{MealPlanEventCreationRequestInput, MealPlanOptionCreationRequestInput};
pub use recipe_steps::{
    RecipeStepCompletionConditionForExistingRecipeCreationRequestInput,
    RecipeStepCompletionConditionIngredientForExistingRecipeCreationRequestInput,
};
pub use valid_ingredients::ValidIngredientStateIngredientCreationRequestInput;
