use super::{Fixup, try_copy_type};
use crate::error::copy::CopyError;

use models::generated;
use models::types::{
    MealPlanEventCreationRequestInput, MealPlanOptionCreationRequestInput,
    RecipeStepCompletionConditionCreationRequestInput,
    ValidIngredientStateIngredientCreationRequestInput,
};

use std::any::TypeId;
use std::collections::HashMap;

pub(super) fn registry() -> HashMap<TypeId, Fixup> {
    HashMap::from([
        Fixup::new(&["ingredients"], completion_condition_ingredients),
        Fixup::new(&["assignedCook"], meal_plan_option_references),
        Fixup::new(&["options"], meal_plan_event_options),
        Fixup::new(&[], valid_ingredient_state_ingredient_references),
    ])
}

/// Ingredient positions become boxed elements with a 32-bit index.
fn completion_condition_ingredients(
    source: &RecipeStepCompletionConditionCreationRequestInput,
    destination: &mut generated::RecipeStepCompletionConditionForExistingRecipeCreationRequestInput,
) -> Result<(), CopyError> {
    let ingredients = source
        .ingredients
        .iter()
        .map(|&ingredient| {
            let index = i32::try_from(ingredient)
                .map_err(|_| CopyError::narrowing("ingredients", ingredient))?;

            Ok(Box::new(
                generated::RecipeStepCompletionConditionIngredientForExistingRecipeCreationRequestInput {
                    recipe_step_ingredient: Some(index),
                },
            ))
        })
        .collect::<Result<Vec<_>, CopyError>>()?;

    destination.ingredients = Some(ingredients);
    Ok(())
}

fn meal_plan_option_references(
    source: &MealPlanOptionCreationRequestInput,
    destination: &mut generated::MealPlanOptionCreationRequestInput,
) -> Result<(), CopyError> {
    destination.meal_id = source.meal.id.clone();
    destination.assigned_cook = source.assigned_cook.as_ref().map(|cook| cook.id.clone());
    Ok(())
}

/// Each option goes through the copy layer so its own fixup applies.
fn meal_plan_event_options(
    source: &MealPlanEventCreationRequestInput,
    destination: &mut generated::MealPlanEventCreationRequestInput,
) -> Result<(), CopyError> {
    let options = source
        .options
        .iter()
        .map(|option| {
            try_copy_type::<_, generated::MealPlanOptionCreationRequestInput>(option).map(Box::new)
        })
        .collect::<Result<Vec<_>, CopyError>>()?;

    destination.options = Some(options);
    Ok(())
}

fn valid_ingredient_state_ingredient_references(
    source: &ValidIngredientStateIngredientCreationRequestInput,
    destination: &mut generated::ValidIngredientStateIngredientCreationRequestInput,
) -> Result<(), CopyError> {
    destination.valid_ingredient_id = source.valid_ingredient.id.clone();
    destination.valid_ingredient_state_id = source.valid_ingredient_state.id.clone();
    Ok(())
}
