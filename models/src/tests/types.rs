use crate::fakes::*;
use crate::types::{HouseholdUpdateRequestInput, MealPlanEvent};
use crate::ModelError;

use chrono::Duration;

#[test]
fn given_fake_inputs_when_validated_then_ok() {
    assert!(build_fake_household_creation_input().validate().is_ok());
    assert!(build_fake_meal_plan_option_creation_input().validate().is_ok());
    assert!(build_fake_meal_plan_event_creation_input().validate().is_ok());
    assert!(build_fake_recipe_step_completion_condition_creation_input()
        .validate()
        .is_ok());
    assert!(build_fake_valid_ingredient_state_ingredient_creation_input()
        .validate()
        .is_ok());
}

#[test]
fn given_blank_household_name_when_validated_then_error_names_field() {
    let mut input = build_fake_household_creation_input();
    input.name = "   ".to_string();

    let err = input.validate().unwrap_err();

    assert!(matches!(err, ModelError::Validation { .. }));
    assert!(err.to_string().contains("name is required"), "got: {err}");
}

#[test]
fn given_update_with_no_fields_when_validated_then_ok() {
    assert!(HouseholdUpdateRequestInput::default().validate().is_ok());

    let blank_name = HouseholdUpdateRequestInput {
        name: Some(String::new()),
        ..Default::default()
    };
    assert!(blank_name.validate().is_err());
}

#[test]
fn given_update_when_serialized_then_only_set_fields_sent() {
    let input = HouseholdUpdateRequestInput {
        city: Some("Shelbyville".to_string()),
        ..Default::default()
    };

    let json = serde_json::to_value(&input).unwrap();

    assert_eq!(json, serde_json::json!({"city": "Shelbyville"}));
}

#[test]
fn given_non_positive_meal_scale_when_validated_then_error() {
    let mut input = build_fake_meal_plan_option_creation_input();

    input.meal_scale = 0.0;
    assert!(input.validate().is_err());

    input.meal_scale = f32::NAN;
    assert!(input.validate().is_err());
}

#[test]
fn given_event_ending_before_it_starts_when_validated_then_error() {
    let mut input = build_fake_meal_plan_event_creation_input();
    input.ends_at = input.starts_at - Duration::minutes(1);

    assert!(input.validate().is_err());
}

#[test]
fn given_event_with_invalid_option_when_validated_then_error() {
    let mut input = build_fake_meal_plan_event_creation_input();
    input.options[1].meal.id = String::new();

    assert!(input.validate().is_err());
}

#[test]
fn given_condition_without_ingredients_when_validated_then_error() {
    let mut input = build_fake_recipe_step_completion_condition_creation_input();
    input.ingredients.clear();

    assert!(input.validate().is_err());
}

#[test]
fn given_event_json_when_round_tripped_then_equal() {
    let event = build_fake_meal_plan_event();

    let json = serde_json::to_string(&event).unwrap();
    let back: MealPlanEvent = serde_json::from_str(&json).unwrap();

    assert_eq!(back, event);
    assert!(json.contains("\"mealName\""));
}
