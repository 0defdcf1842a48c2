//! Fake values for tests.

use crate::pagination::Pagination;
use crate::types::*;

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

pub fn fake_id() -> String {
    Uuid::new_v4().to_string()
}

/// Whole-second timestamp so values survive a JSON round trip unchanged.
pub fn fake_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 17, 18, 30, 0)
        .single()
        .unwrap_or_default()
}

pub fn build_fake_household() -> Household {
    Household {
        id: fake_id(),
        name: "The Test Kitchen".to_string(),
        contact_phone: "555-0100".to_string(),
        address_line_1: "1 Market St".to_string(),
        address_line_2: String::new(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        country: "USA".to_string(),
        latitude: Some(39.78),
        longitude: Some(-89.65),
        billing_status: "unpaid".to_string(),
        belongs_to_user: fake_id(),
        created_at: fake_time(),
        last_updated_at: None,
        archived_at: None,
    }
}

pub fn build_fake_household_list(count: usize) -> (Vec<Household>, Pagination) {
    let households: Vec<Household> = (0..count).map(|_| build_fake_household()).collect();
    let pagination = Pagination {
        page: 1,
        limit: 50,
        filtered_count: count as u64,
        total_count: count as u64,
    };
    (households, pagination)
}

pub fn build_fake_household_creation_input() -> HouseholdCreationRequestInput {
    let household = build_fake_household();
    HouseholdCreationRequestInput {
        name: household.name,
        contact_phone: household.contact_phone,
        address_line_1: household.address_line_1,
        address_line_2: household.address_line_2,
        city: household.city,
        state: household.state,
        zip_code: household.zip_code,
        country: household.country,
        latitude: household.latitude,
        longitude: household.longitude,
    }
}

pub fn build_fake_user() -> User {
    User {
        id: fake_id(),
        username: "chef_tester".to_string(),
        email_address: "chef@example.com".to_string(),
        first_name: "Julia".to_string(),
        last_name: "Tester".to_string(),
        created_at: fake_time(),
        archived_at: None,
    }
}

pub fn build_fake_meal() -> Meal {
    Meal {
        id: fake_id(),
        name: "Weeknight Chili".to_string(),
        description: "one pot, feeds four".to_string(),
        min_estimated_portions: 4.0,
        eligible_for_meal_plans: true,
        created_by_user: fake_id(),
        created_at: fake_time(),
        archived_at: None,
    }
}

pub fn build_fake_meal_plan_option() -> MealPlanOption {
    MealPlanOption {
        id: fake_id(),
        meal: build_fake_meal(),
        notes: "double the beans".to_string(),
        assigned_cook: Some(fake_id()),
        meal_scale: 1.5,
        chosen: false,
        tie_broken: false,
        belongs_to_meal_plan_event: fake_id(),
        created_at: fake_time(),
        archived_at: None,
    }
}

pub fn build_fake_meal_plan_option_creation_input() -> MealPlanOptionCreationRequestInput {
    MealPlanOptionCreationRequestInput {
        meal: build_fake_meal(),
        assigned_cook: Some(build_fake_user()),
        notes: "double the beans".to_string(),
        meal_scale: 1.5,
        belongs_to_meal_plan_event: Some(fake_id()),
    }
}

pub fn build_fake_meal_plan_event() -> MealPlanEvent {
    MealPlanEvent {
        id: fake_id(),
        notes: String::new(),
        meal_name: "dinner".to_string(),
        starts_at: fake_time(),
        ends_at: fake_time() + Duration::hours(2),
        belongs_to_meal_plan: fake_id(),
        options: vec![build_fake_meal_plan_option(), build_fake_meal_plan_option()],
        created_at: fake_time(),
        archived_at: None,
    }
}

pub fn build_fake_meal_plan_event_creation_input() -> MealPlanEventCreationRequestInput {
    MealPlanEventCreationRequestInput {
        notes: "sunday dinner".to_string(),
        meal_name: "dinner".to_string(),
        starts_at: fake_time(),
        ends_at: fake_time() + Duration::hours(2),
        options: vec![
            build_fake_meal_plan_option_creation_input(),
            build_fake_meal_plan_option_creation_input(),
        ],
    }
}

pub fn build_fake_valid_ingredient() -> ValidIngredient {
    ValidIngredient {
        id: fake_id(),
        name: "chicken thigh".to_string(),
        plural_name: "chicken thighs".to_string(),
        description: String::new(),
        warning: String::new(),
        slug: "chicken-thigh".to_string(),
        is_liquid: false,
        is_protein: true,
        restrict_to_preparations: false,
        created_at: fake_time(),
        last_updated_at: None,
        archived_at: None,
    }
}

pub fn build_fake_valid_ingredient_state() -> ValidIngredientState {
    ValidIngredientState {
        id: fake_id(),
        name: "browned".to_string(),
        past_tense: "browned".to_string(),
        description: String::new(),
        slug: "browned".to_string(),
        attribute_type: "color".to_string(),
        created_at: fake_time(),
        archived_at: None,
    }
}

pub fn build_fake_valid_ingredient_state_ingredient() -> ValidIngredientStateIngredient {
    ValidIngredientStateIngredient {
        id: fake_id(),
        notes: String::new(),
        ingredient_state: build_fake_valid_ingredient_state(),
        ingredient: build_fake_valid_ingredient(),
        created_at: fake_time(),
        archived_at: None,
    }
}

pub fn build_fake_valid_ingredient_state_ingredient_creation_input()
-> ValidIngredientStateIngredientCreationRequestInput {
    ValidIngredientStateIngredientCreationRequestInput {
        notes: "until deeply golden".to_string(),
        valid_ingredient: build_fake_valid_ingredient(),
        valid_ingredient_state: build_fake_valid_ingredient_state(),
    }
}

pub fn build_fake_recipe_step_completion_condition() -> RecipeStepCompletionCondition {
    let id = fake_id();
    let ingredients = (0..2)
        .map(|_| RecipeStepCompletionConditionIngredient {
            id: fake_id(),
            belongs_to_recipe_step_completion_condition: id.clone(),
            recipe_step_ingredient: fake_id(),
            created_at: fake_time(),
        })
        .collect();

    RecipeStepCompletionCondition {
        id,
        ingredient_state: build_fake_valid_ingredient_state(),
        belongs_to_recipe_step: fake_id(),
        notes: String::new(),
        optional: false,
        ingredients,
        created_at: fake_time(),
        archived_at: None,
    }
}

pub fn build_fake_recipe_step_completion_condition_creation_input()
-> RecipeStepCompletionConditionCreationRequestInput {
    RecipeStepCompletionConditionCreationRequestInput {
        ingredient_state: fake_id(),
        belongs_to_recipe_step: fake_id(),
        notes: "check with a thermometer".to_string(),
        optional: false,
        ingredients: vec![0, 2, 3],
    }
}
