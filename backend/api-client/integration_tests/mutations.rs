use crate::helpers::start_server;

use api_client::CancellationToken;
use models::fakes::*;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_household_input_when_created_then_body_carries_fields() {
    let (server, client) = start_server().await;
    let input = build_fake_household_creation_input();
    let household = build_fake_household();

    Mock::given(method("POST"))
        .and(path("/api/v1/households"))
        .and(body_partial_json(json!({
            "name": input.name,
            "addressLine1": input.address_line_1,
            "zipCode": input.zip_code,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": household})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_household(&input, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(created.id, household.id);
}

/// **VALUE**: The completion-condition body sent over the wire has its ingredient list.
///
/// **BUG THIS CATCHES**: Would catch the copy-layer fixup being bypassed at the call site.
#[tokio::test]
async fn given_completion_condition_when_created_then_ingredients_sent_as_objects() {
    // GIVEN: A condition over ingredients 0, 2, 3
    let (server, client) = start_server().await;
    let input = build_fake_recipe_step_completion_condition_creation_input();
    let condition = build_fake_recipe_step_completion_condition();

    Mock::given(method("POST"))
        .and(path("/api/v1/recipes/r-1/steps/s-1/completion_conditions"))
        .and(body_partial_json(json!({
            "ingredientState": input.ingredient_state,
            "ingredients": [
                {"recipeStepIngredient": 0},
                {"recipeStepIngredient": 2},
                {"recipeStepIngredient": 3}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": condition})))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Creating it
    let created = client
        .create_recipe_step_completion_condition("r-1", "s-1", &input, &CancellationToken::new())
        .await
        .unwrap();

    // THEN: The server's record comes back
    assert_eq!(created, condition);
}

#[tokio::test]
async fn given_meal_plan_event_when_created_then_options_sent_with_meal_ids() {
    let (server, client) = start_server().await;
    let input = build_fake_meal_plan_event_creation_input();
    let event = build_fake_meal_plan_event();

    Mock::given(method("POST"))
        .and(path("/api/v1/meal_plans/mp-1/events"))
        .and(body_partial_json(json!({
            "mealName": input.meal_name,
            "options": [
                {"mealID": input.options[0].meal.id},
                {"mealID": input.options[1].meal.id}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": event})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_meal_plan_event("mp-1", &input, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(created.id, event.id);
}

#[tokio::test]
async fn given_meal_plan_option_when_created_then_cook_sent_as_id() {
    let (server, client) = start_server().await;
    let input = build_fake_meal_plan_option_creation_input();
    let cook_id = input.assigned_cook.as_ref().map(|cook| cook.id.clone());
    let option = build_fake_meal_plan_option();

    Mock::given(method("POST"))
        .and(path("/api/v1/meal_plans/mp-1/events/ev-1/options"))
        .and(body_partial_json(json!({
            "mealID": input.meal.id,
            "assignedCook": cook_id,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": option})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_meal_plan_option("mp-1", "ev-1", &input, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(created.id, option.id);
}

#[tokio::test]
async fn given_state_ingredient_when_created_then_references_sent_as_ids() {
    let (server, client) = start_server().await;
    let input = build_fake_valid_ingredient_state_ingredient_creation_input();
    let record = build_fake_valid_ingredient_state_ingredient();

    Mock::given(method("POST"))
        .and(path("/api/v1/valid_ingredient_state_ingredients"))
        .and(body_partial_json(json!({
            "validIngredientID": input.valid_ingredient.id,
            "validIngredientStateID": input.valid_ingredient_state.id,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": record})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_valid_ingredient_state_ingredient(&input, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(created, record);
}

#[tokio::test]
async fn given_partial_update_when_sent_then_only_set_fields_in_body() {
    let (server, client) = start_server().await;
    let household = build_fake_household();
    let input = models::types::HouseholdUpdateRequestInput {
        city: Some("North Haverbrook".to_string()),
        ..Default::default()
    };

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/households/{}", household.id)))
        .and(wiremock::matchers::body_json(json!({"city": "North Haverbrook"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": household})))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client
        .update_household(&household.id, &input, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(updated.id, household.id);
}
