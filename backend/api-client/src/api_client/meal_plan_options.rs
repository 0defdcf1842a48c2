use super::{ApiClient, require_id};
use crate::ClientError;
use crate::copy::copy_type;

use models::generated;
use models::query_filter;
use models::types::{MealPlanOption, MealPlanOptionCreationRequestInput};
use models::{QueryFilter, QueryFilteredResult};

use reqwest::Method;
use tokio_util::sync::CancellationToken;

const MEAL_PLANS: &str = "meal_plans";
const EVENTS: &str = "events";
const OPTIONS: &str = "options";
const MEAL_PLAN_ID_KEY: &str = "meal_plan.id";
const MEAL_PLAN_EVENT_ID_KEY: &str = "meal_plan_event.id";

impl ApiClient {
    pub async fn create_meal_plan_option(
        &self,
        meal_plan_id: &str,
        meal_plan_event_id: &str,
        input: &MealPlanOptionCreationRequestInput,
        cancel: &CancellationToken,
    ) -> Result<MealPlanOption, ClientError> {
        let mut call = self.start_call("create_meal_plan_option");

        let result = async {
            require_id(MEAL_PLAN_ID_KEY, meal_plan_id)?;
            call.attach(MEAL_PLAN_ID_KEY, meal_plan_id);
            require_id(MEAL_PLAN_EVENT_ID_KEY, meal_plan_event_id)?;
            call.attach(MEAL_PLAN_EVENT_ID_KEY, meal_plan_event_id);

            input.validate()?;

            let body: generated::MealPlanOptionCreationRequestInput = copy_type(input);
            let request = self.build_json_request(
                Method::POST,
                &[MEAL_PLANS, meal_plan_id, EVENTS, meal_plan_event_id, OPTIONS],
                &body,
            )?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "creating meal plan option")
    }

    pub async fn get_meal_plan_options(
        &self,
        meal_plan_id: &str,
        meal_plan_event_id: &str,
        filter: Option<&QueryFilter>,
        cancel: &CancellationToken,
    ) -> Result<QueryFilteredResult<MealPlanOption>, ClientError> {
        let mut call = self.start_call("get_meal_plan_options");
        call.attach_filter(filter);

        let result = async {
            require_id(MEAL_PLAN_ID_KEY, meal_plan_id)?;
            call.attach(MEAL_PLAN_ID_KEY, meal_plan_id);
            require_id(MEAL_PLAN_EVENT_ID_KEY, meal_plan_event_id)?;
            call.attach(MEAL_PLAN_EVENT_ID_KEY, meal_plan_event_id);

            let values = query_filter::to_values(filter);
            let request = self.build_request(
                Method::GET,
                &[MEAL_PLANS, meal_plan_id, EVENTS, meal_plan_event_id, OPTIONS],
                Some(&values),
            )?;
            self.fetch_list(request, filter, &mut call, cancel).await
        }
        .await;

        call.finish(result, "listing meal plan options")
    }
}
