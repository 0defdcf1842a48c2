use super::{ApiClient, require_id};
use crate::ClientError;
use crate::copy::copy_type;

use models::generated;
use models::types::{MealPlanEvent, MealPlanEventCreationRequestInput};

use reqwest::Method;
use tokio_util::sync::CancellationToken;

const MEAL_PLANS: &str = "meal_plans";
const EVENTS: &str = "events";
const MEAL_PLAN_ID_KEY: &str = "meal_plan.id";

impl ApiClient {
    pub async fn create_meal_plan_event(
        &self,
        meal_plan_id: &str,
        input: &MealPlanEventCreationRequestInput,
        cancel: &CancellationToken,
    ) -> Result<MealPlanEvent, ClientError> {
        let mut call = self.start_call("create_meal_plan_event");

        let result = async {
            require_id(MEAL_PLAN_ID_KEY, meal_plan_id)?;
            call.attach(MEAL_PLAN_ID_KEY, meal_plan_id);

            input.validate()?;

            let body: generated::MealPlanEventCreationRequestInput = copy_type(input);
            let request =
                self.build_json_request(Method::POST, &[MEAL_PLANS, meal_plan_id, EVENTS], &body)?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "creating meal plan event")
    }
}
