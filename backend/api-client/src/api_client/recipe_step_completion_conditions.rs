use super::{ApiClient, require_id};
use crate::ClientError;
use crate::copy::copy_type;

use models::generated;
use models::types::{
    RecipeStepCompletionCondition, RecipeStepCompletionConditionCreationRequestInput,
};

use reqwest::Method;
use tokio_util::sync::CancellationToken;

const RECIPES: &str = "recipes";
const STEPS: &str = "steps";
const COMPLETION_CONDITIONS: &str = "completion_conditions";
const RECIPE_ID_KEY: &str = "recipe.id";
const RECIPE_STEP_ID_KEY: &str = "recipe_step.id";

impl ApiClient {
    pub async fn create_recipe_step_completion_condition(
        &self,
        recipe_id: &str,
        recipe_step_id: &str,
        input: &RecipeStepCompletionConditionCreationRequestInput,
        cancel: &CancellationToken,
    ) -> Result<RecipeStepCompletionCondition, ClientError> {
        let mut call = self.start_call("create_recipe_step_completion_condition");

        let result = async {
            require_id(RECIPE_ID_KEY, recipe_id)?;
            call.attach(RECIPE_ID_KEY, recipe_id);
            require_id(RECIPE_STEP_ID_KEY, recipe_step_id)?;
            call.attach(RECIPE_STEP_ID_KEY, recipe_step_id);

            input.validate()?;

            let body: generated::RecipeStepCompletionConditionForExistingRecipeCreationRequestInput =
                copy_type(input);
            let request = self.build_json_request(
                Method::POST,
                &[RECIPES, recipe_id, STEPS, recipe_step_id, COMPLETION_CONDITIONS],
                &body,
            )?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "creating recipe step completion condition")
    }
}
