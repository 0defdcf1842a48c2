use super::ApiClient;
use crate::ClientError;
use crate::copy::copy_type;

use models::generated;
use models::types::{
    ValidIngredientStateIngredient, ValidIngredientStateIngredientCreationRequestInput,
};

use reqwest::Method;
use tokio_util::sync::CancellationToken;

const VALID_INGREDIENT_STATE_INGREDIENTS: &str = "valid_ingredient_state_ingredients";

impl ApiClient {
    pub async fn create_valid_ingredient_state_ingredient(
        &self,
        input: &ValidIngredientStateIngredientCreationRequestInput,
        cancel: &CancellationToken,
    ) -> Result<ValidIngredientStateIngredient, ClientError> {
        let mut call = self.start_call("create_valid_ingredient_state_ingredient");

        let result = async {
            input.validate()?;
            call.attach("valid_ingredient.id", &input.valid_ingredient.id);
            call.attach("valid_ingredient_state.id", &input.valid_ingredient_state.id);

            let body: generated::ValidIngredientStateIngredientCreationRequestInput =
                copy_type(input);
            let request = self.build_json_request(
                Method::POST,
                &[VALID_INGREDIENT_STATE_INGREDIENTS],
                &body,
            )?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "creating valid ingredient state ingredient")
    }
}
