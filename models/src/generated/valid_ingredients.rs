use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidIngredientStateIngredientCreationRequestInput {
    pub notes: String,
    #[serde(rename = "validIngredientID")]
    pub valid_ingredient_id: String,
    #[serde(rename = "validIngredientStateID")]
    pub valid_ingredient_state_id: String,
}
