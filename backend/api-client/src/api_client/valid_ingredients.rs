use super::{ApiClient, require_id};
use crate::ClientError;

use common::ErrorLocation;
use models::query_filter::{self, QUERY_KEY_SEARCH};
use models::types::ValidIngredient;
use models::{QueryFilter, QueryFilteredResult};

use std::panic::Location;

use reqwest::Method;
use tokio_util::sync::CancellationToken;

const VALID_INGREDIENTS: &str = "valid_ingredients";
const SEARCH: &str = "search";
const VALID_INGREDIENT_ID_KEY: &str = "valid_ingredient.id";
const SEARCH_QUERY_KEY: &str = "search.query";

impl ApiClient {
    pub async fn get_valid_ingredient(
        &self,
        valid_ingredient_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ValidIngredient, ClientError> {
        let mut call = self.start_call("get_valid_ingredient");

        let result = async {
            require_id(VALID_INGREDIENT_ID_KEY, valid_ingredient_id)?;
            call.attach(VALID_INGREDIENT_ID_KEY, valid_ingredient_id);

            let request = self.build_request(
                Method::GET,
                &[VALID_INGREDIENTS, valid_ingredient_id],
                None,
            )?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "getting valid ingredient")
    }

    pub async fn get_valid_ingredients(
        &self,
        filter: Option<&QueryFilter>,
        cancel: &CancellationToken,
    ) -> Result<QueryFilteredResult<ValidIngredient>, ClientError> {
        let mut call = self.start_call("get_valid_ingredients");
        call.attach_filter(filter);

        let result = async {
            let values = query_filter::to_values(filter);
            let request = self.build_request(Method::GET, &[VALID_INGREDIENTS], Some(&values))?;
            self.fetch_list(request, filter, &mut call, cancel).await
        }
        .await;

        call.finish(result, "listing valid ingredients")
    }

    /// Full-text search; `query` overrides any search term in `filter`.
    ///
    /// A blank `query` is rejected before any request is built.
    pub async fn search_for_valid_ingredients(
        &self,
        query: &str,
        filter: Option<&QueryFilter>,
        cancel: &CancellationToken,
    ) -> Result<QueryFilteredResult<ValidIngredient>, ClientError> {
        let mut call = self.start_call("search_for_valid_ingredients");
        call.attach(SEARCH_QUERY_KEY, query);
        call.attach_filter(filter);

        let result = async {
            require_search_query(query)?;

            let mut values = query_filter::to_values(filter);
            values.set(QUERY_KEY_SEARCH, query);

            let request = self.build_request(
                Method::GET,
                &[VALID_INGREDIENTS, SEARCH],
                Some(&values),
            )?;
            self.fetch_list(request, filter, &mut call, cancel).await
        }
        .await;

        call.finish(result, "searching valid ingredients")
    }
}

#[track_caller]
fn require_search_query(query: &str) -> Result<(), ClientError> {
    if query.trim().is_empty() {
        return Err(ClientError::Validation {
            message: "search query must not be blank".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
