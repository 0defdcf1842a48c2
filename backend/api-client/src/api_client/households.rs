use super::{ApiClient, require_id};
use crate::ClientError;
use crate::copy::copy_type;

use models::generated;
use models::query_filter;
use models::types::{Household, HouseholdCreationRequestInput, HouseholdUpdateRequestInput};
use models::{QueryFilter, QueryFilteredResult};

use reqwest::Method;
use tokio_util::sync::CancellationToken;

const HOUSEHOLDS: &str = "households";
const CURRENT: &str = "current";
const HOUSEHOLD_ID_KEY: &str = "household.id";

impl ApiClient {
    pub async fn get_household(
        &self,
        household_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Household, ClientError> {
        let mut call = self.start_call("get_household");

        let result = async {
            require_id(HOUSEHOLD_ID_KEY, household_id)?;
            call.attach(HOUSEHOLD_ID_KEY, household_id);

            let request = self.build_request(Method::GET, &[HOUSEHOLDS, household_id], None)?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "getting household")
    }

    /// The household the authenticated session is currently acting in.
    pub async fn get_current_household(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Household, ClientError> {
        let mut call = self.start_call("get_current_household");

        let result = async {
            let request = self.build_request(Method::GET, &[HOUSEHOLDS, CURRENT], None)?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "getting current household")
    }

    /// `None` uses the default filter.
    pub async fn get_households(
        &self,
        filter: Option<&QueryFilter>,
        cancel: &CancellationToken,
    ) -> Result<QueryFilteredResult<Household>, ClientError> {
        let mut call = self.start_call("get_households");
        call.attach_filter(filter);

        let result = async {
            let values = query_filter::to_values(filter);
            let request = self.build_request(Method::GET, &[HOUSEHOLDS], Some(&values))?;
            self.fetch_list(request, filter, &mut call, cancel).await
        }
        .await;

        call.finish(result, "listing households")
    }

    pub async fn create_household(
        &self,
        input: &HouseholdCreationRequestInput,
        cancel: &CancellationToken,
    ) -> Result<Household, ClientError> {
        let mut call = self.start_call("create_household");

        let result = async {
            input.validate()?;

            let body: generated::HouseholdCreationRequestInput = copy_type(input);
            let request = self.build_json_request(Method::POST, &[HOUSEHOLDS], &body)?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "creating household")
    }

    /// An input with no field set is rejected as nil input.
    pub async fn update_household(
        &self,
        household_id: &str,
        input: &HouseholdUpdateRequestInput,
        cancel: &CancellationToken,
    ) -> Result<Household, ClientError> {
        let mut call = self.start_call("update_household");

        let result = async {
            require_id(HOUSEHOLD_ID_KEY, household_id)?;
            call.attach(HOUSEHOLD_ID_KEY, household_id);

            if *input == HouseholdUpdateRequestInput::default() {
                return Err(ClientError::nil_input("update_household"));
            }
            input.validate()?;

            let body: generated::HouseholdUpdateRequestInput = copy_type(input);
            let request =
                self.build_json_request(Method::PUT, &[HOUSEHOLDS, household_id], &body)?;
            self.fetch_data(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "updating household")
    }

    pub async fn archive_household(
        &self,
        household_id: &str,
        cancel: &CancellationToken,
    ) -> Result<(), ClientError> {
        let mut call = self.start_call("archive_household");

        let result = async {
            require_id(HOUSEHOLD_ID_KEY, household_id)?;
            call.attach(HOUSEHOLD_ID_KEY, household_id);

            let request =
                self.build_request(Method::DELETE, &[HOUSEHOLDS, household_id], None)?;
            self.fetch_ack(request, &mut call, cancel).await
        }
        .await;

        call.finish(result, "archiving household")
    }
}
