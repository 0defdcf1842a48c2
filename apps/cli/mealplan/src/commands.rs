//! Dispatch a parsed command to the API and render the result.

use crate::cli::{Command, HouseholdsCommand, PageArgs, ValidIngredientsCommand};
use crate::error::MealplanError;

use api_client::{ApiClient, CancellationToken};
use models::QueryFilter;

use log::debug;
use serde::Serialize;

impl PageArgs {
    /// The default filter with any flags given on the command line applied.
    pub fn to_filter(self) -> QueryFilter {
        let defaults = QueryFilter::default();
        QueryFilter {
            page: self.page.or(defaults.page),
            limit: self.limit.or(defaults.limit),
            ..defaults
        }
    }
}

/// Run `command` against `client` and return the response as pretty JSON.
pub async fn run(
    command: &Command,
    client: &ApiClient,
    cancel: &CancellationToken,
) -> Result<String, MealplanError> {
    debug!("Running command: {command:?}");

    match command {
        Command::Households(HouseholdsCommand::List(page)) => {
            let filter = page.to_filter();
            render(&client.get_households(Some(&filter), cancel).await?)
        }
        Command::Households(HouseholdsCommand::Get { id }) => {
            render(&client.get_household(id, cancel).await?)
        }
        Command::Households(HouseholdsCommand::Current) => {
            render(&client.get_current_household(cancel).await?)
        }
        Command::ValidIngredients(ValidIngredientsCommand::Search { query, page }) => {
            let filter = page.to_filter();
            render(
                &client
                    .search_for_valid_ingredients(query, Some(&filter), cancel)
                    .await?,
            )
        }
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, MealplanError> {
    Ok(serde_json::to_string_pretty(value)?)
}
