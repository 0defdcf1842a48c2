use crate::cli::{Command, HouseholdsCommand, PageArgs, ValidIngredientsCommand};
use crate::commands::run;
use crate::error::MealplanError;

use api_client::{ApiClient, CancellationToken};
use models::fakes::{build_fake_household, build_fake_household_list};
use models::query_filter::{DEFAULT_QUERY_FILTER_LIMIT, DEFAULT_QUERY_FILTER_PAGE};

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri()).unwrap();
    (server, client)
}

/// **VALUE**: Flags not given on the command line fall back to the default filter.
///
/// **BUG THIS CATCHES**: Would catch `--page` alone wiping out the default limit.
#[test]
fn given_only_page_when_converted_then_default_limit_kept() {
    let filter = PageArgs {
        page: Some(4),
        limit: None,
    }
    .to_filter();

    assert_eq!(filter.page, Some(4));
    assert_eq!(filter.limit, Some(DEFAULT_QUERY_FILTER_LIMIT));

    let defaults = PageArgs::default().to_filter();
    assert_eq!(defaults.page, Some(DEFAULT_QUERY_FILTER_PAGE));
}

/// **VALUE**: `households list` sends the filter and prints the page as JSON.
///
/// **BUG THIS CATCHES**: Would catch the command printing only `data` and
/// dropping the pagination the user needs to request the next page.
#[tokio::test]
async fn given_households_list_when_run_then_prints_data_and_pagination() {
    // GIVEN
    let (server, client) = start().await;
    let (households, pagination) = build_fake_household_list(2);
    Mock::given(method("GET"))
        .and(path("/api/v1/households"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": households,
            "pagination": pagination,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let command = Command::Households(HouseholdsCommand::List(PageArgs {
        page: Some(2),
        limit: None,
    }));

    // WHEN
    let output = run(&command, &client, &CancellationToken::new())
        .await
        .unwrap();

    // THEN
    let printed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed["data"].as_array().unwrap().len(), 2);
    assert!(printed["pagination"].is_object());
    assert!(output.contains('\n'), "output should be pretty-printed");
}

#[tokio::test]
async fn given_households_get_when_run_then_prints_household() {
    // GIVEN
    let (server, client) = start().await;
    let household = build_fake_household();
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/households/{}", household.id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": household })))
        .mount(&server)
        .await;

    // WHEN
    let command = Command::Households(HouseholdsCommand::Get {
        id: household.id.clone(),
    });
    let output = run(&command, &client, &CancellationToken::new())
        .await
        .unwrap();

    // THEN
    let printed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed["id"], json!(household.id));
}

/// **VALUE**: API failures come back as the Client variant, not a panic or
/// an empty document.
#[tokio::test]
async fn given_search_not_found_when_run_then_client_error() {
    // GIVEN
    let (server, client) = start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/valid_ingredients/search"))
        .and(query_param("q", "saffron"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    // WHEN
    let command = Command::ValidIngredients(ValidIngredientsCommand::Search {
        query: "saffron".to_string(),
        page: PageArgs::default(),
    });
    let err = run(&command, &client, &CancellationToken::new())
        .await
        .unwrap_err();

    // THEN
    assert!(matches!(err, MealplanError::Client { .. }));
    assert!(err.to_string().contains("not found"));
}
