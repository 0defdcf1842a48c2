use crate::helpers::{bearer, start_server};

use api_client::{CancellationToken, REQUEST_ID_HEADER};
use models::fakes::{build_fake_household, build_fake_household_list};
use models::QueryFilter;

use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: The happy path end to end: URL, auth, request ID, envelope unwrap.
///
/// **BUG THIS CATCHES**: Would catch the API prefix, the Authorization header, or the
/// request ID going missing from real requests.
#[tokio::test]
async fn given_existing_household_when_fetched_then_returns_data() {
    // GIVEN: A server that knows the household
    let (server, client) = start_server().await;
    let household = build_fake_household();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/households/{}", household.id)))
        .and(header("Authorization", bearer().as_str()))
        .and(header_exists(REQUEST_ID_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": household,
            "details": {"currentHouseholdID": household.id, "traceID": "trace-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Fetching it
    let fetched = client
        .get_household(&household.id, &CancellationToken::new())
        .await
        .unwrap();

    // THEN: Same household
    assert_eq!(fetched, household);
}

#[tokio::test]
async fn given_session_when_current_household_fetched_then_uses_current_path() {
    let (server, client) = start_server().await;
    let household = build_fake_household();

    Mock::given(method("GET"))
        .and(path("/api/v1/households/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": household})))
        .mount(&server)
        .await;

    let fetched = client
        .get_current_household(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(fetched.id, household.id);
}

/// **VALUE**: A missing filter sends the default filter, and pagination comes back intact.
///
/// **BUG THIS CATCHES**: Would catch `None` producing a bare URL with no limit.
#[tokio::test]
async fn given_no_filter_when_households_listed_then_default_query_sent() {
    // GIVEN: A page of three households
    let (server, client) = start_server().await;
    let (households, pagination) = build_fake_household_list(3);

    Mock::given(method("GET"))
        .and(path("/api/v1/households"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .and(query_param("sortBy", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": households,
            "pagination": pagination,
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Listing without a filter
    let result = client
        .get_households(None, &CancellationToken::new())
        .await
        .unwrap();

    // THEN: All three, with the server's counts
    assert_eq!(result.data, households);
    assert_eq!(result.pagination.filtered_count, 3);
}

#[tokio::test]
async fn given_filter_when_households_listed_then_filter_sent() {
    let (server, client) = start_server().await;
    let filter = QueryFilter {
        page: Some(2),
        limit: Some(10),
        include_archived: Some(true),
        ..QueryFilter::default()
    };

    Mock::given(method("GET"))
        .and(path("/api/v1/households"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .and(query_param("includeArchived", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .get_households(Some(&filter), &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.is_empty());
    assert_eq!(result.pagination.page, 2);
    assert_eq!(result.pagination.limit, 10);
}

#[tokio::test]
async fn given_household_when_archived_then_delete_sent() {
    let (server, client) = start_server().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/households/hh-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"details": {}})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .archive_household("hh-9", &CancellationToken::new())
        .await
        .unwrap();
}
