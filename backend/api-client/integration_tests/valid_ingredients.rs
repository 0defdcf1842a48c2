use crate::helpers::start_server;

use api_client::{CancellationToken, ClientError};
use models::fakes::build_fake_valid_ingredient;
use models::QueryFilter;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_search_term_when_searched_then_q_and_filter_sent() {
    let (server, client) = start_server().await;
    let ingredient = build_fake_valid_ingredient();
    let filter = QueryFilter {
        limit: Some(5),
        ..QueryFilter::default()
    };

    Mock::given(method("GET"))
        .and(path("/api/v1/valid_ingredients/search"))
        .and(query_param("q", "chicken thigh"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ingredient],
            "pagination": {"page": 1, "limit": 5, "filteredCount": 1, "totalCount": 800}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .search_for_valid_ingredients("chicken thigh", Some(&filter), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.data, vec![ingredient]);
    assert_eq!(result.pagination.total_count, 800);
}

#[tokio::test]
async fn given_ingredient_id_when_fetched_then_returns_ingredient() {
    let (server, client) = start_server().await;
    let ingredient = build_fake_valid_ingredient();

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/valid_ingredients/{}", ingredient.id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": ingredient})))
        .mount(&server)
        .await;

    let fetched = client
        .get_valid_ingredient(&ingredient.id, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(fetched, ingredient);
}

#[tokio::test]
async fn given_list_without_pagination_when_listed_then_projected_from_filter() {
    let (server, client) = start_server().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/valid_ingredients"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [build_fake_valid_ingredient()]})),
        )
        .mount(&server)
        .await;

    let result = client
        .get_valid_ingredients(None, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result.pagination.limit, 50);
}

/// **VALUE**: A blank search term is rejected locally.
///
/// **BUG THIS CATCHES**: Would catch `q=` going out on the wire, which the
/// server reads as "no search term" and answers with an unfiltered page.
#[tokio::test]
async fn given_blank_search_term_when_searched_then_validation_error_without_request() {
    // GIVEN
    let (server, client) = start_server().await;

    for query in ["", "   "] {
        // WHEN
        let err = client
            .search_for_valid_ingredients(query, None, &CancellationToken::new())
            .await
            .unwrap_err();

        // THEN
        assert!(matches!(err, ClientError::Validation { .. }));
        assert!(err.is_local());
    }

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty(), "no request should reach the server");
}
