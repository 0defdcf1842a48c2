use crate::{Pagination, QueryFilter, QueryFilteredResult};

#[test]
fn given_camel_case_json_when_deserialized_then_fields_populated() {
    let json = r#"{"page":2,"limit":10,"filteredCount":25,"totalCount":40}"#;

    let pagination: Pagination = serde_json::from_str(json).unwrap();

    assert_eq!(
        pagination,
        Pagination {
            page: 2,
            limit: 10,
            filtered_count: 25,
            total_count: 40,
        }
    );
}

#[test]
fn given_partial_json_when_deserialized_then_missing_counts_default_to_zero() {
    let pagination: Pagination = serde_json::from_str(r#"{"page":1,"limit":5}"#).unwrap();

    assert_eq!(pagination.filtered_count, 0);
    assert_eq!(pagination.total_count, 0);
}

#[test]
fn given_remaining_records_when_checked_then_has_next_page() {
    let middle = Pagination {
        page: 2,
        limit: 10,
        filtered_count: 25,
        total_count: 25,
    };
    let last = Pagination { page: 3, ..middle };

    assert!(middle.has_next_page());
    assert!(!last.has_next_page());
}

#[test]
fn given_no_filter_when_empty_result_built_then_default_page_and_limit() {
    let result = QueryFilteredResult::<String>::empty(None);

    assert!(result.is_empty());
    assert_eq!(result.pagination.page, 1);
    assert_eq!(result.pagination.limit, 50);
}

#[test]
fn given_result_when_iterated_then_yields_data_in_order() {
    let result = QueryFilteredResult::new(
        vec!["a".to_string(), "b".to_string()],
        QueryFilter::default().to_pagination(),
    );

    assert_eq!(result.len(), 2);
    assert_eq!(result.iter().map(String::as_str).collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(result.into_iter().last().as_deref(), Some("b"));
}
