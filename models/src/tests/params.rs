use crate::QueryParams;

#[test]
fn given_repeated_key_when_parsed_then_get_returns_first_value() {
    let params = QueryParams::parse("q=leek&q=onion&page=1");

    assert_eq!(params.get("q"), Some("leek"));
    assert_eq!(params.get_all("q"), ["leek", "onion"]);
    assert_eq!(params.len(), 2);
}

#[test]
fn given_set_after_add_when_read_then_set_replaces_all_values() {
    let mut params = QueryParams::new();
    params.add("q", "leek");
    params.add("q", "onion");

    params.set("q", "garlic");

    assert_eq!(params.get_all("q"), ["garlic"]);
}

#[test]
fn given_reserved_characters_when_encoded_then_escaped_and_parse_back() {
    let mut params = QueryParams::new();
    params.set("q", "salt & pepper=50%");

    let encoded = params.encode();

    assert!(!encoded.contains(' '));
    assert_eq!(QueryParams::parse(&encoded).get("q"), Some("salt & pepper=50%"));
}

#[test]
fn given_keys_inserted_out_of_order_when_encoded_then_sorted() {
    let mut params = QueryParams::new();
    params.set("sortBy", "asc");
    params.set("limit", "5");

    assert_eq!(params.encode(), "limit=5&sortBy=asc");
}

#[test]
fn given_missing_key_when_read_then_empty() {
    let mut params = QueryParams::parse("");

    assert!(params.is_empty());
    assert_eq!(params.get("page"), None);
    assert!(params.get_all("page").is_empty());
    assert_eq!(params.remove("page"), None);
}
