use crate::fakes::{build_fake_household_list, fake_id};

#[test]
fn given_fake_ids_when_generated_then_unique() {
    assert_ne!(fake_id(), fake_id());
}

#[test]
fn given_count_when_fake_list_built_then_pagination_matches() {
    let (households, pagination) = build_fake_household_list(3);

    assert_eq!(households.len(), 3);
    assert_eq!(pagination.filtered_count, 3);
    assert_eq!(pagination.total_count, 3);
}
