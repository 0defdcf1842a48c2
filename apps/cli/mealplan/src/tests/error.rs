use crate::error::MealplanError;

use api_client::ClientError;
use api_client::error::config::ConfigError;

/// **VALUE**: Client failures keep their own message when surfaced by the CLI.
///
/// **WHY THIS MATTERS**: The CLI prints this to the user. Losing the sentinel
/// text ("not found") would leave them guessing what went wrong.
///
/// **BUG THIS CATCHES**: Would catch a From impl that drops the source message.
#[test]
fn given_client_error_when_converted_then_message_is_preserved() {
    // GIVEN: A local client error
    let source = ClientError::invalid_id("household.id");
    let source_text = source.to_string();

    // WHEN: Converting into the CLI error
    let err = MealplanError::from(source);

    // THEN: Client variant carrying the original text
    assert!(matches!(err, MealplanError::Client { .. }));
    let rendered = err.to_string();
    assert!(rendered.starts_with("Client Error: "));
    assert!(rendered.contains(&source_text));
}

/// **VALUE**: Config failures map to the Config variant.
///
/// **BUG THIS CATCHES**: Would catch a missing credential being reported as a
/// client error, which points the user at the wrong fix.
#[test]
fn given_missing_credential_when_converted_then_config_variant() {
    // GIVEN
    let source = ConfigError::MissingCredential {
        env_var: "MEALPLAN_API_TOKEN".to_string(),
        location: common::ErrorLocation::from(std::panic::Location::caller()),
    };

    // WHEN
    let err: MealplanError = source.into();

    // THEN
    assert!(matches!(err, MealplanError::Config { .. }));
    assert!(err.to_string().contains("MEALPLAN_API_TOKEN"));
}

/// **VALUE**: The recorded location is the conversion site in this crate.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[track_caller]` on the From
/// impls, which pins every location to error.rs.
#[test]
fn given_serde_error_when_converted_then_location_is_caller() {
    // GIVEN
    let source = serde_json::from_str::<u8>("not json").unwrap_err();

    // WHEN
    let err = MealplanError::from(source);

    // THEN
    let MealplanError::Output { location, .. } = err else {
        panic!("expected Output variant");
    };
    assert!(location.to_string().contains("tests"));
}
