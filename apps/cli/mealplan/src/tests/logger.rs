// Unit tests for logger initialization
// Tests focus on idempotence and error handling

use crate::logger::{LOG_FILE_NAME, initialize, open_log_file};

use std::path::PathBuf;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Commands and tests can both reach logger setup. A
/// second call that errors would turn a harmless double init into a failed run.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when setting a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path(), false);
    let result2 = initialize(temp_dir.path(), true);

    // THEN: Both return Ok and the log file exists
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}

/// **VALUE**: Verifies that an unwritable log directory is an error, not a panic.
///
/// **WHY THIS MATTERS**: `--log-dir` is user input. A bad path has to surface
/// as a message the user can act on.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` were unwrapped.
#[test]
fn given_invalid_log_dir_when_initialize_called_then_returns_error() {
    // GIVEN: A path that can never be a directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Opening the log file there (the global guard may already be
    // spent by another test, so initialize() itself is not deterministic)
    let result = open_log_file(&invalid_dir);

    // THEN: Should return the Mealplan variant
    let err = result.unwrap_err();
    assert!(
        format!("{err:?}").contains("Mealplan"),
        "Error should be MealplanError::Mealplan variant"
    );
    assert!(err.to_string().contains("Failed to create log file"));
}
