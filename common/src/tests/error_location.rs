use crate::ErrorLocation;

/// **VALUE**: `ErrorLocation::caller()` records the line of the expression that called it.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` were dropped from `caller()`,
/// which would make every client error point into `error_location.rs` instead of the
/// resource method that failed.
#[test]
fn given_track_caller_helper_when_called_twice_then_lines_differ_by_one() {
    // GIVEN: A helper that forwards the caller location
    #[track_caller]
    fn capture() -> ErrorLocation {
        ErrorLocation::caller()
    }

    // WHEN: Capturing from two consecutive lines
    let first = capture();
    let second = capture();

    // THEN: Both point at this test file, one line apart
    assert!(first.file.ends_with("error_location.rs"));
    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
    assert!(first.column > 0);
}

/// **VALUE**: Display renders `[file:line:column]`, the suffix every error message ends with.
#[test]
fn given_location_when_displayed_then_uses_bracketed_triple() {
    let location = ErrorLocation {
        file: "backend/api-client/src/api_client/mod.rs",
        line: 42,
        column: 7,
    };

    assert_eq!(
        location.to_string(),
        "[backend/api-client/src/api_client/mod.rs:42:7]"
    );
}

/// **VALUE**: `file_name()` strips directories for both separators.
#[test]
fn given_nested_paths_when_file_name_requested_then_returns_last_segment() {
    let unix = ErrorLocation {
        file: "models/src/query_filter.rs",
        line: 1,
        column: 1,
    };
    let windows = ErrorLocation {
        file: "models\\src\\query_filter.rs",
        line: 1,
        column: 1,
    };
    let bare = ErrorLocation {
        file: "lib.rs",
        line: 1,
        column: 1,
    };

    assert_eq!(unix.file_name(), "query_filter.rs");
    assert_eq!(windows.file_name(), "query_filter.rs");
    assert_eq!(bare.file_name(), "lib.rs");
}
