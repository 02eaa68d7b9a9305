//! Custom assertion macros
//!
//! Assertions with more descriptive failure output than bare `assert!`.

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a JSON error body carries the given status and detail
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr, $detail:expr) => {{
        let body: serde_json::Value = $response.json();
        assert_eq!($response.status_code(), $status, "body: {}", body);
        assert_eq!(body["status"], $status.as_u16(), "body: {}", body);
        assert_eq!(body["detail"], $detail, "body: {}", body);
    }};
}
