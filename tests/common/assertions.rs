//! Assertion macros for CLI scenario tests.

/// Assert that a `TestResult`'s combined output contains a substring
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "expected output to contain {:?}, got:\n{}",
            $needle,
            combined
        );
    };
}

pub(crate) use assert_output_contains;
