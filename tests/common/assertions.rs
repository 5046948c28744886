//! Assertion macros with descriptive failure messages.

/// Assert that combined stdout+stderr contains a substring.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert a specific process exit code.
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert!(
            $result.exit_code == $code,
            "Expected exit code {}, got {}.\nstdout:\n{}\nstderr:\n{}",
            $code,
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
