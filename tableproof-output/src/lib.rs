//! tableproof Output - CLI Assertion Helpers
//!
//! Checks for what the command-line client prints or writes: plain text,
//! JSON documents and exported files. Failures use the same [`VerifyError`]
//! as the table helpers.

mod file;
mod json;

pub use file::{verify_file_contains, verify_file_exists, verify_file_not_empty};
pub use json::{
    verify_json_array_contains_value, verify_json_array_length, verify_json_array_min_length,
    verify_json_contains_key,
};
pub use tableproof_core::{VerifyError, VerifyResult};

/// Assert `output` contains `needle`.
pub fn verify_contains(output: &str, needle: &str) -> VerifyResult<()> {
    if !output.contains(needle) {
        return VerifyError::MissingText {
            needle: needle.to_string(),
            output: output.to_string(),
        }
        .reject();
    }
    Ok(())
}

/// Assert `output` does not contain `needle`.
pub fn verify_not_contains(output: &str, needle: &str) -> VerifyResult<()> {
    if output.contains(needle) {
        return VerifyError::UnexpectedText {
            needle: needle.to_string(),
            output: output.to_string(),
        }
        .reject();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_contains() {
        verify_contains("3 rows returned", "rows").unwrap();
        let err = verify_contains("3 rows returned", "error").unwrap_err();
        assert!(err.to_string().contains("Expected output to contain \"error\""));
    }

    #[test]
    fn test_verify_not_contains() {
        verify_not_contains("ok", "panic").unwrap();
        assert!(matches!(
            verify_not_contains("thread panicked", "panic"),
            Err(VerifyError::UnexpectedText { .. })
        ));
    }

    #[test]
    fn test_empty_needle_always_contained() {
        verify_contains("", "").unwrap();
        assert!(verify_not_contains("anything", "").is_err());
    }
}
