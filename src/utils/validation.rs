use crate::utils::error::{IsbnError, Result};

/// Checks the character count of an ISBN candidate. Counts characters rather
/// than bytes so multi-byte input fails the precondition instead of panicking
/// a byte slice downstream.
pub fn validate_length(expected: usize, value: &str) -> Result<()> {
    if value.chars().count() != expected {
        return Err(IsbnError::InvalidLength {
            expected,
            given: value.to_string(),
        });
    }
    Ok(())
}

/// Requires the GS1 book prefix on an ISBN-13 candidate.
pub fn validate_prefix(prefix: &str, value: &str) -> Result<()> {
    if !value.starts_with(prefix) {
        return Err(IsbnError::NotConvertible {
            isbn: value.to_string(),
        });
    }
    Ok(())
}
