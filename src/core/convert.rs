use crate::core::checksum::{isbn10_check_digit, isbn13_check_digit};
use crate::utils::error::Result;
use crate::utils::validation::{validate_length, validate_prefix};

pub const ISBN10_LEN: usize = 10;
pub const ISBN13_LEN: usize = 13;

/// GS1 prefix under which ISBN-10 codes are reissued as ISBN-13.
pub const BOOKLAND_PREFIX: &str = "978";

/// Converts an ISBN-10 to its ISBN-13 form.
///
/// The 12-character prefix is `978` plus the first 9 characters of the input;
/// the input's own check character is discarded without inspection, so a
/// malformed 10th character is accepted. A fresh ISBN-13 check digit is
/// appended.
pub fn to_isbn13(isbn10: &str) -> Result<String> {
    validate_length(ISBN10_LEN, isbn10)?;

    let mut result = String::with_capacity(ISBN13_LEN);
    result.push_str(BOOKLAND_PREFIX);
    result.extend(isbn10.chars().take(9));

    let check = isbn13_check_digit(&result).map_err(|e| e.in_conversion("ISBN-13"))?;
    result.push(check);

    tracing::debug!("Converted ISBN-10 {} to ISBN-13 {}", isbn10, result);
    Ok(result)
}

/// Converts an ISBN-13 to its ISBN-10 form.
///
/// Only codes under the `978` prefix have an ISBN-10 equivalent; anything
/// else (e.g. `979`) is rejected as not convertible. The 9-character body
/// after the prefix is kept and a fresh ISBN-10 check character is appended,
/// which may be `X`.
pub fn to_isbn10(isbn13: &str) -> Result<String> {
    validate_length(ISBN13_LEN, isbn13)?;
    validate_prefix(BOOKLAND_PREFIX, isbn13)?;

    let mut result = String::with_capacity(ISBN10_LEN);
    result.extend(isbn13.chars().skip(3).take(9));

    let check = isbn10_check_digit(&result).map_err(|e| e.in_conversion("ISBN-10"))?;
    result.push(check);

    tracing::debug!("Converted ISBN-13 {} to ISBN-10 {}", isbn13, result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::IsbnError;

    #[test]
    fn test_to_isbn13() {
        assert_eq!(to_isbn13("7506287641").unwrap(), "9787506287647");
    }

    #[test]
    fn test_to_isbn10() {
        assert_eq!(to_isbn10("9787307047310").unwrap(), "7307047314");
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert_eq!(
            to_isbn13("123"),
            Err(IsbnError::InvalidLength {
                expected: 10,
                given: "123".to_string()
            })
        );
        assert_eq!(
            to_isbn10("12345"),
            Err(IsbnError::InvalidLength {
                expected: 13,
                given: "12345".to_string()
            })
        );
    }

    #[test]
    fn test_wrong_prefix_is_not_convertible() {
        assert_eq!(
            to_isbn10("9791234567897"),
            Err(IsbnError::NotConvertible {
                isbn: "9791234567897".to_string()
            })
        );
    }

    #[test]
    fn test_non_digit_in_body_is_wrapped_with_conversion() {
        assert_eq!(
            to_isbn13("7506287A41"),
            Err(IsbnError::Checksum {
                conversion: "ISBN-13",
                source: Box::new(IsbnError::NonDigitCharacter { character: 'A' })
            })
        );
        assert_eq!(
            to_isbn10("978730704B310"),
            Err(IsbnError::Checksum {
                conversion: "ISBN-10",
                source: Box::new(IsbnError::NonDigitCharacter { character: 'B' })
            })
        );
    }

    #[test]
    fn test_check_character_is_discarded_unexamined() {
        // the 10th character never reaches the checksum
        assert_eq!(to_isbn13("750628764Z").unwrap(), "9787506287647");
    }
}
