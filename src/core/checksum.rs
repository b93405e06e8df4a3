use crate::utils::error::{IsbnError, Result};

/// Check digit over the first 12 characters of an ISBN-13: weight 1 at even
/// positions, 3 at odd positions, then `(10 - sum % 10) % 10`. Always a
/// decimal digit, never `X`.
pub(crate) fn isbn13_check_digit(prefix: &str) -> Result<char> {
    let mut sum = 0u32;
    for (idx, character) in prefix.chars().take(12).enumerate() {
        let digit = character
            .to_digit(10)
            .ok_or(IsbnError::NonDigitCharacter { character })?;
        sum += digit * if idx % 2 == 0 { 1 } else { 3 };
    }

    let check = (10 - sum % 10) % 10;
    Ok((b'0' + check as u8) as char)
}

/// Check character over the 9-digit ISBN-10 body: weight `10 - i` at index
/// `i`, then `(11 - sum % 11) % 11`. A check value of 10 renders as `X`.
pub(crate) fn isbn10_check_digit(body: &str) -> Result<char> {
    let mut sum = 0u32;
    for (idx, character) in body.chars().take(9).enumerate() {
        let digit = character
            .to_digit(10)
            .ok_or(IsbnError::NonDigitCharacter { character })?;
        sum += digit * (10 - idx as u32);
    }

    let check = (11 - sum % 11) % 11;
    if check == 10 {
        Ok('X')
    } else {
        Ok((b'0' + check as u8) as char)
    }
}
