use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    #[error("ISBN with length {expected} is required, given: {given}")]
    InvalidLength { expected: usize, given: String },

    #[error("ISBN-13 is not convertible to ISBN-10: {isbn}")]
    NotConvertible { isbn: String },

    #[error("expected a decimal digit, found: {character}")]
    NonDigitCharacter { character: char },

    #[error("failed to calculate {conversion} check digit: {source}")]
    Checksum {
        conversion: &'static str,
        #[source]
        source: Box<IsbnError>,
    },
}

impl IsbnError {
    /// Tags a check-digit failure with the conversion it occurred in.
    pub(crate) fn in_conversion(self, conversion: &'static str) -> Self {
        IsbnError::Checksum {
            conversion,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, IsbnError>;
