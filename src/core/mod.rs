pub mod checksum;
pub mod convert;

pub use crate::core::convert::{to_isbn10, to_isbn13, BOOKLAND_PREFIX, ISBN10_LEN, ISBN13_LEN};
pub use crate::utils::error::Result;
