pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::convert::{to_isbn10, to_isbn13};
pub use crate::utils::error::{IsbnError, Result};
