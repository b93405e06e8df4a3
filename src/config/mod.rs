use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "isbn-convert")]
#[command(about = "Convert book identifiers between ISBN-10 and ISBN-13")]
pub struct CliConfig {
    #[arg(long, help = "ISBN-10 to convert to ISBN-13")]
    pub isbn10: Option<String>,

    #[arg(long, help = "ISBN-13 to convert to ISBN-10")]
    pub isbn13: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// True when no conversion was requested and the demonstration pairs
    /// should run instead.
    pub fn is_demo(&self) -> bool {
        self.isbn10.is_none() && self.isbn13.is_none()
    }
}
