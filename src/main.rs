use clap::Parser;
use isbn_convert::utils::logger;
use isbn_convert::{to_isbn10, to_isbn13, CliConfig, IsbnError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting isbn-convert CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.is_demo() {
        run_demo()?;
        return Ok(());
    }

    if let Some(isbn10) = &config.isbn10 {
        match to_isbn13(isbn10) {
            Ok(isbn13) => println!("{}", isbn13),
            Err(e) => fail(e),
        }
    }

    if let Some(isbn13) = &config.isbn13 {
        match to_isbn10(isbn13) {
            Ok(isbn10) => println!("{}", isbn10),
            Err(e) => fail(e),
        }
    }

    Ok(())
}

fn run_demo() -> Result<(), IsbnError> {
    let result = to_isbn13("7506287641")?;
    println!("Convert to ISBN13, result: {}, expect: {}", result, "9787506287647");

    let result = to_isbn10("9787307047310")?;
    println!("Convert to ISBN10, result: {}, expect: {}", result, "7307047314");

    Ok(())
}

fn fail(e: IsbnError) -> ! {
    tracing::error!("Conversion failed: {}", e);
    eprintln!("{}", e);
    std::process::exit(1);
}
