use etl::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    return Ok(());
}
