//! Check command - local API key format check

use anyhow::Context;
use tracing::debug;

use super::KeyArgs;
use crate::config::AppConfig;
use crate::domain::check_format;

/// Run the format check
pub fn run(args: KeyArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    super::init_logging(&config)?;

    check_format(args.api_key.as_deref())?;
    debug!("API key passed the format check");

    println!("API key format is valid");
    Ok(())
}
