//! Verify command - format check followed by the remote validation service

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::KeyArgs;
use crate::config::AppConfig;
use crate::infrastructure::api_key::{build_validator, make_checker};

/// Arguments for the verify command
#[derive(Args, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Validation endpoint (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Run the remote verification
pub async fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;
    super::init_logging(&config)?;

    if let Some(endpoint) = args.endpoint {
        config.validation.endpoint = Some(endpoint);
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.validation.timeout_secs = timeout_secs;
    }

    let validator = build_validator(&config.validation)?;
    let checker = make_checker(args.key.api_key.as_deref().unwrap_or_default(), validator.clone())?;

    info!(
        validator = validator.validator_name(),
        api_key = %checker.key(),
        "Verifying API key"
    );

    if !checker.validate().await? {
        anyhow::bail!("API key was rejected by the validation service");
    }

    println!("API key is valid");
    Ok(())
}
