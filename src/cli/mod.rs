//! CLI module for KrutAI Auth
//!
//! Provides subcommands for checking API keys:
//! - `check`: local format check only
//! - `verify`: format check followed by the remote validation service

pub mod check;
pub mod verify;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// KrutAI Auth - API key validation for KrutAI services
#[derive(Parser)]
#[command(name = "krutai-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check the API key format without contacting any service
    Check(KeyArgs),

    /// Check the API key format and confirm it with the validation service
    Verify(verify::VerifyArgs),
}

/// API key source shared by every subcommand
#[derive(Args, Clone)]
pub struct KeyArgs {
    /// API key to check
    #[arg(env = "KRUTAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    logging::init_logging(&config.logging).context("Failed to initialize logging")
}
