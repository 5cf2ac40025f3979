use clap::Parser;
use krutai_auth::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => cli::check::run(args),
        Command::Verify(args) => cli::verify::run(args).await,
    }
}
