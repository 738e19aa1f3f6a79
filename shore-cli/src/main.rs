//! ShoreSquad CLI - weather advisory and sample data from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "shore-cli",
    version,
    about = "ShoreSquad beach-cleanup toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: shore_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Running ShoreSquad CLI");
    shore_cmd::run(cli.command).await
}
