//! Command implementations for the ShoreSquad CLI.
//!
//! Runs the same weather pipeline and sample data as the web app, natively.

use clap::Subcommand;

pub mod listing;
pub mod weather;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch current conditions and the 4-day forecast, then print the cleanup advisory
    Weather {
        /// Use the offline simulated weather source instead of data.gov.sg
        #[arg(long)]
        simulated: bool,
    },

    /// List the sample cleanup events
    Events,

    /// List the sample cleanup spots
    Spots,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Weather { simulated } => weather::run_weather(simulated).await,
        Command::Events => listing::run_events(),
        Command::Spots => listing::run_spots(),
    }
}
