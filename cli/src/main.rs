mod commands;
mod config;
mod stress;
mod utils;

use clap::{Parser, Subcommand};
use commands::{StressArgs, handle_stress_command, run_scenario};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quotaring")]
#[command(about = "Exercise a bounded lock-free ring from many threads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hammer one ring with producers and consumers, then verify its counter
    Stress(StressArgs),
    /// Run the two-slot fill/reject/pop/refill walkthrough
    Scenario,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stress(args) => handle_stress_command(args)?,
        Commands::Scenario => run_scenario()?,
    }

    Ok(())
}
