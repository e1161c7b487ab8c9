use std::path::PathBuf;

use clap::Args;

use crate::config::{Overrides, StressConfig};
use crate::stress;
use crate::utils::format_rate;

#[derive(Args)]
pub struct StressArgs {
    /// JSON file with stress settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ring capacity (non-positive means every push is rejected)
    #[arg(long, allow_negative_numbers = true)]
    capacity: Option<i64>,

    /// Number of producer threads
    #[arg(long)]
    producers: Option<usize>,

    /// Number of consumer threads
    #[arg(long)]
    consumers: Option<usize>,

    /// Push attempts per producer
    #[arg(long)]
    ops: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub fn handle_stress_command(args: StressArgs) -> Result<(), Box<dyn std::error::Error>> {
    let overrides = Overrides {
        capacity: args.capacity,
        producers: args.producers,
        consumers: args.consumers,
        ops_per_producer: args.ops,
    };
    let config = StressConfig::resolve(args.config.as_deref(), &overrides)?;

    let report = match stress::run(&config) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!("Stress run failed: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!(
        "Stress run passed in {}ms: settled occupancy matched admitted items",
        report.elapsed_ms
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Stress Report:");
    println!("  Capacity:    {}", report.capacity);
    println!(
        "  Threads:     {} producers, {} consumers",
        report.config.producers, report.config.consumers
    );
    println!("  Accepted:    {}", report.accepted);
    println!("  Rejected:    {}", report.rejected);
    println!("  Popped:      {}", report.popped);
    println!("  Drained:     {}", report.drained);
    println!("  Elapsed:     {}ms", report.elapsed_ms);
    println!("  Push rate:   {}", format_rate(report.pushes_per_sec));

    Ok(())
}
