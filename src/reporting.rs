//! Console and JSON output for a finished pack simulation
//!
//! Prints the run configuration and the pack/cost projections.

use std::io::{self, Write};

use crate::models::{MonteCarloStats, SimulationParams, TargetItem};

/// Display the banner and the run configuration
pub fn display_run_header(items: &[TargetItem], params: &SimulationParams) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║            PACK OPENING MONTE CARLO SIMULATION               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Target items: {}", items.len());
    for item in items {
        println!("  {:<30} p = {:.4}", item.name, item.probability);
    }
    println!();

    println!("Trials: {}", params.num_trials);
    println!("Seed: {}", params.seed);
    println!("Pack price: {:.2} EUR", params.pack_price);
    if let Some(streams) = params.streams {
        println!("RNG streams: {}", streams);
    }
    if let Some(limit) = params.max_packs {
        println!("Pack limit per trial: {}", limit);
    }
    println!();
}

/// Display the cost projections for a finished batch
pub fn display_results(stats: &MonteCarloStats) {
    println!(
        "Mean packs: {:.2}  -> Mean cost: {:.2} EUR",
        stats.mean_packs,
        stats.mean_cost()
    );
    println!(
        "Median packs: {:.2} -> Median cost: {:.2} EUR",
        stats.median_packs,
        stats.median_cost()
    );
    println!(
        "95% quantile packs: {:.2} -> 95% cost: {:.2} EUR",
        stats.percentile_95,
        stats.percentile_95_cost()
    );

    println!("\nPack Distribution:");
    println!("  Minimum:          {}", stats.min_packs);
    println!("  Median (50th):    {:.2}", stats.median_packs);
    println!("  90th Percentile:  {:.2}", stats.percentile_90);
    println!("  95th Percentile:  {:.2}", stats.percentile_95);
    println!("  Maximum:          {}", stats.max_packs);
    println!("  Std Dev:          {:.2}", stats.std_dev_packs);
}

/// Write the statistics as pretty-printed JSON
pub fn write_json<W: Write>(writer: &mut W, stats: &MonteCarloStats) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, stats)?;
    writeln!(writer)
}
