use std::io;

use anyhow::{bail, Context};
use clap::Parser;
use log::warn;

use pack_sim::config::Cli;
use pack_sim::distribution::build_distribution;
use pack_sim::loader::load_target_items_csv;
use pack_sim::monte_carlo::run_monte_carlo_simulation;
use pack_sim::reporting::{display_results, display_run_header, write_json};
use pack_sim::{SimulationParams, TargetItem};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let params = cli.to_params()?;

    let items = load_target_items_csv(&cli.input)
        .with_context(|| format!("Failed to load target squad from {}", cli.input.display()))?;

    check_squad(&items, &params)?;

    if !cli.json {
        display_run_header(&items, &params);
    }

    let stats = run_monte_carlo_simulation(&items, &params)?;

    if cli.json {
        write_json(&mut io::stdout().lock(), &stats)?;
    } else {
        display_results(&stats);
    }

    Ok(())
}

/// Reject a squad that cannot be simulated before anything is printed
fn check_squad(items: &[TargetItem], params: &SimulationParams) -> anyhow::Result<()> {
    build_distribution(items)?;

    // A zero-probability target is never collected, so an uncapped trial would not end
    let unreachable: Vec<&str> = items
        .iter()
        .filter(|item| item.probability == 0.0)
        .map(|item| item.name.as_str())
        .collect();
    if !unreachable.is_empty() {
        warn!("Targets with probability 0: {}", unreachable.join(", "));
        if params.max_packs.is_none() {
            bail!("Some targets can never be pulled; remove them or pass --max-packs");
        }
    }

    Ok(())
}
