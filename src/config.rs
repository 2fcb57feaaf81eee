//! CLI argument parsing using clap

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, SimError};
use crate::models::SimulationParams;

/// Estimate how many packs it takes to pull a whole target squad
#[derive(Parser, Debug)]
#[command(name = "pack-sim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file with `player_name` and `p` columns
    #[arg(long, env = "PACK_SIM_INPUT", default_value = "data/input/target_squad.csv")]
    pub input: PathBuf,

    /// Number of simulated trials
    #[arg(short = 'n', long, default_value = "10000")]
    pub trials: usize,

    /// RNG seed
    #[arg(short, long, default_value = "42")]
    pub seed: u64,

    /// Price of one pack in EUR
    #[arg(long, default_value = "10.0")]
    pub pack_price: f64,

    /// Split the trials over N independent RNG streams and run them in parallel
    #[arg(long)]
    pub streams: Option<usize>,

    /// Abort a trial after this many packs
    ///
    /// Required when a target has probability 0, since such a trial never completes.
    #[arg(long)]
    pub max_packs: Option<u64>,

    /// Print the statistics as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Validate the arguments and convert them into simulation parameters
    pub fn to_params(&self) -> Result<SimulationParams> {
        if self.trials == 0 {
            return Err(SimError::InvalidTrialCount);
        }
        if self.streams == Some(0) {
            return Err(SimError::InvalidStreamCount);
        }
        if !self.pack_price.is_finite() || self.pack_price < 0.0 {
            return Err(SimError::InvalidPackPrice(self.pack_price));
        }

        Ok(SimulationParams {
            num_trials: self.trials,
            seed: self.seed,
            pack_price: self.pack_price,
            max_packs: self.max_packs,
            streams: self.streams,
        })
    }
}
