//! Data structures shared by the simulator, the loader and the reporting layer

use serde::Serialize;

/// Synthetic outcome drawn when a pack yields none of the target items
pub const NONE_OUTCOME: &str = "NONE";

/// A target item and its probability to be drawn from one pack
#[derive(Clone, Debug, PartialEq)]
pub struct TargetItem {
    pub name: String,
    pub probability: f64,
}

impl TargetItem {
    pub fn new(name: impl Into<String>, probability: f64) -> Self {
        TargetItem {
            name: name.into(),
            probability,
        }
    }
}

/// Parameters for one Monte Carlo batch
#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub num_trials: usize,
    pub seed: u64,
    /// Price of a single pack, used for cost projections
    pub pack_price: f64,
    /// Abort a trial after this many packs (None = run until complete)
    pub max_packs: Option<u64>,
    /// Number of independent RNG streams; Some enables the parallel executor
    pub streams: Option<usize>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            num_trials: 10_000,
            seed: 42,
            pack_price: 10.0,
            max_packs: None,
            streams: None,
        }
    }
}

/// Monte Carlo statistics over the packs needed per trial
#[derive(Debug, Clone, Serialize)]
pub struct MonteCarloStats {
    pub num_trials: usize,
    pub pack_price: f64,
    pub mean_packs: f64,
    pub std_dev_packs: f64,
    pub min_packs: u64,
    pub max_packs: u64,
    pub median_packs: f64,
    pub percentile_90: f64,
    pub percentile_95: f64,
}

impl MonteCarloStats {
    pub fn mean_cost(&self) -> f64 {
        self.mean_packs * self.pack_price
    }

    pub fn median_cost(&self) -> f64 {
        self.median_packs * self.pack_price
    }

    pub fn percentile_95_cost(&self) -> f64 {
        self.percentile_95 * self.pack_price
    }
}
