//! Pack opening Monte Carlo simulator
//!
//! Estimates how many packs it takes to pull every item of a target squad,
//! where each pack yields at most one target item with a known probability.
//!
//! - **distribution**: target items to a categorical distribution over `[items..., NONE]`
//! - **simulation**: a single trial, opening packs until every target is collected
//! - **monte_carlo**: seeded batches of trials, sequential or over parallel RNG streams
//! - **stats**: mean, standard deviation and interpolated quantiles

pub mod config;
pub mod distribution;
pub mod error;
pub mod loader;
pub mod models;
pub mod monte_carlo;
pub mod reporting;
pub mod simulation;
pub mod stats;

pub use error::{Result, SimError};
pub use models::{MonteCarloStats, SimulationParams, TargetItem};
