//! Monte Carlo batch execution and statistical summary

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::distribution::build_distribution;
use crate::error::{Result, SimError};
use crate::models::{MonteCarloStats, SimulationParams, TargetItem};
use crate::simulation::TrialRunner;

/// Run `num_trials` trials on one RNG stream seeded from `seed`
///
/// The distribution is built once for the batch; trials share only the
/// generator, so the result sequence is fully determined by the inputs.
pub fn run_many_trials(items: &[TargetItem], num_trials: usize, seed: u64) -> Result<Vec<u64>> {
    let runner = prepare_runner(items, num_trials)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    Ok((0..num_trials).map(|_| runner.run(&mut rng)).collect())
}

/// Like [`run_many_trials`], failing if any trial exceeds `max_packs`
pub fn run_many_trials_capped(
    items: &[TargetItem],
    num_trials: usize,
    seed: u64,
    max_packs: u64,
) -> Result<Vec<u64>> {
    let runner = prepare_runner(items, num_trials)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..num_trials)
        .map(|_| runner.run_capped(&mut rng, max_packs))
        .collect()
}

/// Run the batch split over `streams` independent RNG streams on the rayon pool
///
/// Chunk `i` gets a contiguous share of the trials and its own ChaCha stream `i`
/// under the same seed. Results are concatenated in chunk order, so they depend
/// on `streams` but not on how many threads execute them.
pub fn run_many_trials_parallel(
    items: &[TargetItem],
    num_trials: usize,
    seed: u64,
    streams: usize,
    max_packs: Option<u64>,
) -> Result<Vec<u64>> {
    if streams == 0 {
        return Err(SimError::InvalidStreamCount);
    }
    let runner = prepare_runner(items, num_trials)?;

    let base = num_trials / streams;
    let remainder = num_trials % streams;

    let chunks: Vec<Vec<u64>> = (0..streams)
        .into_par_iter()
        .map(|chunk| {
            let chunk_trials = base + usize::from(chunk < remainder);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            rng.set_stream(chunk as u64);

            (0..chunk_trials)
                .map(|_| match max_packs {
                    Some(limit) => runner.run_capped(&mut rng, limit),
                    None => Ok(runner.run(&mut rng)),
                })
                .collect::<Result<Vec<u64>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(chunks.into_iter().flatten().collect())
}

/// Run the full batch described by `params` and summarize it
pub fn run_monte_carlo_simulation(
    items: &[TargetItem],
    params: &SimulationParams,
) -> Result<MonteCarloStats> {
    info!(
        "Running {} trials for {} targets (seed {})",
        params.num_trials,
        items.len(),
        params.seed
    );

    let results = match (params.streams, params.max_packs) {
        (Some(streams), max_packs) => {
            run_many_trials_parallel(items, params.num_trials, params.seed, streams, max_packs)?
        }
        (None, Some(max_packs)) => {
            run_many_trials_capped(items, params.num_trials, params.seed, max_packs)?
        }
        (None, None) => run_many_trials(items, params.num_trials, params.seed)?,
    };

    MonteCarloStats::from_results(&results, params.pack_price)
}

fn prepare_runner(items: &[TargetItem], num_trials: usize) -> Result<TrialRunner> {
    if num_trials == 0 {
        return Err(SimError::InvalidTrialCount);
    }
    let distribution = build_distribution(items)?;
    debug!("Outcomes: {:?}", distribution.outcomes());
    debug!("Weights: {:?}", distribution.weights());
    TrialRunner::new(&distribution)
}
