//! Single-trial simulation logic
//! Opens packs one at a time until every target item has been pulled at least once

use rand::distributions::Distribution as _;
use rand::Rng;
use rand_distr::WeightedAliasIndex;

use crate::distribution::{build_distribution, Distribution};
use crate::error::{Result, SimError};
use crate::models::TargetItem;

/// Runs trials against one prepared distribution
///
/// Built once per batch so the sampler tables are not recomputed per trial.
/// Every target must have a strictly positive probability, otherwise
/// [`TrialRunner::run`] never returns; use [`TrialRunner::run_capped`] when
/// that cannot be guaranteed.
pub struct TrialRunner {
    sampler: WeightedAliasIndex<f64>,
    target_count: usize,
}

impl TrialRunner {
    pub fn new(distribution: &Distribution) -> Result<Self> {
        Ok(TrialRunner {
            sampler: distribution.sampler()?,
            target_count: distribution.target_count(),
        })
    }

    pub fn target_count(&self) -> usize {
        self.target_count
    }

    /// Number of packs opened until all targets were collected
    ///
    /// Consumes exactly one draw from `rng` per pack.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        let mut collected = vec![false; self.target_count];
        let mut missing = self.target_count;
        let mut packs_opened = 0u64;

        while missing > 0 {
            packs_opened += 1;
            if self.record_draw(rng, &mut collected) {
                missing -= 1;
            }
        }

        packs_opened
    }

    /// Same as [`TrialRunner::run`], but gives up after `max_packs` packs
    pub fn run_capped<R: Rng + ?Sized>(&self, rng: &mut R, max_packs: u64) -> Result<u64> {
        let mut collected = vec![false; self.target_count];
        let mut missing = self.target_count;
        let mut packs_opened = 0u64;

        while missing > 0 {
            if packs_opened >= max_packs {
                return Err(SimError::DrawLimitExceeded { limit: max_packs });
            }
            packs_opened += 1;
            if self.record_draw(rng, &mut collected) {
                missing -= 1;
            }
        }

        Ok(packs_opened)
    }

    /// Draw one outcome; true if it was a target not collected before
    fn record_draw<R: Rng + ?Sized>(&self, rng: &mut R, collected: &mut [bool]) -> bool {
        let outcome = self.sampler.sample(rng);
        // The last outcome is NONE and never counts
        if outcome < self.target_count && !collected[outcome] {
            collected[outcome] = true;
            true
        } else {
            false
        }
    }
}

/// Run one trial directly from a target item list
pub fn run_single_trial<R: Rng + ?Sized>(items: &[TargetItem], rng: &mut R) -> Result<u64> {
    let distribution = build_distribution(items)?;
    let runner = TrialRunner::new(&distribution)?;
    Ok(runner.run(rng))
}
