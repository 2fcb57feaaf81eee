//! Statistical analysis of Monte Carlo results

use crate::error::{Result, SimError};
use crate::models::MonteCarloStats;

/// Arithmetic mean of the packs needed per trial
pub fn mean(results: &[u64]) -> Result<f64> {
    if results.is_empty() {
        return Err(SimError::EmptyResultSet);
    }
    Ok(results.iter().map(|&r| r as f64).sum::<f64>() / results.len() as f64)
}

/// Population standard deviation
pub fn std_dev(results: &[u64]) -> Result<f64> {
    let mean = mean(results)?;
    let variance = results
        .iter()
        .map(|&r| (r as f64 - mean).powi(2))
        .sum::<f64>()
        / results.len() as f64;
    Ok(variance.sqrt())
}

/// Linearly interpolated quantile of an unsorted result set
pub fn quantile(results: &[u64], q: f64) -> Result<f64> {
    let mut sorted = results.to_vec();
    sorted.sort_unstable();
    quantile_sorted(&sorted, q)
}

/// Linearly interpolated quantile of an ascending result set
///
/// Uses the fractional rank `(n - 1) * q` and interpolates between its
/// floor and ceiling neighbours.
pub fn quantile_sorted(sorted: &[u64], q: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&q) {
        return Err(SimError::InvalidQuantile(q));
    }
    let n = sorted.len();
    if n == 0 {
        return Err(SimError::EmptyResultSet);
    }

    let pos = (n - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = pos - lo as f64;

    Ok(sorted[lo] as f64 * (1.0 - frac) + sorted[hi] as f64 * frac)
}

impl MonteCarloStats {
    /// Summarize the packs needed per trial
    pub fn from_results(results: &[u64], pack_price: f64) -> Result<Self> {
        if results.is_empty() {
            return Err(SimError::EmptyResultSet);
        }

        let mut sorted = results.to_vec();
        sorted.sort_unstable();

        Ok(MonteCarloStats {
            num_trials: results.len(),
            pack_price,
            mean_packs: mean(&sorted)?,
            std_dev_packs: std_dev(&sorted)?,
            min_packs: sorted[0],
            max_packs: sorted[sorted.len() - 1],
            median_packs: quantile_sorted(&sorted, 0.5)?,
            percentile_90: quantile_sorted(&sorted, 0.90)?,
            percentile_95: quantile_sorted(&sorted, 0.95)?,
        })
    }
}
