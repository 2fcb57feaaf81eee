//! Categorical draw distribution
//!
//! Turns the target item list into a distribution over `[items..., NONE]`,
//! where `NONE` carries the remaining probability mass (a non-target pull).

use std::collections::HashSet;

use log::debug;
use rand_distr::WeightedAliasIndex;

use crate::error::{Result, SimError};
use crate::models::{TargetItem, NONE_OUTCOME};

/// Slack allowed when checking that target probabilities fit in one pack
pub const PROBABILITY_EPSILON: f64 = 1e-9;

/// Normalized categorical distribution
///
/// Outcomes `0..target_count()` are the target items in input order, the last
/// outcome is always [`NONE_OUTCOME`].
#[derive(Clone, Debug, PartialEq)]
pub struct Distribution {
    outcomes: Vec<String>,
    weights: Vec<f64>,
}

impl Distribution {
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of target outcomes (everything except `NONE`)
    pub fn target_count(&self) -> usize {
        self.outcomes.len() - 1
    }

    /// Weight of the synthetic non-target outcome
    pub fn none_weight(&self) -> f64 {
        self.weights[self.weights.len() - 1]
    }

    /// Build an alias-method sampler over the outcome indices
    pub fn sampler(&self) -> Result<WeightedAliasIndex<f64>> {
        Ok(WeightedAliasIndex::new(self.weights.clone())?)
    }
}

/// Build the categorical distribution for a list of target items
///
/// Pure function: the same items always give the same distribution.
pub fn build_distribution(items: &[TargetItem]) -> Result<Distribution> {
    if items.is_empty() {
        return Err(SimError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !item.probability.is_finite() || item.probability < 0.0 {
            return Err(SimError::InvalidProbability {
                name: item.name.clone(),
                probability: item.probability,
            });
        }
        if item.name.trim().is_empty() {
            return Err(SimError::EmptyName);
        }
        if item.name == NONE_OUTCOME {
            return Err(SimError::ReservedName(item.name.clone()));
        }
        if !seen.insert(item.name.as_str()) {
            return Err(SimError::DuplicateItem(item.name.clone()));
        }
    }

    let p_hit: f64 = items.iter().map(|item| item.probability).sum();
    if p_hit > 1.0 + PROBABILITY_EPSILON {
        return Err(SimError::ProbabilityBudgetExceeded(p_hit));
    }

    let mut outcomes: Vec<String> = items.iter().map(|item| item.name.clone()).collect();
    outcomes.push(NONE_OUTCOME.to_string());

    let mut weights: Vec<f64> = items.iter().map(|item| item.probability).collect();
    weights.push((1.0 - p_hit).max(0.0));

    // Absorb floating point drift
    let total: f64 = weights.iter().sum();
    for w in weights.iter_mut() {
        *w /= total;
    }

    debug!(
        "Built distribution over {} targets, hit probability {:.6}",
        items.len(),
        p_hit
    );

    Ok(Distribution { outcomes, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, f64)]) -> Vec<TargetItem> {
        pairs.iter().map(|(n, p)| TargetItem::new(*n, *p)).collect()
    }

    #[test]
    fn test_appends_none_with_remaining_mass() {
        let dist = build_distribution(&items(&[("A", 0.5), ("B", 0.3)])).unwrap();

        assert_eq!(dist.outcomes(), &["A", "B", NONE_OUTCOME]);
        assert_eq!(dist.target_count(), 2);
        assert!((dist.weights()[0] - 0.5).abs() < 1e-12);
        assert!((dist.weights()[1] - 0.3).abs() < 1e-12);
        assert!((dist.none_weight() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let dist = build_distribution(&items(&[("A", 0.1), ("B", 0.2), ("C", 0.05)])).unwrap();
        let total: f64 = dist.weights().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_budget_gives_zero_none_weight() {
        let dist = build_distribution(&items(&[("A", 0.5), ("B", 0.5)])).unwrap();
        assert_eq!(dist.none_weight(), 0.0);
    }

    #[test]
    fn test_drift_within_epsilon_is_clamped() {
        let dist = build_distribution(&items(&[("A", 0.5), ("B", 0.500_000_000_5)])).unwrap();
        assert_eq!(dist.none_weight(), 0.0);
        let total: f64 = dist.weights().iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_probability_rejected() {
        let err = build_distribution(&items(&[("A", 0.5), ("B", -0.1)])).unwrap_err();
        assert!(matches!(err, SimError::InvalidProbability { ref name, .. } if name == "B"));
    }

    #[test]
    fn test_nan_probability_rejected() {
        let err = build_distribution(&items(&[("A", f64::NAN)])).unwrap_err();
        assert!(matches!(err, SimError::InvalidProbability { .. }));
    }

    #[test]
    fn test_budget_exceeded() {
        let err = build_distribution(&items(&[("A", 0.6), ("B", 0.5)])).unwrap_err();
        match err {
            SimError::ProbabilityBudgetExceeded(sum) => assert!((sum - 1.1).abs() < 1e-9),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(build_distribution(&[]), Err(SimError::EmptyInput)));
    }

    #[test]
    fn test_duplicate_and_reserved_names_rejected() {
        let err = build_distribution(&items(&[("A", 0.1), ("A", 0.2)])).unwrap_err();
        assert!(matches!(err, SimError::DuplicateItem(ref n) if n == "A"));

        let err = build_distribution(&items(&[(NONE_OUTCOME, 0.1)])).unwrap_err();
        assert!(matches!(err, SimError::ReservedName(_)));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = build_distribution(&items(&[("", 0.1)])).unwrap_err();
        assert!(matches!(err, SimError::EmptyName));

        let err = build_distribution(&items(&[("A", 0.1), ("   ", 0.2)])).unwrap_err();
        assert!(matches!(err, SimError::EmptyName));
    }

    #[test]
    fn test_build_is_pure() {
        let input = items(&[("A", 0.25), ("B", 0.25)]);
        assert_eq!(build_distribution(&input).unwrap(), build_distribution(&input).unwrap());
    }
}
