//! Error types for the pack simulator

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid probability for '{name}': {probability}")]
    InvalidProbability { name: String, probability: f64 },

    #[error("Sum of target probabilities exceeds 1.0: {0}")]
    ProbabilityBudgetExceeded(f64),

    #[error("Target item name must not be empty")]
    EmptyName,

    #[error("Duplicate target item: {0}")]
    DuplicateItem(String),

    #[error("Item name '{0}' is reserved for the non-target outcome")]
    ReservedName(String),

    #[error("Number of trials must be > 0")]
    InvalidTrialCount,

    #[error("Number of RNG streams must be > 0")]
    InvalidStreamCount,

    #[error("Pack price must be a non-negative number, got {0}")]
    InvalidPackPrice(f64),

    #[error("Quantile must be within [0,1], got {0}")]
    InvalidQuantile(f64),

    #[error("Cannot compute statistics of an empty result set")]
    EmptyResultSet,

    #[error("Input contains no target items")]
    EmptyInput,

    #[error("Trial did not collect every target within {limit} packs")]
    DrawLimitExceeded { limit: u64 },

    #[error("Missing column '{0}' in CSV header")]
    MissingColumn(&'static str),

    #[error("Malformed CSV row at line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build sampler: {0}")]
    Sampler(#[from] rand_distr::WeightedError),
}

pub type Result<T> = std::result::Result<T, SimError>;
