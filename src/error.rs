//! Error types.

use thiserror::Error;

/// Invalid grouping parameters.
///
/// Always raised before a model is built, so it never reaches a solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("number of people must be positive")]
    ZeroPeople,

    #[error("group size must be positive")]
    ZeroGroupSize,

    #[error("number of days must be positive")]
    ZeroDays,

    #[error("{num_people} people cannot be split into groups of {group_size}")]
    NotDivisible { num_people: u32, group_size: u32 },

    #[error("{num_people} people over {num_days} days is too large to model")]
    TooLarge { num_people: u32, num_days: u32 },

    #[error("invalid value for {key}: {value:?}")]
    InvalidEnv { key: String, value: String },
}

/// Why a solve ended without a certified assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownReason {
    #[error("solver time limit reached")]
    Timeout,

    #[error("solver reported an unbounded model")]
    Unbounded,

    #[error("solver rejected the model: {0}")]
    ModelInvalid(String),

    #[error("solver unavailable or undecided: {0}")]
    Backend(String),

    #[error("solver returned an assignment that fails verification: {0}")]
    InvalidSolution(String),
}
