//! ILP solver interface.

use super::model::IlpModel;
use std::time::Duration;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    /// A solution satisfying every constraint was found and certified.
    ///
    /// The model has no objective, so any feasible point is optimal.
    Optimal,
    /// No assignment satisfies the constraints.
    Infeasible,
    /// The backend reported an unbounded relaxation.
    Unbounded,
    /// Solver exceeded its time limit without a verdict.
    Timeout,
    /// Model is invalid or malformed.
    ModelInvalid,
    /// No verdict for any other reason (backend error, undefined status).
    Unknown,
}

/// Solution from an ILP solver.
#[derive(Debug, Clone, PartialEq)]
pub struct IlpSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Variable values, indexed by `VarId`. Empty unless `status` is `Optimal`.
    pub values: Vec<bool>,
    /// Backend diagnostic, if the solver produced one.
    pub message: Option<String>,
    /// Solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl IlpSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            values: Vec::new(),
            message: None,
            solve_time_ms: 0,
        }
    }

    /// Attaches a backend diagnostic.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Solver configuration.
///
/// Passed explicitly to every solve so that independent runs never share
/// hidden state.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_grouping::ilp::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_verbose(false)
///     .with_time_limit(Duration::from_secs(30))
///     .with_threads(2);
/// assert_eq!(config.time_limit, Some(Duration::from_secs(30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Forward the backend's progress log to its output channel.
    pub verbose: bool,
    /// Wall-clock budget. `None` = no limit.
    pub time_limit: Option<Duration>,
    /// Number of backend threads. `None` = backend default.
    pub threads: Option<u32>,
    /// Backend random seed. `None` = backend default.
    pub seed: Option<u32>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            time_limit: None,
            threads: None,
            seed: None,
        }
    }
}

impl SolverConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Trait for ILP solver implementations.
///
/// Implementors wrap an exact MILP backend. They must either return
/// `Optimal` together with a value for every variable, or a non-`Optimal`
/// status with no values.
pub trait IlpSolver: Send + Sync {
    /// Solves the model and returns a solution.
    fn solve(&self, model: &IlpModel, config: &SolverConfig) -> IlpSolution;
}
