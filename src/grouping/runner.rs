//! Solver invocation and result extraction.
//!
//! # Pipeline
//!
//! 1. Validate the config and build the ILP ([`build_model`])
//! 2. Hand the ILP to an [`IlpSolver`]
//! 3. Read the assignment variables back into an [`Assignment`]
//! 4. Verify the assignment against every ILP constraint and against
//!    [`check_assignment`]
//!
//! A result is reported as `Optimal` only after step 4 passes.

use rayon::prelude::*;
use tracing::{info, warn};

use super::check::check_assignment;
use super::config::GroupingConfig;
use super::model::{build_model, GroupingModel};
use super::types::Assignment;
use crate::error::{ConfigError, UnknownReason};
use crate::ilp::{IlpSolver, SolverConfig, SolverStatus};

/// Outcome of solving a grouping model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// A verified assignment.
    Optimal(Assignment),
    /// The solver proved that no assignment exists.
    Infeasible,
    /// No verdict. Fatal for the run; no partial assignment is produced.
    Unknown(UnknownReason),
}

impl SolveResult {
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveResult::Optimal(_))
    }

    /// The assignment, if one was found.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveResult::Optimal(a) => Some(a),
            _ => None,
        }
    }
}

/// Solves a grouping model with the given backend.
pub fn solve(model: &GroupingModel, solver: &dyn IlpSolver, config: &SolverConfig) -> SolveResult {
    let solution = solver.solve(model.ilp(), config);
    let message = solution.message.unwrap_or_default();

    match solution.status {
        SolverStatus::Optimal => match extract(model, &solution.values) {
            Ok(assignment) => SolveResult::Optimal(assignment),
            Err(reason) => {
                warn!(%reason, "discarding solver output");
                SolveResult::Unknown(UnknownReason::InvalidSolution(reason))
            }
        },
        SolverStatus::Infeasible => SolveResult::Infeasible,
        SolverStatus::Unbounded => SolveResult::Unknown(UnknownReason::Unbounded),
        SolverStatus::Timeout => SolveResult::Unknown(UnknownReason::Timeout),
        SolverStatus::ModelInvalid => SolveResult::Unknown(UnknownReason::ModelInvalid(message)),
        SolverStatus::Unknown => SolveResult::Unknown(UnknownReason::Backend(message)),
    }
}

/// Reads and verifies the assignment encoded in `values`.
fn extract(model: &GroupingModel, values: &[bool]) -> Result<Assignment, String> {
    let ilp = model.ilp();
    if values.len() != ilp.var_count() {
        return Err(format!(
            "expected {} values, got {}",
            ilp.var_count(),
            values.len()
        ));
    }
    if let Some(i) = ilp.first_violation(values) {
        return Err(format!("constraint {i} is violated"));
    }

    let config = model.config();
    let is_set = |d: usize, g: usize, p: u32| {
        model
            .assignment_var(d, g, p)
            .and_then(|id| values.get(id.index()).copied())
            .unwrap_or(false)
    };
    let days = (0..config.num_days as usize)
        .map(|d| {
            (0..config.num_groups() as usize)
                .map(|g| {
                    (1..=config.num_people)
                        .filter(|&p| is_set(d, g, p))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let assignment = Assignment::new(days);

    check_assignment(config, &assignment).map_err(|violations| {
        violations
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })?;
    Ok(assignment)
}

/// Runs the full build → solve → verify pipeline.
pub struct GroupingRunner;

impl GroupingRunner {
    /// Solves a single configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use u_grouping::grouping::{GroupingConfig, GroupingRunner};
    /// use u_grouping::ilp::{GoodLpSolver, SolverConfig};
    ///
    /// let result = GroupingRunner::run(
    ///     &GroupingConfig::default(),
    ///     &GoodLpSolver::new(),
    ///     &SolverConfig::default(),
    /// )
    /// .unwrap();
    /// assert!(result.is_optimal());
    /// ```
    pub fn run(
        config: &GroupingConfig,
        solver: &dyn IlpSolver,
        solver_config: &SolverConfig,
    ) -> Result<SolveResult, ConfigError> {
        let model = build_model(config)?;
        info!(
            people = config.num_people,
            group_size = config.group_size,
            days = config.num_days,
            repeats = config.repeats_allowed,
            "solving grouping problem"
        );
        Ok(solve(&model, solver, solver_config))
    }

    /// Solves several independent configurations.
    ///
    /// Each configuration gets its own model and solver session. Results are
    /// returned in input order.
    pub fn sweep(
        configs: &[GroupingConfig],
        solver: &dyn IlpSolver,
        solver_config: &SolverConfig,
        parallel: bool,
    ) -> Vec<Result<SolveResult, ConfigError>> {
        if parallel {
            configs
                .par_iter()
                .map(|c| Self::run(c, solver, solver_config))
                .collect()
        } else {
            configs
                .iter()
                .map(|c| Self::run(c, solver, solver_config))
                .collect()
        }
    }
}
