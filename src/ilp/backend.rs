//! good_lp bridge.
//!
//! Translates an [`IlpModel`] into a good_lp problem and hands it to the
//! MILP engine selected at compile time:
//!
//! - `highs` (default): HiGHS branch-and-cut, honours every
//!   [`SolverConfig`] field.
//! - `microlp`: pure-Rust engine, used only when `highs` is disabled.
//!   It has no log output, time limit or thread control.

use std::time::{Duration, Instant};

use good_lp::{
    constraint, variable, Constraint, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};
use tracing::{debug, info, warn};

use super::model::{Comparison, IlpModel, LinearConstraint};
use super::solver::{IlpSolution, IlpSolver, SolverConfig, SolverStatus};

#[cfg(not(any(feature = "highs", feature = "microlp")))]
compile_error!("u-grouping needs a MILP backend: enable feature `highs` or `microlp`");

#[cfg(feature = "highs")]
const BACKEND: &str = "highs";
#[cfg(all(feature = "microlp", not(feature = "highs")))]
const BACKEND: &str = "microlp";

/// Exact ILP solver backed by good_lp.
///
/// Stateless: every call builds a fresh backend session, so one instance can
/// be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }

    /// Name of the compiled-in MILP engine.
    pub fn backend_name(&self) -> &'static str {
        BACKEND
    }
}

impl IlpSolver for GoodLpSolver {
    fn solve(&self, model: &IlpModel, config: &SolverConfig) -> IlpSolution {
        if let Err(e) = model.validate() {
            warn!(model = %model.name, error = %e, "refusing to solve invalid model");
            return IlpSolution::empty(SolverStatus::ModelInvalid).with_message(e);
        }

        info!(
            model = %model.name,
            backend = BACKEND,
            vars = model.var_count(),
            constraints = model.constraint_count(),
            "solving"
        );
        let start_time = Instant::now();

        let mut problem_vars = ProblemVariables::new();
        let handles: Vec<Variable> = model
            .vars
            .iter()
            .map(|v| {
                let mut def = variable().binary().name(v.name.clone());
                if let Some(value) = v.fixed {
                    let bound = if value { 1.0 } else { 0.0 };
                    def = def.min(bound).max(bound);
                }
                problem_vars.add(def)
            })
            .collect();

        let constraints: Vec<Constraint> = model
            .constraints
            .iter()
            .map(|c| to_constraint(c, &handles))
            .collect();
        debug!(count = constraints.len(), "constraints translated");

        let outcome = run_backend(problem_vars, constraints, &handles, config);
        let elapsed = start_time.elapsed();

        let mut solution = match outcome {
            Ok(values) => IlpSolution {
                status: SolverStatus::Optimal,
                values,
                message: None,
                solve_time_ms: 0,
            },
            Err(e) => classify_error(e, elapsed, config),
        };
        solution.solve_time_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        info!(
            status = ?solution.status,
            elapsed_ms = solution.solve_time_ms,
            "solver finished"
        );
        solution
    }
}

fn to_constraint(c: &LinearConstraint, handles: &[Variable]) -> Constraint {
    let lhs: Expression = c
        .terms
        .iter()
        .map(|&(var, coef)| coef as f64 * handles[var.index()])
        .sum();
    let rhs = c.rhs as f64;
    match c.comparison {
        Comparison::Eq => constraint!(lhs == rhs),
        Comparison::Le => constraint!(lhs <= rhs),
        Comparison::Ge => constraint!(lhs >= rhs),
    }
}

#[cfg(feature = "highs")]
fn run_backend(
    vars: ProblemVariables,
    constraints: Vec<Constraint>,
    handles: &[Variable],
    config: &SolverConfig,
) -> Result<Vec<bool>, ResolutionError> {
    // Feasibility only: the objective is the constant 0.
    let mut problem = vars
        .minimise(Expression::from(0.0))
        .using(good_lp::highs)
        .set_verbose(config.verbose);
    if let Some(limit) = config.time_limit {
        problem = problem.set_option("time_limit", limit.as_secs_f64());
    }
    if let Some(threads) = config.threads {
        problem = problem.set_option("threads", i32::try_from(threads).unwrap_or(i32::MAX));
    }
    if let Some(seed) = config.seed {
        problem = problem.set_option("random_seed", i32::try_from(seed).unwrap_or(i32::MAX));
    }
    solve_and_read(problem, constraints, handles)
}

#[cfg(all(feature = "microlp", not(feature = "highs")))]
fn run_backend(
    vars: ProblemVariables,
    constraints: Vec<Constraint>,
    handles: &[Variable],
    config: &SolverConfig,
) -> Result<Vec<bool>, ResolutionError> {
    if config.time_limit.is_some() {
        warn!("microlp has no time limit; running to completion");
    }
    if config.threads.is_some() || config.seed.is_some() {
        debug!("microlp ignores thread and seed settings");
    }
    let problem = vars
        .minimise(Expression::from(0.0))
        .using(good_lp::microlp);
    solve_and_read(problem, constraints, handles)
}

fn solve_and_read<M>(
    mut problem: M,
    constraints: Vec<Constraint>,
    handles: &[Variable],
) -> Result<Vec<bool>, ResolutionError>
where
    M: SolverModel<Error = ResolutionError>,
{
    for c in constraints {
        problem.add_constraint(c);
    }
    let solution = problem.solve()?;
    Ok(handles.iter().map(|&v| solution.value(v) > 0.5).collect())
}

fn classify_error(e: ResolutionError, elapsed: Duration, config: &SolverConfig) -> IlpSolution {
    match e {
        ResolutionError::Infeasible => IlpSolution::empty(SolverStatus::Infeasible),
        ResolutionError::Unbounded => IlpSolution::empty(SolverStatus::Unbounded),
        other => {
            let message = other.to_string();
            let timed_out = config.time_limit.is_some_and(|limit| elapsed >= limit)
                || message.to_ascii_lowercase().contains("time limit");
            let status = if timed_out {
                SolverStatus::Timeout
            } else {
                SolverStatus::Unknown
            };
            IlpSolution::empty(status).with_message(message)
        }
    }
}
