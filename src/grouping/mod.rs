//! Repeat-bounded group assignment.
//!
//! Splits people into equal-sized groups on each of several days so that no
//! pair shares a group more than a fixed number of times. This is the
//! social golfer problem with repeats allowed.
//!
//! # Key Components
//!
//! - **Config**: [`GroupingConfig`]: people, group size, days, repeat cap
//! - **Model**: [`build_model`] → [`GroupingModel`], the binary ILP
//! - **Runner**: [`solve`] / [`GroupingRunner`] → [`SolveResult`]
//! - **Check**: [`check_assignment`], structural verification
//! - **Report**: [`render`], plain-text output
//!
//! # References
//!
//! - CSPLib prob010, "Social Golfers Problem"
//! - Triska & Musliu (2012), "An effective greedy heuristic for the Social
//!   Golfer Problem"

mod check;
mod config;
mod model;
mod report;
mod runner;
mod types;

pub use check::{check_assignment, pair_counts, CheckResult, Violation, ViolationKind};
pub use config::GroupingConfig;
pub use model::{build_model, ConstraintCounts, GroupingModel};
pub use report::{render, render_assignment};
pub use runner::{solve, GroupingRunner, SolveResult};
pub use types::{pair_index, pairs, Assignment, Person};
