//! Repeat-bounded group assignment as a binary integer linear program.
//!
//! Assigns people to equal-sized groups across several days so that no pair
//! shares a group more than a fixed number of times. The problem is
//! formulated as a 0/1 ILP and solved by an external MILP engine:
//!
//! - **ILP layer** ([`ilp`]): backend-agnostic boolean variables, linear
//!   constraints, and the [`ilp::IlpSolver`] trait, with a good_lp bridge
//!   (HiGHS by default).
//! - **Grouping** ([`grouping`]): the model builder, solver invocation,
//!   structural checker, and plain-text report.
//! - **Settings** ([`settings`]): environment-driven run configuration.
//!
//! # Architecture
//!
//! The crate contains no search code of its own. All solving is delegated
//! through [`ilp::IlpSolver`]; every returned assignment is re-verified
//! before it is reported.
//!
//! ```no_run
//! use u_grouping::grouping::{render, GroupingConfig, GroupingRunner};
//! use u_grouping::ilp::{GoodLpSolver, SolverConfig};
//!
//! let result = GroupingRunner::run(
//!     &GroupingConfig::default(),
//!     &GoodLpSolver::new(),
//!     &SolverConfig::default().with_verbose(false),
//! )?;
//! print!("{}", render(&result));
//! # Ok::<(), u_grouping::error::ConfigError>(())
//! ```

pub mod error;
pub mod grouping;
pub mod ilp;
pub mod settings;
