//! Binary integer linear programming (ILP) layer.
//!
//! A backend-agnostic model for pure-feasibility 0/1 programs: boolean
//! variables plus linear equalities and inequalities with integer
//! coefficients.
//!
//! # Key Components
//!
//! - **Variables**: [`BoolVar`], addressed by [`VarId`]
//! - **Constraints**: [`LinearConstraint`] with a [`Comparison`] sense
//! - **Model**: [`IlpModel`]: container for variables and constraints
//! - **Solver**: [`IlpSolver`] trait, implemented by [`GoodLpSolver`]
//!
//! # Design
//!
//! This module does not solve anything itself. [`GoodLpSolver`] forwards the
//! model to an external MILP engine through good_lp. Other engines plug in by
//! implementing [`IlpSolver`].

mod backend;
mod model;
mod solver;
mod variables;

pub use backend::GoodLpSolver;
pub use model::{Comparison, IlpModel, LinearConstraint};
pub use solver::{IlpSolution, IlpSolver, SolverConfig, SolverStatus};
pub use variables::{BoolVar, VarId};
