//! ILP model definition.

use super::variables::{BoolVar, VarId};
use std::fmt;

/// Sense of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `lhs == rhs`
    Eq,
    /// `lhs <= rhs`
    Le,
    /// `lhs >= rhs`
    Ge,
}

impl Comparison {
    /// Evaluates `lhs <op> rhs`.
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Comparison::Eq => lhs == rhs,
            Comparison::Le => lhs <= rhs,
            Comparison::Ge => lhs >= rhs,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Comparison::Eq => "==",
            Comparison::Le => "<=",
            Comparison::Ge => ">=",
        };
        f.write_str(op)
    }
}

/// A linear constraint `sum(coef * var) <op> rhs` over boolean variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearConstraint {
    /// (variable, coefficient) pairs.
    pub terms: Vec<(VarId, i64)>,
    /// Constraint sense.
    pub comparison: Comparison,
    /// Right-hand side constant.
    pub rhs: i64,
}

impl LinearConstraint {
    /// Creates a constraint from its parts.
    pub fn new(terms: Vec<(VarId, i64)>, comparison: Comparison, rhs: i64) -> Self {
        Self {
            terms,
            comparison,
            rhs,
        }
    }

    /// `sum(vars) == rhs` with unit coefficients.
    pub fn sum_eq(vars: impl IntoIterator<Item = VarId>, rhs: i64) -> Self {
        Self::new(vars.into_iter().map(|v| (v, 1)).collect(), Comparison::Eq, rhs)
    }

    /// `sum(vars) <= rhs` with unit coefficients.
    pub fn sum_le(vars: impl IntoIterator<Item = VarId>, rhs: i64) -> Self {
        Self::new(vars.into_iter().map(|v| (v, 1)).collect(), Comparison::Le, rhs)
    }

    /// Evaluates the left-hand side under a 0/1 assignment.
    ///
    /// Returns `None` if a term references a variable outside `values`.
    pub fn lhs(&self, values: &[bool]) -> Option<i64> {
        self.terms.iter().try_fold(0i64, |acc, &(var, coef)| {
            values.get(var.index()).map(|&v| acc + coef * i64::from(v))
        })
    }

    /// Whether the constraint holds under a 0/1 assignment.
    pub fn is_satisfied(&self, values: &[bool]) -> bool {
        self.lhs(values)
            .is_some_and(|lhs| self.comparison.holds(lhs, self.rhs))
    }
}

/// A pure-feasibility binary integer linear program.
///
/// Holds boolean variables and linear constraints. There is no objective:
/// any assignment satisfying every constraint is a solution.
///
/// # Examples
///
/// ```
/// use u_grouping::ilp::{BoolVar, IlpModel, LinearConstraint};
///
/// let mut model = IlpModel::new("pick-one");
/// let a = model.add_bool_var(BoolVar::new("a"));
/// let b = model.add_bool_var(BoolVar::new("b"));
/// model.add_constraint(LinearConstraint::sum_eq([a, b], 1));
/// assert!(model.validate().is_ok());
/// assert_eq!(model.var_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IlpModel {
    /// Model name.
    pub name: String,
    /// Boolean variables, indexed by [`VarId`].
    pub vars: Vec<BoolVar>,
    /// Constraints, in insertion order.
    pub constraints: Vec<LinearConstraint>,
}

impl IlpModel {
    /// Creates a new empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Creates an empty model with preallocated storage.
    pub fn with_capacity(name: impl Into<String>, vars: usize, constraints: usize) -> Self {
        Self {
            name: name.into(),
            vars: Vec::with_capacity(vars),
            constraints: Vec::with_capacity(constraints),
        }
    }

    /// Adds a boolean variable and returns its id.
    pub fn add_bool_var(&mut self, var: BoolVar) -> VarId {
        self.vars.push(var);
        VarId(self.vars.len() - 1)
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Looks up a variable by id.
    pub fn var(&self, id: VarId) -> Option<&BoolVar> {
        self.vars.get(id.index())
    }

    /// Validates the model for consistency.
    ///
    /// Checks that every constraint references existing variables and has
    /// at least one term.
    pub fn validate(&self) -> Result<(), String> {
        for (i, constraint) in self.constraints.iter().enumerate() {
            if constraint.terms.is_empty() {
                return Err(format!("constraint {i} has no terms"));
            }
            for &(var, _) in &constraint.terms {
                if var.index() >= self.vars.len() {
                    return Err(format!("constraint {i}: undefined variable {var}"));
                }
            }
        }
        Ok(())
    }

    /// Index of the first constraint violated by `values`, if any.
    pub fn first_violation(&self, values: &[bool]) -> Option<usize> {
        self.constraints
            .iter()
            .position(|c| !c.is_satisfied(values))
    }

    /// Returns the number of variables.
    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
