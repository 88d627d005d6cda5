//! ILP variable types.

use std::fmt;

/// Index of a variable inside an [`IlpModel`](super::IlpModel).
///
/// Ids are dense: the `n`-th variable added to a model has id `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(pub usize);

impl VarId {
    /// Position of the variable in the model's variable list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A binary (0/1) decision variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolVar {
    /// Variable name, used for solver diagnostics.
    pub name: String,
    /// Fixed value, if any.
    pub fixed: Option<bool>,
}

impl BoolVar {
    /// Creates a new free boolean variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed: None,
        }
    }

    /// Creates a boolean variable fixed to `value`.
    pub fn fixed(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            fixed: Some(value),
        }
    }

    /// Whether this variable is fixed to a single value.
    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_var() {
        let b = BoolVar::new("x_0_0_1");
        assert!(!b.is_fixed());

        let f = BoolVar::fixed("y_0_1_2", true);
        assert_eq!(f.fixed, Some(true));
        assert!(f.is_fixed());
    }

    #[test]
    fn test_var_id_display() {
        assert_eq!(VarId(7).to_string(), "v7");
        assert_eq!(VarId(7).index(), 7);
    }
}
