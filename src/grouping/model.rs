//! ILP formulation of the grouping problem.
//!
//! # Variables
//!
//! - `x[d][g][p]`: person `p` is in group `g` on day `d`
//! - `y[d][p1][p2]` (`p1 < p2`): `p1` and `p2` may share a group on day `d`
//!
//! # Constraints
//!
//! 1. `sum_g x[d][g][p] == 1` for every day and person
//! 2. `sum_p x[d][g][p] == group_size` for every day and group
//! 3. `y[d][p1][p2] >= x[d][g][p1] + x[d][g][p2] - 1` for every day, pair and group
//! 4. `sum_d y[d][p1][p2] <= repeats_allowed` for every pair
//!
//! Constraint 3 is the AND-linearization of `x[d][g][p1] * x[d][g][p2]`. It
//! forces `y` up to 1 when a pair shares a group and leaves it free
//! otherwise; the cap in constraint 4 only needs `y` to bound the true
//! co-occurrence from above.
//!
//! # Reference
//!
//! Glover & Woolsey (1974), "Converting the 0-1 polynomial programming
//! problem to a 0-1 linear program"

use tracing::debug;

use super::config::GroupingConfig;
use super::types::{pair_index, pairs, Person};
use crate::error::ConfigError;
use crate::ilp::{BoolVar, Comparison, IlpModel, LinearConstraint, VarId};

/// Number of constraints emitted per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintCounts {
    pub one_group_per_day: usize,
    pub group_size: usize,
    pub linearization: usize,
    pub repeat_cap: usize,
}

impl ConstraintCounts {
    /// Expected counts for a config that passed
    /// [`GroupingConfig::validate`].
    pub fn expected(config: &GroupingConfig) -> Self {
        let days = config.num_days as usize;
        let groups = config.num_groups() as usize;
        let people = config.num_people as usize;
        let pairs = config.num_pairs();
        Self {
            one_group_per_day: days * people,
            group_size: days * groups,
            linearization: days * pairs * groups,
            repeat_cap: pairs,
        }
    }

    pub fn total(&self) -> usize {
        self.one_group_per_day + self.group_size + self.linearization + self.repeat_cap
    }
}

/// The grouping ILP together with its variable layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingModel {
    config: GroupingConfig,
    ilp: IlpModel,
    counts: ConstraintCounts,
    /// Id of the first co-occurrence variable.
    cooccurrence_offset: usize,
}

impl GroupingModel {
    /// Parameters this model was built from.
    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// The underlying ILP.
    pub fn ilp(&self) -> &IlpModel {
        &self.ilp
    }

    /// Constraint counts per family.
    pub fn constraint_counts(&self) -> ConstraintCounts {
        self.counts
    }

    pub fn num_assignment_vars(&self) -> usize {
        self.cooccurrence_offset
    }

    pub fn num_cooccurrence_vars(&self) -> usize {
        self.ilp.var_count() - self.cooccurrence_offset
    }

    /// Variable `x[day][group][person]`.
    ///
    /// Returns `None` if any index is out of range.
    pub fn assignment_var(&self, day: usize, group: usize, person: Person) -> Option<VarId> {
        let c = &self.config;
        if day >= c.num_days as usize
            || group >= c.num_groups() as usize
            || person == 0
            || person > c.num_people
        {
            return None;
        }
        Some(x_id(c, day, group, person))
    }

    /// Variable `y[day][p1][p2]`. The two people may be given in either order.
    ///
    /// Returns `None` if the day is out of range or the people are equal or
    /// out of range.
    pub fn cooccurrence_var(&self, day: usize, p1: Person, p2: Person) -> Option<VarId> {
        let c = &self.config;
        let in_range = |p: Person| (1..=c.num_people).contains(&p);
        if day >= c.num_days as usize || p1 == p2 || !in_range(p1) || !in_range(p2) {
            return None;
        }
        Some(y_id(c, self.cooccurrence_offset, day, p1, p2))
    }
}

fn x_id(c: &GroupingConfig, day: usize, group: usize, person: Person) -> VarId {
    let groups = c.num_groups() as usize;
    let people = c.num_people as usize;
    VarId((day * groups + group) * people + (person - 1) as usize)
}

fn y_id(c: &GroupingConfig, offset: usize, day: usize, p1: Person, p2: Person) -> VarId {
    VarId(offset + day * c.num_pairs() + pair_index(c.num_people, p1, p2))
}

/// Builds the grouping ILP.
///
/// Deterministic: equal configs produce equal models. Fails with
/// [`ConfigError`] before allocating anything if the config is invalid.
///
/// # Examples
///
/// ```
/// use u_grouping::grouping::{build_model, GroupingConfig};
///
/// let model = build_model(&GroupingConfig::default()).unwrap();
/// assert_eq!(model.num_assignment_vars(), 6 * 4 * 24);
/// assert_eq!(model.num_cooccurrence_vars(), 6 * 276);
/// ```
pub fn build_model(config: &GroupingConfig) -> Result<GroupingModel, ConfigError> {
    config.validate()?;

    let days = config.num_days as usize;
    let groups = config.num_groups() as usize;
    let people = config.num_people;
    let counts = ConstraintCounts::expected(config);
    let num_x = days * groups * people as usize;
    let num_y = days * config.num_pairs();

    let mut ilp = IlpModel::with_capacity("group_assignment", num_x + num_y, counts.total());

    for d in 0..days {
        for g in 0..groups {
            for p in 1..=people {
                ilp.add_bool_var(BoolVar::new(format!("x_{d}_{g}_{p}")));
            }
        }
    }
    let offset = ilp.var_count();
    for d in 0..days {
        for (p1, p2) in pairs(people) {
            ilp.add_bool_var(BoolVar::new(format!("y_{d}_{p1}_{p2}")));
        }
    }

    // 1. Each person is in exactly one group per day.
    for d in 0..days {
        for p in 1..=people {
            let vars = (0..groups).map(|g| x_id(config, d, g, p));
            ilp.add_constraint(LinearConstraint::sum_eq(vars, 1));
        }
    }

    // 2. Each group has exactly group_size members per day.
    for d in 0..days {
        for g in 0..groups {
            let vars = (1..=people).map(|p| x_id(config, d, g, p));
            ilp.add_constraint(LinearConstraint::sum_eq(
                vars,
                i64::from(config.group_size),
            ));
        }
    }

    // 3. y - x_p1 - x_p2 >= -1
    for d in 0..days {
        for (p1, p2) in pairs(people) {
            let y = y_id(config, offset, d, p1, p2);
            for g in 0..groups {
                ilp.add_constraint(LinearConstraint::new(
                    vec![
                        (y, 1),
                        (x_id(config, d, g, p1), -1),
                        (x_id(config, d, g, p2), -1),
                    ],
                    Comparison::Ge,
                    -1,
                ));
            }
        }
    }

    // 4. Repeat cap.
    for (p1, p2) in pairs(people) {
        let vars = (0..days).map(|d| y_id(config, offset, d, p1, p2));
        ilp.add_constraint(LinearConstraint::sum_le(
            vars,
            i64::from(config.repeats_allowed),
        ));
    }

    debug!(
        people,
        groups,
        days,
        assignment_vars = num_x,
        cooccurrence_vars = num_y,
        constraints = ilp.constraint_count(),
        "built grouping model"
    );

    Ok(GroupingModel {
        config: *config,
        ilp,
        counts,
        cooccurrence_offset: offset,
    })
}
