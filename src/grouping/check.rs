//! Structural verification of assignments.
//!
//! Checks an [`Assignment`] against a [`GroupingConfig`] without reference to
//! any particular layout. Relabelling people or permuting days or groups
//! never changes the verdict.
//!
//! Detects:
//! - Wrong number of days or groups
//! - Groups of the wrong size
//! - Identifiers outside `1..=num_people`
//! - People missing from a day, or placed twice on the same day
//! - Pairs that share a group more often than `repeats_allowed`

use super::config::GroupingConfig;
use super::types::{pair_index, Assignment, Person};

/// Verification result.
pub type CheckResult = Result<(), Vec<Violation>>;

/// A single problem found in an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    WrongDayCount,
    WrongGroupCount,
    WrongGroupSize,
    PersonOutOfRange,
    PersonMissing,
    PersonDuplicated,
    RepeatCapExceeded,
}

impl Violation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Verifies every structural property of an assignment.
///
/// # Returns
/// `Ok(())` if the assignment is valid, `Err(violations)` with every detected
/// issue otherwise.
pub fn check_assignment(config: &GroupingConfig, assignment: &Assignment) -> CheckResult {
    let mut violations = Vec::new();
    let n = config.num_people;
    let expected_groups = config.num_groups() as usize;

    if assignment.num_days() != config.num_days as usize {
        violations.push(Violation::new(
            ViolationKind::WrongDayCount,
            format!(
                "expected {} days, found {}",
                config.num_days,
                assignment.num_days()
            ),
        ));
    }

    for (d, groups) in assignment.days.iter().enumerate() {
        if groups.len() != expected_groups {
            violations.push(Violation::new(
                ViolationKind::WrongGroupCount,
                format!(
                    "day {d}: expected {expected_groups} groups, found {}",
                    groups.len()
                ),
            ));
        }

        let mut seen = vec![0u32; n as usize + 1];
        for (g, members) in groups.iter().enumerate() {
            if members.len() != config.group_size as usize {
                violations.push(Violation::new(
                    ViolationKind::WrongGroupSize,
                    format!(
                        "day {d}, group {g}: expected {} members, found {}",
                        config.group_size,
                        members.len()
                    ),
                ));
            }
            for &p in members {
                if p == 0 || p > n {
                    violations.push(Violation::new(
                        ViolationKind::PersonOutOfRange,
                        format!("day {d}, group {g}: person {p} out of range 1..={n}"),
                    ));
                } else {
                    seen[p as usize] += 1;
                }
            }
        }

        for p in 1..=n {
            match seen[p as usize] {
                1 => {}
                0 => violations.push(Violation::new(
                    ViolationKind::PersonMissing,
                    format!("day {d}: person {p} is not assigned"),
                )),
                k => violations.push(Violation::new(
                    ViolationKind::PersonDuplicated,
                    format!("day {d}: person {p} appears {k} times"),
                )),
            }
        }
    }

    let counts = pair_counts(assignment, n);
    for p1 in 1..=n {
        for p2 in (p1 + 1)..=n {
            let together = counts[pair_index(n, p1, p2)];
            if together > config.repeats_allowed {
                violations.push(Violation::new(
                    ViolationKind::RepeatCapExceeded,
                    format!(
                        "persons {p1} and {p2} share a group on {together} days (limit {})",
                        config.repeats_allowed
                    ),
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Number of days each unordered pair shares a group, indexed by
/// [`pair_index`].
///
/// Identifiers outside `1..=num_people` and repeated members are ignored.
pub fn pair_counts(assignment: &Assignment, num_people: u32) -> Vec<u32> {
    let n = num_people as usize;
    let mut counts = vec![0u32; n * n.saturating_sub(1) / 2];
    for groups in &assignment.days {
        for members in groups {
            let mut valid: Vec<Person> = members
                .iter()
                .copied()
                .filter(|p| (1..=num_people).contains(p))
                .collect();
            valid.sort_unstable();
            valid.dedup();
            for (i, &p1) in valid.iter().enumerate() {
                for &p2 in &valid[i + 1..] {
                    counts[pair_index(num_people, p1, p2)] += 1;
                }
            }
        }
    }
    counts
}
