//! End-to-end solves through the compiled-in MILP backend.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use u_grouping::error::ConfigError;
use u_grouping::grouping::{
    check_assignment, render, Assignment, GroupingConfig, GroupingRunner, SolveResult,
};
use u_grouping::ilp::{GoodLpSolver, SolverConfig};

fn quiet() -> SolverConfig {
    SolverConfig::default()
        .with_verbose(false)
        .with_time_limit(Duration::from_secs(600))
}

fn run(people: u32, size: u32, days: u32, repeats: u32) -> SolveResult {
    let config = GroupingConfig::new(people, size, days, repeats);
    GroupingRunner::run(&config, &GoodLpSolver::new(), &quiet()).expect("valid config")
}

fn assert_valid(people: u32, size: u32, days: u32, repeats: u32) -> Assignment {
    let config = GroupingConfig::new(people, size, days, repeats);
    let result = GroupingRunner::run(&config, &GoodLpSolver::new(), &quiet()).unwrap();
    let assignment = match result {
        SolveResult::Optimal(a) => a,
        other => panic!("expected a solution for {config:?}, got {other:?}"),
    };
    assert_eq!(check_assignment(&config, &assignment), Ok(()));
    assignment
}

#[test]
fn reference_configuration_is_feasible() {
    let assignment = assert_valid(24, 6, 6, 2);
    let text = render(&SolveResult::Optimal(assignment));
    assert!(text.starts_with("Day 1:\n"));
    assert!(text.contains("\n\nDay 6:\n"));
    // 6 headers + 24 group lines + 5 separators
    assert_eq!(text.lines().count(), 35);
}

#[test]
fn one_group_without_repeats_is_infeasible() {
    assert_eq!(run(6, 6, 3, 0), SolveResult::Infeasible);
    assert_eq!(run(4, 4, 1, 0), SolveResult::Infeasible);
}

#[test]
fn one_group_within_cap_is_feasible() {
    let assignment = assert_valid(6, 6, 3, 3);
    assert_eq!(assignment.times_together(1, 6), 3);
}

#[test]
fn k4_one_factorisation() {
    let assignment = assert_valid(4, 2, 3, 1);
    for p1 in 1..=4 {
        for p2 in (p1 + 1)..=4 {
            assert_eq!(assignment.times_together(p1, p2), 1);
        }
    }
    assert_eq!(run(4, 2, 4, 1), SolveResult::Infeasible);
}

#[test]
fn pigeonhole_infeasibility() {
    // Any day-2 triple takes two people from one day-1 triple.
    assert_eq!(run(6, 3, 2, 1), SolveResult::Infeasible);
}

#[test]
fn affine_plane_is_label_invariant() {
    let config = GroupingConfig::new(9, 3, 4, 1);
    let assignment = assert_valid(9, 3, 4, 1);

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5 {
        let mut labels: Vec<u32> = (1..=9).collect();
        labels.shuffle(&mut rng);
        let mut days: Vec<Vec<Vec<u32>>> = assignment
            .days
            .iter()
            .map(|groups| {
                let mut groups: Vec<Vec<u32>> = groups
                    .iter()
                    .map(|m| m.iter().map(|&p| labels[(p - 1) as usize]).collect::<Vec<u32>>())
                    .collect();
                groups.shuffle(&mut rng);
                groups
            })
            .collect();
        days.shuffle(&mut rng);
        assert_eq!(check_assignment(&config, &Assignment::new(days)), Ok(()));
    }
}

#[test]
fn invalid_config_never_reaches_solver() {
    let config = GroupingConfig::new(25, 6, 6, 2);
    let result = GroupingRunner::run(&config, &GoodLpSolver::new(), &quiet());
    assert_eq!(
        result,
        Err(ConfigError::NotDivisible {
            num_people: 25,
            group_size: 6
        })
    );
}

#[test]
fn parallel_sweep_over_repeat_caps() {
    let configs: Vec<GroupingConfig> = (0..=2)
        .map(|r| GroupingConfig::new(6, 3, 2, r))
        .collect();
    let results = GroupingRunner::sweep(&configs, &GoodLpSolver::new(), &quiet(), true);

    assert_eq!(results[0], Ok(SolveResult::Infeasible));
    assert_eq!(results[1], Ok(SolveResult::Infeasible));
    let solved = results[2].as_ref().unwrap();
    assert!(solved.is_optimal());
    assert_eq!(check_assignment(&configs[2], solved.assignment().unwrap()), Ok(()));
}
