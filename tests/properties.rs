//! Property tests for the model builder and the checker.

use proptest::prelude::*;
use u_grouping::grouping::{
    build_model, check_assignment, pair_counts, pairs, Assignment, ConstraintCounts,
    GroupingConfig, ViolationKind,
};

/// Affine plane of order 3: rows, columns, diagonals, anti-diagonals.
fn affine_plane() -> Vec<Vec<Vec<u32>>> {
    vec![
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]],
        vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]],
        vec![vec![1, 5, 9], vec![2, 6, 7], vec![3, 4, 8]],
        vec![vec![1, 6, 8], vec![2, 4, 9], vec![3, 5, 7]],
    ]
}

fn relabel(days: &[Vec<Vec<u32>>], labels: &[u32]) -> Vec<Vec<Vec<u32>>> {
    days.iter()
        .map(|groups| {
            groups
                .iter()
                .map(|m| m.iter().map(|&p| labels[(p - 1) as usize]).collect::<Vec<u32>>())
                .collect()
        })
        .collect()
}

fn valid_config() -> impl Strategy<Value = GroupingConfig> {
    (1u32..=4, 1u32..=4, 1u32..=4, 0u32..=3).prop_map(|(size, groups, days, repeats)| {
        GroupingConfig::new(size * groups, size, days, repeats)
    })
}

#[test]
fn affine_plane_is_valid() {
    let config = GroupingConfig::new(9, 3, 4, 1);
    let a = Assignment::new(affine_plane());
    assert_eq!(check_assignment(&config, &a), Ok(()));
    assert!(pair_counts(&a, 9).iter().all(|&c| c == 1));
}

proptest! {
    #[test]
    fn model_sizes_match_formulas(config in valid_config()) {
        let model = build_model(&config).unwrap();
        let days = config.num_days as usize;
        let groups = config.num_groups() as usize;
        let people = config.num_people as usize;

        prop_assert_eq!(model.num_assignment_vars(), days * groups * people);
        prop_assert_eq!(model.num_cooccurrence_vars(), days * people * (people - 1) / 2);
        prop_assert_eq!(model.constraint_counts(), ConstraintCounts::expected(&config));
        prop_assert_eq!(model.ilp().constraint_count(), model.constraint_counts().total());
        prop_assert!(model.ilp().validate().is_ok());
    }

    #[test]
    fn model_construction_is_idempotent(config in valid_config()) {
        prop_assert_eq!(build_model(&config).unwrap(), build_model(&config).unwrap());
    }

    #[test]
    fn non_divisible_configs_are_rejected(size in 2u32..=8, extra in 1u32..8, days in 1u32..=6) {
        prop_assume!(extra % size != 0);
        let config = GroupingConfig::new(size * 3 + extra, size, days, 2);
        prop_assert!(build_model(&config).is_err());
    }

    #[test]
    fn checker_ignores_labels_and_order(
        labels in Just((1u32..=9).collect::<Vec<_>>()).prop_shuffle(),
        day_shift in 0usize..4,
        group_shift in 0usize..3,
    ) {
        let config = GroupingConfig::new(9, 3, 4, 1);
        let mut days = relabel(&affine_plane(), &labels);
        days.rotate_left(day_shift);
        for groups in &mut days {
            groups.rotate_left(group_shift);
        }
        prop_assert_eq!(check_assignment(&config, &Assignment::new(days)), Ok(()));
    }

    #[test]
    fn merging_two_labels_is_detected(a in 1u32..=9, b in 1u32..=9) {
        prop_assume!(a != b);
        let config = GroupingConfig::new(9, 3, 4, 1);
        let labels: Vec<u32> = (1..=9).map(|p| if p == b { a } else { p }).collect();
        let days = relabel(&affine_plane(), &labels);
        let violations = check_assignment(&config, &Assignment::new(days)).unwrap_err();
        let kinds: Vec<ViolationKind> = violations.iter().map(|v| v.kind).collect();
        prop_assert!(kinds.contains(&ViolationKind::PersonMissing));
        prop_assert!(kinds.contains(&ViolationKind::PersonDuplicated));
    }

    #[test]
    fn pair_counts_sum_to_meetings(config in valid_config()) {
        // Round-robin layout: person p goes to group (p - 1 + d) % groups.
        let groups = config.num_groups() as usize;
        let days: Vec<Vec<Vec<u32>>> = (0..config.num_days as usize)
            .map(|d| {
                let mut day = vec![Vec::new(); groups];
                for p in 1..=config.num_people {
                    day[(p as usize - 1 + d) % groups].push(p);
                }
                day
            })
            .collect();
        let a = Assignment::new(days);
        let counts = pair_counts(&a, config.num_people);
        let meetings: usize = a
            .days
            .iter()
            .flatten()
            .map(|m| m.len() * m.len().saturating_sub(1) / 2)
            .sum();
        prop_assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), meetings);
        prop_assert_eq!(counts.len(), pairs(config.num_people).count());
    }
}
