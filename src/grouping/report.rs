//! Plain-text rendering of solve results.

use std::fmt::Write;

use super::runner::SolveResult;
use super::types::Assignment;

/// Renders a result for human consumption.
///
/// An assignment becomes one block per day:
///
/// ```text
/// Day 1:
/// [1, 2, 3]
/// [4, 5, 6]
///
/// Day 2:
/// ...
/// ```
///
/// Any other result becomes a single `No solution found: ...` line.
pub fn render(result: &SolveResult) -> String {
    match result {
        SolveResult::Optimal(assignment) => render_assignment(assignment),
        SolveResult::Infeasible => {
            "No solution found: the constraints are infeasible.\n".to_string()
        }
        SolveResult::Unknown(reason) => format!("No solution found: {reason}.\n"),
    }
}

/// Renders an assignment, days and groups in index order.
pub fn render_assignment(assignment: &Assignment) -> String {
    let mut out = String::new();
    for (d, groups) in assignment.days.iter().enumerate() {
        if d > 0 {
            out.push('\n');
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Day {}:", d + 1);
        for members in groups {
            let _ = writeln!(out, "{members:?}");
        }
    }
    out
}
