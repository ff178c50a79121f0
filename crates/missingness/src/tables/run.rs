//! Run-length encoding of a column's missingness.

use crate::mask::ColumnMask;
use crate::types::{RunState, RunSummary};
use tracing::debug;

/// Collapse `column` into maximal runs of equal missingness, in row order.
pub fn variable_run(column: &ColumnMask) -> Vec<RunSummary> {
    let mut runs: Vec<RunSummary> = Vec::new();

    for &missing in &column.missing {
        let state = RunState::from_missing(missing);
        match runs.last_mut() {
            Some(run) if run.is_na == state => run.run_length += 1,
            _ => runs.push(RunSummary {
                run_length: 1,
                is_na: state,
            }),
        }
    }

    debug!("Run table for '{}': {} runs", column.name, runs.len());
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(missing: &[bool]) -> ColumnMask {
        ColumnMask {
            name: "x".to_string(),
            missing: missing.to_vec(),
        }
    }

    #[test]
    fn test_alternating_runs() {
        let runs = variable_run(&column(&[false, true, false, true]));
        let expected: Vec<RunSummary> = [
            RunState::Complete,
            RunState::Missing,
            RunState::Complete,
            RunState::Missing,
        ]
        .into_iter()
        .map(|is_na| RunSummary {
            run_length: 1,
            is_na,
        })
        .collect();

        assert_eq!(runs, expected);
    }

    #[test]
    fn test_runs_reconstruct_length_and_alternate() {
        let missing = [true, true, false, false, false, true, false, false];
        let runs = variable_run(&column(&missing));

        let lengths: Vec<usize> = runs.iter().map(|r| r.run_length).collect();
        assert_eq!(lengths, vec![2, 3, 1, 2]);
        assert_eq!(lengths.iter().sum::<usize>(), missing.len());
        assert!(runs.windows(2).all(|w| w[0].is_na != w[1].is_na));
        assert_eq!(runs[0].is_na, RunState::Missing);
    }

    #[test]
    fn test_single_run() {
        let runs = variable_run(&column(&[false; 5]));
        assert_eq!(
            runs,
            vec![RunSummary {
                run_length: 5,
                is_na: RunState::Complete,
            }]
        );
    }

    #[test]
    fn test_empty_column_has_no_runs() {
        assert!(variable_run(&column(&[])).is_empty());
    }
}
