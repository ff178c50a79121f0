//! Per-variable and per-case summaries, and their joint (grouped) tables.

use crate::config::EmptyInputPolicy;
use crate::error::Result;
use crate::mask::MissingnessMask;
use crate::types::{CaseJoint, CaseSummary, VariableJoint, VariableSummary};
use crate::utils::{percentage, sort_groups_by_share};
use std::collections::BTreeMap;
use tracing::debug;

/// One row per column, in column order.
pub fn variable_summary(
    mask: &MissingnessMask,
    policy: EmptyInputPolicy,
) -> Result<Vec<VariableSummary>> {
    let n_cases = mask.height();

    let rows = mask
        .columns()
        .iter()
        .map(|column| {
            let n_missing = column.n_missing();
            Ok(VariableSummary {
                variable: column.name.clone(),
                n_missing,
                n_cases,
                pct_missing: percentage(n_missing, n_cases, policy, "rows")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Variable summary computed for {} columns", rows.len());
    Ok(rows)
}

/// One row per case, in row order.
pub fn case_summary(mask: &MissingnessMask, policy: EmptyInputPolicy) -> Result<Vec<CaseSummary>> {
    let n_columns = mask.width();

    let rows = mask
        .row_missing_counts()
        .into_iter()
        .enumerate()
        .map(|(case, n_missing)| {
            Ok(CaseSummary {
                case,
                n_missing,
                pct_missing: percentage(n_missing, n_columns, policy, "columns")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Case summary computed for {} rows", rows.len());
    Ok(rows)
}

/// Count how often each missing count occurs, returned as `(count, frequency)`
/// sorted by frequency descending and missing count ascending.
fn group_counts(values: impl IntoIterator<Item = usize>) -> Vec<(usize, usize)> {
    let mut groups: BTreeMap<usize, usize> = BTreeMap::new();
    for value in values {
        *groups.entry(value).or_insert(0) += 1;
    }

    let mut groups: Vec<(usize, usize)> = groups.into_iter().collect();
    sort_groups_by_share(&mut groups);
    groups
}

/// Group variables by their number of missing values.
pub fn variable_joint(summary: &[VariableSummary]) -> Result<Vec<VariableJoint>> {
    let total = summary.len();
    group_counts(summary.iter().map(|row| row.n_missing))
        .into_iter()
        .map(|(n_missing, n_variables)| {
            Ok(VariableJoint {
                n_missing_in_variable: n_missing,
                n_variables,
                // groups only exist when total > 0
                pct_variables: percentage(n_variables, total, EmptyInputPolicy::Zero, "variables")?,
            })
        })
        .collect()
}

/// Group cases by their number of missing values.
pub fn case_joint(summary: &[CaseSummary]) -> Result<Vec<CaseJoint>> {
    let total = summary.len();
    group_counts(summary.iter().map(|row| row.n_missing))
        .into_iter()
        .map(|(n_missing, n_cases)| {
            Ok(CaseJoint {
                n_missing_in_case: n_missing,
                n_cases,
                pct_cases: percentage(n_cases, total, EmptyInputPolicy::Zero, "cases")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use pretty_assertions::assert_eq;

    fn mask_of(df: &DataFrame) -> MissingnessMask {
        MissingnessMask::from_frame(df, true).unwrap()
    }

    fn sample() -> DataFrame {
        df![
            "A" => [Some(1i64), None, Some(3), None],
            "B" => [1i64, 2, 3, 4],
        ]
        .unwrap()
    }

    #[test]
    fn test_variable_summary_example() {
        let rows = variable_summary(&mask_of(&sample()), EmptyInputPolicy::Zero).unwrap();

        assert_eq!(
            rows,
            vec![
                VariableSummary {
                    variable: "A".to_string(),
                    n_missing: 2,
                    n_cases: 4,
                    pct_missing: 50.0,
                },
                VariableSummary {
                    variable: "B".to_string(),
                    n_missing: 0,
                    n_cases: 4,
                    pct_missing: 0.0,
                },
            ]
        );
    }

    #[test]
    fn test_case_summary_preserves_row_order() {
        let rows = case_summary(&mask_of(&sample()), EmptyInputPolicy::Zero).unwrap();
        let cases: Vec<usize> = rows.iter().map(|r| r.case).collect();
        let missing: Vec<usize> = rows.iter().map(|r| r.n_missing).collect();
        assert_eq!(cases, vec![0, 1, 2, 3]);
        assert_eq!(missing, vec![0, 1, 0, 1]);
        assert_eq!(rows[1].pct_missing, 50.0);
    }

    #[test]
    fn test_variable_joint_sorted_and_tie_broken() {
        // missing counts: a=1, b=0, c=1, d=0 -> two groups of two, tie on pct
        let df = df![
            "a" => [None, Some(1i32)],
            "b" => [Some(1i32), Some(2)],
            "c" => [Some(1i32), None],
            "d" => [Some(1i32), Some(2)],
        ]
        .unwrap();

        let summary = variable_summary(&mask_of(&df), EmptyInputPolicy::Zero).unwrap();
        let joint = variable_joint(&summary).unwrap();

        assert_eq!(
            joint,
            vec![
                VariableJoint {
                    n_missing_in_variable: 0,
                    n_variables: 2,
                    pct_variables: 50.0,
                },
                VariableJoint {
                    n_missing_in_variable: 1,
                    n_variables: 2,
                    pct_variables: 50.0,
                },
            ]
        );
    }

    #[test]
    fn test_case_joint_descending_share() {
        let df = df![
            "a" => [None, Some(1i32), Some(2), Some(3)],
            "b" => [None, Some(1i32), Some(2), None],
        ]
        .unwrap();

        let summary = case_summary(&mask_of(&df), EmptyInputPolicy::Zero).unwrap();
        let joint = case_joint(&summary).unwrap();

        let keys: Vec<usize> = joint.iter().map(|r| r.n_missing_in_case).collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(joint[0].n_cases, 2);
        assert_eq!(joint[0].pct_cases, 50.0);

        let total: f64 = joint.iter().map(|r| r.pct_cases).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_row_table() {
        let df = df!["a" => Vec::<i32>::new()].unwrap();
        let mask = mask_of(&df);

        let rows = variable_summary(&mask, EmptyInputPolicy::Zero).unwrap();
        assert_eq!(rows[0].pct_missing, 0.0);
        assert!(case_summary(&mask, EmptyInputPolicy::Error).unwrap().is_empty());

        let err = variable_summary(&mask, EmptyInputPolicy::Error).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_INPUT");
    }

    #[test]
    fn test_joint_of_empty_summary() {
        assert!(variable_joint(&[]).unwrap().is_empty());
        assert!(case_joint(&[]).unwrap().is_empty());
    }
}
