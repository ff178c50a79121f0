//! Co-occurrence patterns of missing values across a set of variables.

use crate::mask::ColumnMask;
use crate::types::MissingCombination;
use std::collections::HashMap;
use tracing::debug;

/// Count the cases sharing each missingness pattern over `columns`.
///
/// Patterns are ordered by number of cases descending; equal counts keep the
/// order in which the pattern first appears in the table.
pub fn missing_combinations(columns: &[&ColumnMask], height: usize) -> Vec<MissingCombination> {
    // pattern -> (first row, cases)
    let mut seen: HashMap<Vec<bool>, (usize, usize)> = HashMap::new();

    for row in 0..height {
        let pattern: Vec<bool> = columns.iter().map(|c| c.missing[row]).collect();
        seen.entry(pattern).or_insert((row, 0)).1 += 1;
    }

    let mut combos: Vec<(Vec<bool>, usize, usize)> = seen
        .into_iter()
        .map(|(pattern, (first, count))| (pattern, first, count))
        .collect();
    combos.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.1.cmp(&b.1)));

    debug!(
        "{} missingness patterns across {} variables",
        combos.len(),
        columns.len()
    );

    combos
        .into_iter()
        .map(|(pattern, _, n_cases)| MissingCombination { pattern, n_cases })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, missing: &[bool]) -> ColumnMask {
        ColumnMask {
            name: name.to_string(),
            missing: missing.to_vec(),
        }
    }

    #[test]
    fn test_patterns_counted_and_ordered() {
        let a = column("a", &[false, true, false, true, false]);
        let b = column("b", &[false, true, true, true, false]);

        let combos = missing_combinations(&[&a, &b], 5);

        assert_eq!(
            combos,
            vec![
                MissingCombination {
                    pattern: vec![false, false],
                    n_cases: 2,
                },
                MissingCombination {
                    pattern: vec![true, true],
                    n_cases: 2,
                },
                MissingCombination {
                    pattern: vec![false, true],
                    n_cases: 1,
                },
            ]
        );
        let total: usize = combos.iter().map(|c| c.n_cases).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_no_rows() {
        let a = column("a", &[]);
        assert!(missing_combinations(&[&a], 0).is_empty());
    }
}
