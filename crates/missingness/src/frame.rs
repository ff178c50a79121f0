//! Conversion of row tables into Polars `DataFrame`s.
//!
//! Counts become `UInt64` columns, percentages `Float64`, labels `String`.

use crate::types::{
    CaseJoint, CaseSummary, MissingCombination, RunSummary, SpanSummary, VariableJoint,
    VariableSummary,
};
use polars::prelude::*;

/// A table of rows that can be materialized as a `DataFrame`.
pub trait IntoFrame {
    fn to_frame(&self) -> PolarsResult<DataFrame>;
}

fn counts<T>(rows: &[T], f: impl Fn(&T) -> usize) -> Vec<u64> {
    rows.iter().map(|row| f(row) as u64).collect()
}

fn floats<T>(rows: &[T], f: impl Fn(&T) -> f64) -> Vec<f64> {
    rows.iter().map(f).collect()
}

impl IntoFrame for [VariableSummary] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let variables: Vec<&str> = self.iter().map(|r| r.variable.as_str()).collect();
        df![
            "variable" => variables,
            "n_missing" => counts(self, |r| r.n_missing),
            "n_cases" => counts(self, |r| r.n_cases),
            "pct_missing" => floats(self, |r| r.pct_missing),
        ]
    }
}

impl IntoFrame for [CaseSummary] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df![
            "case" => counts(self, |r| r.case),
            "n_missing" => counts(self, |r| r.n_missing),
            "pct_missing" => floats(self, |r| r.pct_missing),
        ]
    }
}

impl IntoFrame for [VariableJoint] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df![
            "n_missing_in_variable" => counts(self, |r| r.n_missing_in_variable),
            "n_variables" => counts(self, |r| r.n_variables),
            "pct_variables" => floats(self, |r| r.pct_variables),
        ]
    }
}

impl IntoFrame for [CaseJoint] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df![
            "n_missing_in_case" => counts(self, |r| r.n_missing_in_case),
            "n_cases" => counts(self, |r| r.n_cases),
            "pct_cases" => floats(self, |r| r.pct_cases),
        ]
    }
}

impl IntoFrame for [SpanSummary] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        df![
            "span_counter" => counts(self, |r| r.span_counter),
            "n_in_span" => counts(self, |r| r.n_in_span),
            "n_missing" => counts(self, |r| r.n_missing),
            "n_complete" => counts(self, |r| r.n_complete),
            "pct_missing" => floats(self, |r| r.pct_missing),
            "pct_complete" => floats(self, |r| r.pct_complete),
        ]
    }
}

impl IntoFrame for [RunSummary] {
    fn to_frame(&self) -> PolarsResult<DataFrame> {
        let states: Vec<&str> = self.iter().map(|r| r.is_na.as_str()).collect();
        df![
            "run_length" => counts(self, |r| r.run_length),
            "is_na" => states,
        ]
    }
}

/// Materialize missingness combinations with one boolean column per variable
/// followed by an `n_cases` count column.
pub fn combinations_to_frame(
    variables: &[String],
    rows: &[MissingCombination],
) -> PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = variables
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<bool> = rows.iter().map(|r| r.pattern[idx]).collect();
            Column::new(name.as_str().into(), values)
        })
        .collect();
    columns.push(Column::new("n_cases".into(), counts(rows, |r| r.n_cases)));

    DataFrame::new(columns)
}
