use serde::{Deserialize, Serialize};
use std::fmt;

/// Missing-value summary of one variable (column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSummary {
    pub variable: String,
    pub n_missing: usize,
    pub n_cases: usize,
    pub pct_missing: f64,
}

/// Missing-value summary of one case (row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSummary {
    /// Row position in the source table.
    pub case: usize,
    pub n_missing: usize,
    pub pct_missing: f64,
}

/// How many variables share a given number of missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableJoint {
    pub n_missing_in_variable: usize,
    pub n_variables: usize,
    pub pct_variables: f64,
}

/// How many cases share a given number of missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseJoint {
    pub n_missing_in_case: usize,
    pub n_cases: usize,
    pub pct_cases: f64,
}

/// Missingness of one variable inside a fixed-size block of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanSummary {
    pub span_counter: usize,
    pub n_in_span: usize,
    pub n_missing: usize,
    pub n_complete: usize,
    pub pct_missing: f64,
    pub pct_complete: f64,
}

/// State of a run in [`RunSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Complete,
    Missing,
}

impl RunState {
    pub fn from_missing(missing: bool) -> Self {
        if missing {
            RunState::Missing
        } else {
            RunState::Complete
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Complete => "complete",
            RunState::Missing => "missing",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of rows sharing one missingness state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_length: usize,
    pub is_na: RunState,
}

/// Number of cases with one particular pattern of missing variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCombination {
    /// Missingness per chosen variable, in the order the variables were given.
    pub pattern: Vec<bool>,
    pub n_cases: usize,
}

static_assertions::assert_impl_all!(VariableSummary: Send, Sync);
static_assertions::assert_impl_all!(CaseSummary: Send, Sync);
static_assertions::assert_impl_all!(SpanSummary: Send, Sync);
static_assertions::assert_impl_all!(RunSummary: Send, Sync);
static_assertions::assert_impl_all!(MissingCombination: Send, Sync);
