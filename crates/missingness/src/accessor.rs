//! The [`Missingness`] wrapper: every analysis bound to one table.

use crate::config::MissingnessConfig;
use crate::error::{MissingnessError, Result, ResultExt};
use crate::mask::{ColumnMask, MissingnessMask};
use crate::plot::{self, PlotSurface, SpanPlotOptions};
use crate::shadow::{self, ShadowLabels};
use crate::tables;
use crate::types::{
    CaseJoint, CaseSummary, MissingCombination, RunSummary, SpanSummary, VariableJoint,
    VariableSummary,
};
use crate::utils::{percentage, require_column};
use polars::prelude::*;
use tracing::debug;

/// Missing-value analysis over a borrowed [`DataFrame`].
///
/// Every call recomputes its masks from the frame; nothing is cached and the
/// frame is never modified.
///
/// # Example
///
/// ```rust,ignore
/// use missingness::Missingness;
///
/// let ms = Missingness::new(&df);
/// println!("{} missing cells", ms.number_missing()?);
///
/// for row in ms.table_variable_summary()? {
///     println!("{:<12} {:>5.1}%", row.variable, row.pct_missing);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Missingness<'a> {
    df: &'a DataFrame,
    config: MissingnessConfig,
}

impl<'a> Missingness<'a> {
    /// Wrap `df` with the default configuration.
    pub fn new(df: &'a DataFrame) -> Self {
        Self {
            df,
            config: MissingnessConfig::default(),
        }
    }

    /// Wrap `df` with a custom configuration, validating it first.
    pub fn with_config(df: &'a DataFrame, config: MissingnessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { df, config })
    }

    pub fn frame(&self) -> &'a DataFrame {
        self.df
    }

    pub fn config(&self) -> &MissingnessConfig {
        &self.config
    }

    /// Fresh missingness mask of the whole table.
    pub fn mask(&self) -> Result<MissingnessMask> {
        MissingnessMask::from_frame(self.df, self.config.nan_as_missing)
            .context("Computing missingness mask")
    }

    fn column_mask(&self, variable: &str) -> Result<ColumnMask> {
        let column = require_column(self.df, variable)?;
        Ok(ColumnMask::from_column(column, self.config.nan_as_missing)?)
    }

    // =========================================================================
    // Aggregate counts
    // =========================================================================

    /// Total number of missing cells.
    pub fn number_missing(&self) -> Result<usize> {
        Ok(self.mask()?.total_missing())
    }

    /// Total number of present cells.
    pub fn number_complete(&self) -> Result<usize> {
        let mask = self.mask()?;
        Ok(mask.size() - mask.total_missing())
    }

    /// Share of missing cells over the whole table, in percent.
    pub fn pct_missing(&self) -> Result<f64> {
        let mask = self.mask()?;
        percentage(
            mask.total_missing(),
            mask.size(),
            self.config.empty_input,
            "cells",
        )
    }

    // =========================================================================
    // Tabulation
    // =========================================================================

    pub fn table_variable_summary(&self) -> Result<Vec<VariableSummary>> {
        tables::variable_summary(&self.mask()?, self.config.empty_input)
    }

    pub fn table_variable_joint(&self) -> Result<Vec<VariableJoint>> {
        tables::variable_joint(&self.table_variable_summary()?)
    }

    pub fn table_case_summary(&self) -> Result<Vec<CaseSummary>> {
        tables::case_summary(&self.mask()?, self.config.empty_input)
    }

    pub fn table_case_joint(&self) -> Result<Vec<CaseJoint>> {
        tables::case_joint(&self.table_case_summary()?)
    }

    /// Missingness of `variable` over consecutive blocks of `span_every` rows.
    pub fn table_variable_span(&self, variable: &str, span_every: usize) -> Result<Vec<SpanSummary>> {
        let column = self.column_mask(variable)?;
        tables::variable_span(&column, span_every)
    }

    /// Runs of consecutive missing / complete values of `variable`.
    pub fn table_variable_run(&self, variable: &str) -> Result<Vec<RunSummary>> {
        let column = self.column_mask(variable)?;
        Ok(tables::variable_run(&column))
    }

    /// Missingness patterns over `variables` (all columns when `None`).
    ///
    /// Returns the variable names in use alongside the pattern counts. An
    /// explicit empty list is an [`MissingnessError::InvalidParameter`].
    pub fn table_missing_combinations(
        &self,
        variables: Option<&[&str]>,
    ) -> Result<(Vec<String>, Vec<MissingCombination>)> {
        if variables.is_some_and(|vars| vars.is_empty()) {
            return Err(MissingnessError::invalid_parameter(
                "variables",
                "at least one variable is required",
            ));
        }

        let mask = self.mask()?;
        let names: Vec<String> = match variables {
            Some(vars) => vars.iter().map(|v| v.to_string()).collect(),
            None => mask.columns().iter().map(|c| c.name.clone()).collect(),
        };

        let columns = names
            .iter()
            .map(|name| {
                mask.column(name)
                    .ok_or_else(|| MissingnessError::ColumnNotFound(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let combinations = tables::missing_combinations(&columns, mask.height());
        Ok((names, combinations))
    }

    // =========================================================================
    // Visualization
    // =========================================================================

    pub fn vis_proportion(&self, surface: &mut impl PlotSurface) -> Result<()> {
        plot::proportion(&self.table_variable_summary()?, surface)
    }

    pub fn vis_variable_plot(&self, surface: &mut impl PlotSurface) -> Result<()> {
        plot::variable_plot(&self.table_variable_summary()?, surface)
    }

    pub fn vis_variable_span_plot(
        &self,
        variable: &str,
        span_every: usize,
        options: SpanPlotOptions,
        surface: &mut impl PlotSurface,
    ) -> Result<()> {
        let spans = self.table_variable_span(variable, span_every)?;
        plot::variable_span_plot(&spans, span_every, options, surface)
    }

    pub fn vis_upsetplot(
        &self,
        variables: Option<&[&str]>,
        surface: &mut impl PlotSurface,
    ) -> Result<()> {
        let (names, combinations) = self.table_missing_combinations(variables)?;
        plot::upset(&names, &combinations, surface)
    }

    pub fn vis_case_plot(&self, surface: &mut impl PlotSurface) -> Result<()> {
        plot::case_plot(&self.table_case_summary()?, surface)
    }

    // =========================================================================
    // Reordering and shadow matrix
    // =========================================================================

    /// The table with columns ordered by missing count (descending unless
    /// `ascending`), ties in original order.
    pub fn sort_variables_by_missingness(&self, ascending: bool) -> Result<DataFrame> {
        shadow::sort_variables_by_missingness(self.df, &self.mask()?, ascending)
    }

    fn labels<'s>(&'s self, true_string: &'s str, false_string: &'s str) -> ShadowLabels<'s> {
        ShadowLabels {
            true_string,
            false_string,
            suffix: &self.config.shadow_suffix,
        }
    }

    /// Shadow matrix with explicit labels.
    pub fn create_shadow_matrix(
        &self,
        true_string: &str,
        false_string: &str,
        only_missing: bool,
    ) -> Result<DataFrame> {
        let labels = self.labels(true_string, false_string);
        shadow::create_shadow_matrix(&self.mask()?, &labels, only_missing)
    }

    /// The table followed by its shadow matrix.
    pub fn bind_shadow_matrix(
        &self,
        true_string: &str,
        false_string: &str,
        only_missing: bool,
    ) -> Result<DataFrame> {
        let labels = self.labels(true_string, false_string);
        let bound = shadow::bind_shadow_matrix(self.df, &self.mask()?, &labels, only_missing)?;
        debug!("Bound shadow matrix: {:?}", bound.shape());
        Ok(bound)
    }

    /// Shadow matrix using the labels and filter from the configuration.
    pub fn shadow_matrix(&self) -> Result<DataFrame> {
        self.create_shadow_matrix(
            &self.config.true_string,
            &self.config.false_string,
            self.config.only_missing,
        )
    }

    /// Bound shadow matrix using the labels and filter from the configuration.
    pub fn bound_shadow_matrix(&self) -> Result<DataFrame> {
        self.bind_shadow_matrix(
            &self.config.true_string,
            &self.config.false_string,
            self.config.only_missing,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmptyInputPolicy;
    use crate::plot::{Figure, Mark};
    use crate::types::RunState;

    fn sample() -> DataFrame {
        df![
            "A" => [Some(1i64), None, Some(3), None],
            "B" => [1i64, 2, 3, 4],
        ]
        .unwrap()
    }

    #[test]
    fn test_counts_example() {
        let df = sample();
        let ms = Missingness::new(&df);
        assert_eq!(ms.number_missing().unwrap(), 2);
        assert_eq!(ms.number_complete().unwrap(), 6);
        assert_eq!(ms.pct_missing().unwrap(), 25.0);
    }

    #[test]
    fn test_run_example() {
        let df = sample();
        let runs = Missingness::new(&df).table_variable_run("A").unwrap();
        let states: Vec<RunState> = runs.iter().map(|r| r.is_na).collect();
        assert_eq!(
            states,
            vec![
                RunState::Complete,
                RunState::Missing,
                RunState::Complete,
                RunState::Missing
            ]
        );
        assert!(runs.iter().all(|r| r.run_length == 1));
    }

    #[test]
    fn test_unknown_variable() {
        let df = sample();
        let ms = Missingness::new(&df);

        assert!(matches!(
            ms.table_variable_run("Z").unwrap_err(),
            MissingnessError::ColumnNotFound(name) if name == "Z"
        ));
        assert_eq!(
            ms.table_variable_span("Z", 2).unwrap_err().error_code(),
            "COLUMN_NOT_FOUND"
        );
        assert_eq!(
            ms.table_missing_combinations(Some(&["A", "Z"][..]))
                .unwrap_err()
                .error_code(),
            "COLUMN_NOT_FOUND"
        );
    }

    #[test]
    fn test_empty_variable_list_rejected() {
        let df = sample();
        let ms = Missingness::new(&df);

        let err = ms.table_missing_combinations(Some(&[][..])).unwrap_err();
        assert!(matches!(
            err,
            MissingnessError::InvalidParameter { ref name, .. } if name == "variables"
        ));

        let mut figure = Figure::new();
        assert_eq!(
            ms.vis_upsetplot(Some(&[][..]), &mut figure)
                .unwrap_err()
                .error_code(),
            "INVALID_PARAMETER"
        );
        assert!(figure.is_empty());
    }

    #[test]
    fn test_span_errors_before_plotting() {
        let df = sample();
        let ms = Missingness::new(&df);
        let mut figure = Figure::new();

        let err = ms
            .vis_variable_span_plot("A", 0, SpanPlotOptions::default(), &mut figure)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(figure.is_empty());
    }

    #[test]
    fn test_shadow_example() {
        let df = sample();
        let shadow = Missingness::new(&df)
            .create_shadow_matrix("missing", "present", false)
            .unwrap();

        let values: Vec<&str> = shadow
            .column("A_na")
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(values, vec!["present", "missing", "present", "missing"]);
    }

    #[test]
    fn test_config_driven_shadow() {
        let df = sample();
        let config = MissingnessConfig::builder()
            .true_string("NA")
            .false_string("!NA")
            .shadow_suffix("_shadow")
            .only_missing(true)
            .build()
            .unwrap();
        let ms = Missingness::with_config(&df, config).unwrap();

        let bound = ms.bound_shadow_matrix().unwrap();
        assert_eq!(bound.width(), 3);
        assert!(bound.column("A_shadow").is_ok());
        assert!(bound.column("B_shadow").is_err());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let df = sample();
        let config = MissingnessConfig {
            shadow_suffix: String::new(),
            ..MissingnessConfig::default()
        };
        let err = Missingness::with_config(&df, config).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_empty_input_policy() {
        let df = df!["a" => Vec::<f64>::new()].unwrap();

        let lenient = Missingness::new(&df);
        assert_eq!(lenient.number_missing().unwrap(), 0);
        assert_eq!(lenient.number_complete().unwrap(), 0);
        assert_eq!(lenient.pct_missing().unwrap(), 0.0);

        let config = MissingnessConfig::builder()
            .empty_input(EmptyInputPolicy::Error)
            .build()
            .unwrap();
        let strict = Missingness::with_config(&df, config).unwrap();
        assert_eq!(strict.pct_missing().unwrap_err().error_code(), "EMPTY_INPUT");
        assert!(strict.table_variable_summary().is_err());
        assert!(strict.table_variable_run("a").unwrap().is_empty());
    }

    #[test]
    fn test_vis_upsetplot_defaults_to_all_columns() {
        let df = sample();
        let mut figure = Figure::new();
        Missingness::new(&df).vis_upsetplot(None, &mut figure).unwrap();

        match &figure.marks[0] {
            Mark::Upset {
                variables,
                combinations,
            } => {
                assert_eq!(variables, &vec!["A".to_string(), "B".to_string()]);
                assert_eq!(combinations.len(), 2);
                assert_eq!(combinations[0].n_cases, 2);
            }
            other => panic!("unexpected mark {:?}", other),
        }
    }

    #[test]
    fn test_vis_case_plot_on_empty_table_fails() {
        let df = df!["a" => Vec::<i32>::new()].unwrap();
        let mut figure = Figure::new();
        let err = Missingness::new(&df).vis_case_plot(&mut figure).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_INPUT");
    }

    #[test]
    fn test_source_frame_untouched() {
        let df = sample();
        let ms = Missingness::new(&df);
        let _ = ms.bind_shadow_matrix("m", "p", false).unwrap();
        let _ = ms.sort_variables_by_missingness(false).unwrap();
        assert_eq!(df.shape(), (4, 2));
        assert_eq!(ms.frame().get_column_names()[0].as_str(), "A");
    }
}
