//! Visualizations of missingness tables.
//!
//! Each function takes the table it is derived from, refuses to draw an empty
//! table and then issues its marks and axis settings onto the surface.

use super::surface::{Axes, BarLayer, GridAxis, Mark, Orientation, PlotSurface, Ticks};
use crate::error::{MissingnessError, Result};
use crate::types::{CaseSummary, MissingCombination, SpanSummary, VariableSummary};
use tracing::debug;

const MISSING_COLOR: &str = "black";
const PRESENT_COLOR: &str = "lightgray";

/// Options for [`variable_span_plot`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpanPlotOptions {
    /// Rotation of the span number labels, in degrees.
    pub rot: i32,
    /// Figure size in inches.
    pub figsize: Option<(f64, f64)>,
}

fn ensure_rows<T>(rows: &[T], what: &str) -> Result<()> {
    if rows.is_empty() {
        return Err(MissingnessError::EmptyInput(format!(
            "nothing to plot: the {} table is empty",
            what
        )));
    }
    Ok(())
}

fn legend() -> Vec<String> {
    vec!["Missing".to_string(), "Present".to_string()]
}

/// Share of missing vs present cells per variable, as filled horizontal bars.
pub fn proportion(summary: &[VariableSummary], surface: &mut impl PlotSurface) -> Result<()> {
    ensure_rows(summary, "variable summary")?;

    let missing: Vec<f64> = summary.iter().map(|r| r.pct_missing / 100.0).collect();
    // a zero-row table has nothing present either
    let present: Vec<f64> = summary
        .iter()
        .map(|r| if r.n_cases == 0 { 0.0 } else { 1.0 - r.pct_missing / 100.0 })
        .collect();

    surface.draw(Mark::StackedBars {
        categories: summary.iter().map(|r| r.variable.clone()).collect(),
        layers: vec![
            BarLayer {
                label: "Missing".to_string(),
                values: missing,
                color: MISSING_COLOR.to_string(),
            },
            BarLayer {
                label: "Present".to_string(),
                values: present,
                color: PRESENT_COLOR.to_string(),
            },
        ],
        orientation: Orientation::Horizontal,
        width: 0.8,
    });
    surface.set_axes(Axes {
        x_label: Some("Proportion".to_string()),
        y_label: Some("Variable".to_string()),
        legend: legend(),
        ..Axes::default()
    });

    debug!("Proportion plot drawn for {} variables", summary.len());
    Ok(())
}

/// Lollipop chart of missing counts per variable, fewest missing at the bottom.
pub fn variable_plot(summary: &[VariableSummary], surface: &mut impl PlotSurface) -> Result<()> {
    ensure_rows(summary, "variable summary")?;

    let mut sorted: Vec<&VariableSummary> = summary.iter().collect();
    sorted.sort_by_key(|r| r.n_missing);

    let positions: Vec<f64> = (1..=sorted.len()).map(|i| i as f64).collect();
    let counts: Vec<f64> = sorted.iter().map(|r| r.n_missing as f64).collect();

    surface.draw(Mark::HLines {
        y: positions.clone(),
        xmin: 0.0,
        xmax: counts.clone(),
        color: MISSING_COLOR.to_string(),
    });
    surface.draw(Mark::Points {
        x: counts,
        y: positions.clone(),
        color: MISSING_COLOR.to_string(),
    });
    surface.set_axes(Axes {
        x_label: Some("Number missing".to_string()),
        y_label: Some("Variable".to_string()),
        y_ticks: Some(Ticks {
            positions,
            labels: sorted.iter().map(|r| r.variable.clone()).collect(),
            rotation: 0,
        }),
        grid: GridAxis::Y,
        ..Axes::default()
    });

    debug!("Variable plot drawn for {} variables", sorted.len());
    Ok(())
}

/// Stacked bars of missing and complete percentages per span.
pub fn variable_span_plot(
    spans: &[SpanSummary],
    span_every: usize,
    options: SpanPlotOptions,
    surface: &mut impl PlotSurface,
) -> Result<()> {
    ensure_rows(spans, "span")?;

    let categories: Vec<String> = spans.iter().map(|s| s.span_counter.to_string()).collect();

    surface.draw(Mark::StackedBars {
        categories: categories.clone(),
        layers: vec![
            BarLayer {
                label: "pct_missing".to_string(),
                values: spans.iter().map(|s| s.pct_missing).collect(),
                color: MISSING_COLOR.to_string(),
            },
            BarLayer {
                label: "pct_complete".to_string(),
                values: spans.iter().map(|s| s.pct_complete).collect(),
                color: PRESENT_COLOR.to_string(),
            },
        ],
        orientation: Orientation::Vertical,
        width: 1.0,
    });
    surface.set_axes(Axes {
        x_label: Some("Span number".to_string()),
        y_label: Some("Percentage missing".to_string()),
        title: Some(format!(
            "Percentage of missing values\nOver a repeating span of {} ",
            span_every
        )),
        legend: legend(),
        x_ticks: Some(Ticks {
            positions: (0..spans.len()).map(|i| i as f64).collect(),
            labels: categories,
            rotation: options.rot,
        }),
        grid: GridAxis::None,
        size: options.figsize,
        margins: Some(0.0),
        ..Axes::default()
    });

    debug!(
        "Span plot drawn: {} spans of {} rows",
        spans.len(),
        span_every
    );
    Ok(())
}

/// Upset diagram of missingness patterns over `variables`.
pub fn upset(
    variables: &[String],
    combinations: &[MissingCombination],
    surface: &mut impl PlotSurface,
) -> Result<()> {
    ensure_rows(combinations, "missingness combination")?;

    surface.draw(Mark::Upset {
        variables: variables.to_vec(),
        combinations: combinations.to_vec(),
    });
    surface.set_axes(Axes {
        y_label: Some("Number of cases".to_string()),
        ..Axes::default()
    });

    debug!(
        "Upset plot drawn: {} combinations over {} variables",
        combinations.len(),
        variables.len()
    );
    Ok(())
}

/// Histogram of the number of missing values per case.
pub fn case_plot(cases: &[CaseSummary], surface: &mut impl PlotSurface) -> Result<()> {
    ensure_rows(cases, "case summary")?;

    surface.draw(Mark::Histogram {
        values: cases.iter().map(|c| c.n_missing as f64).collect(),
        bin_width: 1.0,
        color: MISSING_COLOR.to_string(),
    });
    surface.set_axes(Axes {
        x_label: Some("Number of missings in case".to_string()),
        y_label: Some("Number of cases".to_string()),
        grid: GridAxis::X,
        ..Axes::default()
    });

    debug!("Case plot drawn for {} cases", cases.len());
    Ok(())
}
