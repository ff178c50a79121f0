use crate::types::MissingCombination;
use serde::{Deserialize, Serialize};

/// Bar direction for [`Mark::StackedBars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Which axis draws grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GridAxis {
    #[default]
    None,
    X,
    Y,
    Both,
}

/// One stacked layer of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayer {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// Tick positions with their labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticks {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
    /// Label rotation in degrees.
    pub rotation: i32,
}

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mark {
    /// Horizontal segments from `xmin` to each `xmax` at height `y`.
    HLines {
        y: Vec<f64>,
        xmin: f64,
        xmax: Vec<f64>,
        color: String,
    },
    /// Scatter dots.
    Points {
        x: Vec<f64>,
        y: Vec<f64>,
        color: String,
    },
    /// Bars per category, each layer stacked on the previous ones.
    StackedBars {
        categories: Vec<String>,
        layers: Vec<BarLayer>,
        orientation: Orientation,
        width: f64,
    },
    /// Histogram of raw values with fixed-width bins.
    Histogram {
        values: Vec<f64>,
        bin_width: f64,
        color: String,
    },
    /// Set-combination ("upset") diagram: one bar per pattern of variables.
    Upset {
        variables: Vec<String>,
        combinations: Vec<MissingCombination>,
    },
}

/// Labels and decorations of a plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Axes {
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub title: Option<String>,
    pub legend: Vec<String>,
    pub x_ticks: Option<Ticks>,
    pub y_ticks: Option<Ticks>,
    pub grid: GridAxis,
    /// Figure size in inches, renderer default when `None`.
    pub size: Option<(f64, f64)>,
    /// Data margins around the marks, renderer default when `None`.
    pub margins: Option<f64>,
}

/// A drawing surface that visualizations render onto.
///
/// Implement this for a concrete renderer; [`super::Figure`] records the
/// calls so they can be serialized and replayed elsewhere.
pub trait PlotSurface {
    /// Add a mark on top of the ones drawn so far.
    fn draw(&mut self, mark: Mark);

    /// Replace the axis labels, ticks and decorations.
    fn set_axes(&mut self, axes: Axes);
}
