//! Plotting of missingness tables.
//!
//! Visualizations draw onto an explicit [`PlotSurface`] handle supplied by the
//! caller instead of a shared global figure. [`Figure`] is the bundled
//! surface: it records marks and axis settings and serializes them to JSON
//! for an external renderer.
//!
//! # Example
//!
//! ```rust,ignore
//! use missingness::{Missingness, plot::Figure};
//!
//! let mut figure = Figure::new();
//! Missingness::new(&df).vis_variable_plot(&mut figure)?;
//! figure.write_json("plots", "variable_plot")?;
//! ```

mod figure;
mod surface;
mod vis;

pub use figure::Figure;
pub use surface::{Axes, BarLayer, GridAxis, Mark, Orientation, PlotSurface, Ticks};
pub use vis::{SpanPlotOptions, case_plot, proportion, upset, variable_plot, variable_span_plot};
