//! Missing-Value Analysis for Polars
//!
//! Helpers for exploring where values are missing in a [`polars`] `DataFrame`.
//!
//! # Overview
//!
//! - **Counts**: total missing and complete cells
//! - **Summaries**: per-variable and per-case tables, plus their joint tables
//! - **Spans and runs**: windowed missingness and run-length encoding of a column
//! - **Visualizations**: plots drawn onto an explicit [`plot::PlotSurface`]
//! - **Shadow matrix**: a parallel table of missing/present labels
//! - **Reports**: a JSON overview of all of the above
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use missingness::{Missingness, IntoFrame, plot::Figure};
//! use polars::prelude::*;
//!
//! let df = df![
//!     "A" => [Some(1), None, Some(3), None],
//!     "B" => [1, 2, 3, 4],
//! ]?;
//!
//! let ms = Missingness::new(&df);
//! assert_eq!(ms.number_missing()?, 2);
//!
//! // Tables are plain rows; turn them into a DataFrame for display
//! println!("{}", ms.table_variable_summary()?.to_frame()?);
//!
//! // Shadow matrix next to the data
//! let bound = ms.bind_shadow_matrix("missing", "present", false)?;
//!
//! // Plots are recorded on a figure you own
//! let mut figure = Figure::new();
//! ms.vis_variable_plot(&mut figure)?;
//! figure.write_json("plots", "variables")?;
//! ```
//!
//! # Configuration
//!
//! ```rust,ignore
//! use missingness::config::{EmptyInputPolicy, MissingnessConfig};
//!
//! let config = MissingnessConfig::builder()
//!     .true_string("NA")
//!     .false_string("!NA")
//!     .only_missing(true)
//!     .empty_input(EmptyInputPolicy::Error)   // fail instead of reporting 0%
//!     .build()?;
//!
//! let ms = Missingness::with_config(&df, config)?;
//! let shadow = ms.shadow_matrix()?;
//! ```

pub mod accessor;
pub mod config;
pub mod error;
pub mod frame;
pub mod mask;
pub mod plot;
pub mod reporting;
pub mod shadow;
pub mod tables;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use accessor::Missingness;
pub use config::{
    ConfigValidationError, EmptyInputPolicy, MissingnessConfig, MissingnessConfigBuilder,
};
pub use error::{MissingnessError, Result as MissingnessResult, ResultExt};
pub use frame::{IntoFrame, combinations_to_frame};
pub use mask::{ColumnMask, MissingnessMask};
pub use reporting::{MissingnessReport, ReportGenerator};
pub use shadow::ShadowLabels;
pub use types::{
    CaseJoint, CaseSummary, MissingCombination, RunState, RunSummary, SpanSummary, VariableJoint,
    VariableSummary,
};
