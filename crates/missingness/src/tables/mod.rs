//! Tabulation of missing values.
//!
//! Every table is computed from a [`crate::mask::MissingnessMask`] (or one of
//! its columns) and returned as a `Vec` of value rows from [`crate::types`].
//! Use [`crate::frame::IntoFrame`] to turn a table into a `DataFrame`.

mod combinations;
mod run;
mod span;
mod summary;

pub use combinations::missing_combinations;
pub use run::variable_run;
pub use span::variable_span;
pub use summary::{case_joint, case_summary, variable_joint, variable_summary};
