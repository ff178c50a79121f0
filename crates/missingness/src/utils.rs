//! Shared helpers for percentage arithmetic and column lookup.

use crate::config::EmptyInputPolicy;
use crate::error::{MissingnessError, Result};
use polars::prelude::*;
use tracing::warn;

/// `part / whole * 100`, applying `policy` when `whole` is zero.
///
/// `what` names the denominator in log lines and errors (e.g. "rows").
pub fn percentage(part: usize, whole: usize, policy: EmptyInputPolicy, what: &str) -> Result<f64> {
    if whole > 0 {
        return Ok(part as f64 / whole as f64 * 100.0);
    }

    match policy {
        EmptyInputPolicy::Zero => {
            warn!("Percentage over zero {}; reporting 0.0", what);
            Ok(0.0)
        }
        EmptyInputPolicy::Error => Err(MissingnessError::EmptyInput(format!(
            "cannot compute a percentage over zero {}",
            what
        ))),
    }
}

/// Fetch a column by name, mapping absence to [`MissingnessError::ColumnNotFound`].
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| MissingnessError::ColumnNotFound(name.to_string()))
}

/// Sort `(key, count)` groups by share descending, ties by ascending key.
///
/// All groups share one denominator, so ordering by count is ordering by
/// percentage without comparing floats.
pub(crate) fn sort_groups_by_share(groups: &mut [(usize, usize)]) {
    groups.sort_by(|(key_a, count_a), (key_b, count_b)| {
        count_b.cmp(count_a).then_with(|| key_a.cmp(key_b))
    });
}
