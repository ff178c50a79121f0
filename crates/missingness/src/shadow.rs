//! Column reordering by missingness and the shadow matrix.
//!
//! The shadow matrix is a parallel table of labels recording, per original
//! column, whether each cell was missing. Shadow columns are named
//! `<original><suffix>` and hold the missing label or the present label.

use crate::error::Result;
use crate::mask::{ColumnMask, MissingnessMask};
use polars::prelude::*;
use tracing::debug;

/// Labels and naming used when building a shadow matrix.
#[derive(Debug, Clone, Copy)]
pub struct ShadowLabels<'a> {
    pub true_string: &'a str,
    pub false_string: &'a str,
    pub suffix: &'a str,
}

/// Return `df` with its columns reordered by number of missing values.
///
/// Descending unless `ascending`; equal counts keep their original order.
pub fn sort_variables_by_missingness(
    df: &DataFrame,
    mask: &MissingnessMask,
    ascending: bool,
) -> Result<DataFrame> {
    let mut order: Vec<(&str, usize)> = mask
        .columns()
        .iter()
        .map(|c| (c.name.as_str(), c.n_missing()))
        .collect();

    // sort_by is stable, ties stay in column order
    if ascending {
        order.sort_by(|a, b| a.1.cmp(&b.1));
    } else {
        order.sort_by(|a, b| b.1.cmp(&a.1));
    }

    let names: Vec<&str> = order.iter().map(|(name, _)| *name).collect();
    debug!("Columns reordered by missingness: {:?}", names);
    Ok(df.select(names)?)
}

fn shadow_column(column: &ColumnMask, labels: &ShadowLabels<'_>) -> Column {
    let values: Vec<&str> = column
        .missing
        .iter()
        .map(|&m| {
            if m {
                labels.true_string
            } else {
                labels.false_string
            }
        })
        .collect();

    Column::new(format!("{}{}", column.name, labels.suffix).into(), values)
}

/// Build the shadow matrix of a mask.
///
/// With `only_missing` only columns containing at least one missing value
/// are shadowed; when none qualify the result has no columns but keeps the
/// height of the mask.
pub fn create_shadow_matrix(
    mask: &MissingnessMask,
    labels: &ShadowLabels<'_>,
    only_missing: bool,
) -> Result<DataFrame> {
    let columns: Vec<Column> = mask
        .columns()
        .iter()
        .filter(|c| !only_missing || c.has_missing())
        .map(|c| shadow_column(c, labels))
        .collect();

    debug!(
        "Shadow matrix built: {} of {} columns",
        columns.len(),
        mask.width()
    );
    if columns.is_empty() {
        return Ok(DataFrame::empty_with_height(mask.height()));
    }
    Ok(DataFrame::new(columns)?)
}

/// Append the shadow matrix of `df` to its right.
pub fn bind_shadow_matrix(
    df: &DataFrame,
    mask: &MissingnessMask,
    labels: &ShadowLabels<'_>,
    only_missing: bool,
) -> Result<DataFrame> {
    let shadow = create_shadow_matrix(mask, labels, only_missing)?;
    Ok(df.hstack(shadow.get_columns())?)
}
