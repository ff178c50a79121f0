//! Boolean missingness masks.
//!
//! A mask mirrors the shape of a [`DataFrame`]: one `Vec<bool>` per column,
//! `true` where the cell is absent. Masks are rebuilt from the frame on every
//! call and never mutated afterwards.

use polars::prelude::*;

/// Missingness of a single column, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMask {
    pub name: String,
    pub missing: Vec<bool>,
}

impl ColumnMask {
    /// Build the mask of one column.
    pub fn from_column(column: &Column, nan_as_missing: bool) -> PolarsResult<Self> {
        Ok(Self {
            name: column.name().to_string(),
            missing: column_missing(column, nan_as_missing)?,
        })
    }

    /// Number of missing cells in the column.
    pub fn n_missing(&self) -> usize {
        self.missing.iter().filter(|&&m| m).count()
    }

    pub fn has_missing(&self) -> bool {
        self.missing.iter().any(|&m| m)
    }
}

/// Missingness of a whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingnessMask {
    height: usize,
    columns: Vec<ColumnMask>,
}

impl MissingnessMask {
    /// Build the mask of every column of `df`, in column order.
    pub fn from_frame(df: &DataFrame, nan_as_missing: bool) -> PolarsResult<Self> {
        let columns = df
            .get_columns()
            .iter()
            .map(|column| ColumnMask::from_column(column, nan_as_missing))
            .collect::<PolarsResult<Vec<_>>>()?;

        Ok(Self {
            height: df.height(),
            columns,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Total number of cells (`height * width`).
    pub fn size(&self) -> usize {
        self.height.saturating_mul(self.columns.len())
    }

    pub fn columns(&self) -> &[ColumnMask] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnMask> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Total number of missing cells.
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(ColumnMask::n_missing).sum()
    }

    /// Number of missing cells in each row.
    pub fn row_missing_counts(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.height];
        for column in &self.columns {
            for (count, &missing) in counts.iter_mut().zip(&column.missing) {
                if missing {
                    *count += 1;
                }
            }
        }
        counts
    }
}

/// Compute the per-row missingness of a column.
///
/// Nulls are always missing. For float columns NaN also counts as missing
/// when `nan_as_missing` is set.
pub fn column_missing(column: &Column, nan_as_missing: bool) -> PolarsResult<Vec<bool>> {
    let series = column.as_materialized_series();

    if nan_as_missing && series.dtype().is_float() {
        let floats = series.cast(&DataType::Float64)?;
        return Ok(floats
            .f64()?
            .into_iter()
            .map(|value| value.is_none_or(f64::is_nan))
            .collect());
    }

    Ok(series
        .is_null()
        .into_iter()
        .map(|value| value.unwrap_or(false))
        .collect())
}
