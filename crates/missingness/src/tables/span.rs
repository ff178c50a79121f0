//! Windowed missingness over fixed-size blocks of rows.

use crate::config::EmptyInputPolicy;
use crate::error::{MissingnessError, Result};
use crate::mask::ColumnMask;
use crate::types::SpanSummary;
use crate::utils::percentage;
use tracing::debug;

/// Split `column` into consecutive blocks of `span_every` rows and summarize
/// each block. The final block is shorter when the row count is not a
/// multiple of `span_every`.
pub fn variable_span(column: &ColumnMask, span_every: usize) -> Result<Vec<SpanSummary>> {
    if span_every == 0 {
        return Err(MissingnessError::invalid_parameter(
            "span_every",
            "span size must be a positive integer",
        ));
    }

    let rows = column
        .missing
        .chunks(span_every)
        .enumerate()
        .map(|(span_counter, block)| {
            let n_in_span = block.len();
            let n_missing = block.iter().filter(|&&m| m).count();
            // blocks are never empty
            let pct_missing = percentage(n_missing, n_in_span, EmptyInputPolicy::Zero, "rows")?;
            Ok(SpanSummary {
                span_counter,
                n_in_span,
                n_missing,
                n_complete: n_in_span - n_missing,
                pct_missing,
                pct_complete: 100.0 - pct_missing,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Span table for '{}' computed: {} spans of {} rows",
        column.name,
        rows.len(),
        span_every
    );
    Ok(rows)
}
