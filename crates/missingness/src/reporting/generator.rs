use crate::accessor::Missingness;
use crate::error::Result;
use crate::types::{CaseJoint, VariableJoint, VariableSummary};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Missingness overview of one table, ready for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingnessReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    pub n_rows: usize,
    pub n_columns: usize,
    pub number_missing: usize,
    pub number_complete: usize,
    /// Share of missing cells, in percent
    pub pct_missing: f64,
    /// Columns with at least one missing value, most missing first
    pub columns_with_missing: Vec<String>,
    pub variable_summary: Vec<VariableSummary>,
    pub variable_joint: Vec<VariableJoint>,
    pub case_joint: Vec<CaseJoint>,
}

/// Builds [`MissingnessReport`]s and writes them to an output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Compute every table the report needs from `ms`.
    pub fn build_report(ms: &Missingness<'_>) -> Result<MissingnessReport> {
        let df = ms.frame();
        let variable_summary = ms.table_variable_summary()?;

        let mut with_missing: Vec<&VariableSummary> =
            variable_summary.iter().filter(|r| r.n_missing > 0).collect();
        with_missing.sort_by(|a, b| b.n_missing.cmp(&a.n_missing));
        let columns_with_missing = with_missing.iter().map(|r| r.variable.clone()).collect();

        Ok(MissingnessReport {
            generated_at: Local::now().to_rfc3339(),
            n_rows: df.height(),
            n_columns: df.width(),
            number_missing: ms.number_missing()?,
            number_complete: ms.number_complete()?,
            pct_missing: ms.pct_missing()?,
            columns_with_missing,
            variable_joint: ms.table_variable_joint()?,
            case_joint: ms.table_case_joint()?,
            variable_summary,
        })
    }

    /// Write `report` as `<output_dir>/<base_name>_missingness.json`.
    pub fn write_report_to_file(
        &self,
        report: &MissingnessReport,
        base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_missingness.json", base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
