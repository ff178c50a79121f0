//! JSON reports of a table's missingness.
//!
//! # Example
//!
//! ```rust,ignore
//! use missingness::{Missingness, ReportGenerator};
//!
//! let report = ReportGenerator::build_report(&Missingness::new(&df))?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! let generator = ReportGenerator::new(PathBuf::from("output"));
//! generator.write_report_to_file(&report, "airquality")?;
//! ```

mod generator;

pub use generator::{MissingnessReport, ReportGenerator};
