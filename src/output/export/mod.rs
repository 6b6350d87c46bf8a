//! Data export of simulation results
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use elution_rs::output::export::{export_result_csv, CsvConfig};
//!
//! // Profile plus a metadata header describing the run
//! export_result_csv(&result, "elution.csv", &CsvConfig::default())?;
//!
//! // Semicolon-separated with decimal comma
//! export_result_csv(&result, "elution_eu.csv", &CsvConfig::european())?;
//! ```

pub mod csv;

pub use csv::{export_elution_csv, export_result_csv, write_elution_csv, CsvConfig, CsvMetadata};
