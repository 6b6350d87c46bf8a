//! Presentation of simulation results
//!
//! The model never touches files or terminals; this module turns a
//! [`SimulationResult`](crate::simulation::SimulationResult) into something
//! a person or another tool can read:
//! - **Visualization**: PNG/SVG chromatograms using plotters
//! - **Export**: CSV data for external analysis
//! - **Report**: plain-text summary of metrics, KPIs and warnings
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── report.rs           ← Text report
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── chromatogram.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use elution_rs::output::{export_result_csv, plot_result, CsvConfig, Report};
//!
//! println!("{}", Report::new(&result));
//! plot_result(&result, "elution.png", None)?;
//! export_result_csv(&result, "elution.csv", &CsvConfig::default())?;
//! ```

pub mod export;
pub mod report;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{plot_elution_comparison, plot_elution_profile, plot_result, PlotConfig};

pub use export::{export_elution_csv, export_result_csv, CsvConfig, CsvMetadata};

pub use report::Report;
