//! Visualization of elution runs using the `plotters` library
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **chromatogram**: Elution chromatograms and run comparisons
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use elution_rs::output::visualization::{plot_result, PlotConfig};
//!
//! let result = simulator.run(sequence, &parameters)?;
//!
//! // Title names the peak pH and retention time
//! plot_result(&result, "elution.png", None)?;
//!
//! // Or with custom config
//! let config = PlotConfig::chromatogram("Mild elution, 4 °C");
//! plot_result(&result, "mild.svg", Some(&config))?;
//! ```
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Chromatogram of a run | `plot_result` |
//! | Chromatogram of a bare profile | `plot_elution_profile` |
//! | Compare several runs | `plot_elution_comparison` |

pub mod chromatogram;
pub mod config;

pub use config::{PlotConfig, NO_TITLE};

pub use chromatogram::{
    chromatogram_title, plot_elution_comparison, plot_elution_profile, plot_result,
    ChromatogramSeries,
};
