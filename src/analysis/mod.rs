//! Post-processing of a simulated run
//!
//! - [`peak`]: global maximum and FWHM of the chromatogram
//! - [`warnings`]: advisory threshold rules
//! - [`kpi`]: recovery yield, purity and productivity

pub mod kpi;
pub mod peak;
pub mod warnings;

pub use kpi::{derive_kpis, DerivedKpis};
pub use peak::{find_peak, PeakInfo};
pub use warnings::{evaluate, Warning, WarningKind};
