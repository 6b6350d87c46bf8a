//! elution-rs: Protein A Affinity Elution Simulator
//!
//! Predicts the elution chromatogram of an antibody captured on a Protein A
//! resin from the amino-acid sequence of the ligand and a set of process
//! parameters, together with the ligand's performance metrics, the process
//! KPIs and advisory warnings.
//!
//! # Architecture
//!
//! elution-rs is built on two principles:
//!
//! 1. **Separation of Data and Equations**
//!    - The constants table holds literature values (what the molecules are)
//!    - The model stages hold the formulas (how they behave)
//!
//! 2. **Explicit Inputs**
//!    - No global state: constants and noise are injected into the [`Simulator`](simulation::Simulator)
//!    - Every run returns an owned [`SimulationResult`](simulation::SimulationResult)
//!
//! ```text
//! sequence ─► SequenceAnalysis ─┬─► MetricsEngine ─────────┬─► warnings
//!                               └─► ElutionSimulator ─► peak ┴─► KPIs
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use elution_rs::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // 1. Configure the run
//! let parameters = SimulationParameters::default()
//!     .with_strategy(ElutionStrategy::Mild)
//!     .with_ligand_format(LigandFormat::Tetrameric);
//!
//! // 2. Simulate (seeded noise for a reproducible profile)
//! let simulator = Simulator::new().with_noise(IntensityNoise::seeded(42, 1.0));
//! let result = simulator.run("AKHHEQYNFLKDDPSQSANLLAEAKK", &parameters)?;
//!
//! // 3. Access results
//! println!("Peak at pH {} after {} min", result.peak.ph, result.peak.time);
//! println!("Yield {:.1}%, purity {:.1}%", result.kpis.recovery_yield, result.kpis.purity);
//! assert_eq!(result.elution_profile.len(), 121);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Constants table and protonation law
//! - [`models`]: Sequence analysis, metrics and the elution model
//! - [`analysis`]: Peak detection, warnings and KPIs
//! - [`simulation`]: End-to-end pipeline
//! - [`output`]: Text report, CSV export and plots
//! - [`error`]: Crate error type

// Core modules
pub mod error;
pub mod physics;

pub mod analysis;
pub mod models;
pub mod simulation;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use elution_rs::prelude::*;
    //! ```
    pub use crate::analysis::{DerivedKpis, PeakInfo, Warning};
    pub use crate::error::{ElutionError, Result};
    pub use crate::models::{
        ElutionPoint,
        ElutionProfile,
        ElutionStrategy,
        IntensityNoise,
        LigandFormat,
        MetricsResult,
    };
    pub use crate::physics::{LigandVariant, MolecularConstants, TargetMolecule};
    pub use crate::simulation::{SimulationParameters, SimulationResult, Simulator};
}
