//! Molecular and process models of the Protein A elution step
//!
//! The models form a short pipeline. Every stage is a pure function of its
//! inputs except for the detector noise, which is injected.
//!
//! # Available Models
//!
//! ## [`sequence`]: ligand sequence analysis
//!
//! Normalises the raw amino-acid input, expands it to the chosen multimeric
//! format and counts the residues that matter for binding and stability.
//!
//! ## [`metrics`]: derived ligand metrics
//!
//! Alkaline stability, dynamic binding capacity, aggregation risk, ligand
//! leakage, binding affinity and elution sharpness computed from the residue
//! counts and the constants table.
//!
//! ## [`elution`]: pH-gradient chromatogram
//!
//! Sweeps the strategy's pH program and produces the absorbance trace together
//! with the residual binding strength at each step.
//!
//! # Noise
//!
//! [`IntensityNoise`] decides what the detector adds to each reading. Use
//! [`IntensityNoise::none`] or [`IntensityNoise::seeded`] for reproducible
//! profiles.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod elution;
pub mod metrics;
pub mod noise;
pub mod sequence;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use elution::{ElutionPoint, ElutionProfile, ElutionSimulator, ElutionStrategy, PhGradient};
pub use metrics::{MetricsEngine, MetricsResult};
pub use noise::IntensityNoise;
pub use sequence::{LigandFormat, ResidueProfile, SequenceAnalysis};
