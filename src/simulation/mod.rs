//! End-to-end simulation pipeline
//!
//! [`Simulator`] wires the models and the post-processing together:
//!
//! ```text
//!  sequence ──► analyze ──► ResidueProfile ──┬──► MetricsEngine ──────────┐
//!                                            │                            │
//!                                            └──► ElutionSimulator        │
//!                                                       │                 │
//!                                                       ▼                 │
//!                                                   find_peak             │
//!                                                       │                 │
//!                                                       ▼                 ▼
//!                                              warnings::evaluate    derive_kpis
//!                                                       │                 │
//!                                                       └──► SimulationResult
//! ```
//!
//! The simulator owns its constants table and noise source; both are read
//! only during a run, so one simulator can serve any number of runs.
//!
//! # Example
//!
//! ```rust
//! use elution_rs::simulation::{Simulator, SimulationParameters};
//! use elution_rs::models::IntensityNoise;
//!
//! let simulator = Simulator::new().with_noise(IntensityNoise::none());
//! let result = simulator
//!     .run("HHHHHHHHHH", &SimulationParameters::default())
//!     .unwrap();
//!
//! assert_eq!(result.residue_profile().histidine, 10);
//! assert!((2.8..=5.5).contains(&result.elution_ph));
//! assert!(result.peak.is_detected());
//! ```

pub mod parameters;

pub use parameters::SimulationParameters;

use crate::analysis::{derive_kpis, evaluate, find_peak, DerivedKpis, PeakInfo, Warning};
use crate::error::Result;
use crate::models::sequence::{analyze, ResidueProfile, SequenceAnalysis};
use crate::models::{ElutionProfile, ElutionSimulator, IntensityNoise, MetricsEngine, MetricsResult};
use crate::physics::MolecularConstants;

// =================================================================================================
// Result
// =================================================================================================

/// Everything computed for one run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Parameters the run was computed with
    pub parameters: SimulationParameters,
    pub analysis: SequenceAnalysis,
    pub metrics: MetricsResult,
    /// Predicted elution pH used as the Gaussian centre
    pub elution_ph: f64,
    pub elution_profile: ElutionProfile,
    pub peak: PeakInfo,
    pub warnings: Vec<Warning>,
    pub kpis: DerivedKpis,
}

impl SimulationResult {
    pub fn residue_profile(&self) -> &ResidueProfile {
        &self.analysis.profile
    }

    pub fn recovery_yield(&self) -> f64 {
        self.kpis.recovery_yield
    }

    pub fn purity(&self) -> f64 {
        self.kpis.purity
    }

    pub fn productivity(&self) -> f64 {
        self.kpis.productivity
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// =================================================================================================
// Simulator
// =================================================================================================

/// Runs the full prediction pipeline
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    constants: MolecularConstants,
    noise: IntensityNoise,
}

impl Simulator {
    /// Literature constants and uniform ±1 mAU detector noise
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_constants(mut self, constants: MolecularConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_noise(mut self, noise: IntensityNoise) -> Self {
        self.noise = noise;
        self
    }

    pub fn constants(&self) -> &MolecularConstants {
        &self.constants
    }

    pub fn noise(&self) -> &IntensityNoise {
        &self.noise
    }

    /// Simulate one elution run
    ///
    /// # Errors
    ///
    /// - [`InvalidSequence`](crate::error::ElutionError::InvalidSequence) if
    ///   fewer than 10 residues remain after normalization
    /// - [`InvalidParameter`](crate::error::ElutionError::InvalidParameter) if
    ///   a numeric parameter is non-finite or out of range
    pub fn run(&self, sequence: &str, parameters: &SimulationParameters) -> Result<SimulationResult> {
        parameters.validate()?;
        let analysis = analyze(sequence, parameters.ligand_format)?;
        let profile = &analysis.profile;

        let metrics = MetricsEngine::new(&self.constants).compute(
            profile,
            parameters.ligand_variant,
            parameters.target_molecule,
            parameters.temperature,
        );

        let elution = ElutionSimulator::new(&self.constants, &self.noise);
        let elution_ph = elution.elution_ph(profile, parameters);
        let elution_profile = elution.simulate(profile, parameters);

        let peak = find_peak(&elution_profile);
        let warnings = evaluate(&metrics, &peak, parameters);
        let kpis = derive_kpis(&metrics, parameters);

        for warning in &warnings {
            log::warn!("{}", warning);
        }
        log::info!(
            "{} / {} / {}: peak pH {:.2} at {:.2} min, yield {:.1}%, purity {:.1}%, {} warning(s)",
            parameters.ligand_variant,
            parameters.target_molecule,
            parameters.elution_strategy,
            peak.ph,
            peak.time,
            kpis.recovery_yield,
            kpis.purity,
            warnings.len()
        );

        Ok(SimulationResult {
            parameters: *parameters,
            analysis,
            metrics,
            elution_ph,
            elution_profile,
            peak,
            warnings,
            kpis,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ElutionError;
    use crate::models::ElutionStrategy;

    fn quiet() -> Simulator {
        Simulator::new().with_noise(IntensityNoise::none())
    }

    #[test]
    fn test_short_sequence_fails() {
        let err = quiet().run("HHH", &SimulationParameters::default()).unwrap_err();
        assert!(matches!(err, ElutionError::InvalidSequence { length: 3 }));
    }

    #[test]
    fn test_invalid_parameters_fail_before_analysis() {
        let parameters = SimulationParameters::default().with_gradient_time(-5.0);
        let err = quiet().run("HH", &parameters).unwrap_err();
        assert!(matches!(err, ElutionError::InvalidParameter { .. }));
    }

    #[test]
    fn test_result_is_consistent() {
        let parameters = SimulationParameters::default().with_strategy(ElutionStrategy::Step);
        let result = quiet().run("HHHYFAKDNQ", &parameters).unwrap();

        assert_eq!(result.parameters, parameters);
        assert_eq!(result.elution_profile.len(), 51);
        assert_eq!(result.peak.intensity, result.elution_profile.max_intensity());
        assert_eq!(result.recovery_yield(), result.kpis.recovery_yield);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let a = quiet().run("HHHHH HHHHH", &SimulationParameters::default()).unwrap();
        let b = quiet().run("hhhhh\nhhhhh", &SimulationParameters::default()).unwrap();
        assert_eq!(a.metrics, b.metrics);
        assert_eq!(a.elution_profile, b.elution_profile);
    }

    #[test]
    fn test_custom_constants_are_used() {
        use crate::physics::{LigandPka, LigandVariant};

        let constants = MolecularConstants::default()
            .with_ligand(LigandVariant::WildType, LigandPka::new(6.0, 5.0));
        let simulator = quiet().with_constants(constants);
        let result = simulator.run("HAAAAAAAAA", &SimulationParameters::default()).unwrap();

        // 5.0 − 0.5 − 0.1 + 0.05
        assert!((result.elution_ph - 4.45).abs() < 1e-12);
    }
}
