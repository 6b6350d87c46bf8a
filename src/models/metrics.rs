//! Performance metrics of the ligand
//!
//! Derives the six headline numbers of a Protein A resin from the residue
//! composition of its ligand and the operating conditions:
//!
//! | Metric                   | Unit  | Range         |
//! |--------------------------|-------|---------------|
//! | Alkaline stability       | %     | \[20, 98\]    |
//! | Dynamic binding capacity | mg/mL | ≤ 180         |
//! | Aggregation risk         | %     | \[2, 45\]     |
//! | Ligand leakage           | μg/mL | \[0.5, 15\]   |
//! | Binding affinity         | M⁻¹   | \[1e6, 9.9e8\]|
//! | Elution sharpness (σ)    | pH    | \[0, 0.6\]    |
//!
//! All formulas are weighted sums clamped to the ranges above. Clamping keeps
//! the model producing output for any finite input, including temperatures
//! far outside the operating window.
//!
//! # Example
//!
//! ```rust
//! use elution_rs::models::metrics::MetricsEngine;
//! use elution_rs::models::sequence::{analyze, LigandFormat};
//! use elution_rs::physics::{LigandVariant, MolecularConstants, TargetMolecule};
//!
//! let constants = MolecularConstants::default();
//! let profile = analyze("HHHHHHHHHH", LigandFormat::Monomeric).unwrap().profile;
//!
//! let metrics = MetricsEngine::new(&constants).compute(
//!     &profile,
//!     LigandVariant::WildType,
//!     TargetMolecule::HumanIgG1,
//!     25.0,
//! );
//!
//! assert_eq!(metrics.alkaline_stability, 98.0);
//! assert_eq!(metrics.elution_sharpness, 0.3);
//! ```

use crate::models::sequence::ResidueProfile;
use crate::physics::{round_dp, LigandVariant, MolecularConstants, TargetMolecule};

/// Reference temperature of all temperature corrections \[°C\]
pub const REFERENCE_TEMPERATURE: f64 = 25.0;

/// Upper bound of the dynamic binding capacity \[mg/mL\]
pub const MAX_BINDING_CAPACITY: f64 = 180.0;

// =================================================================================================
// Result
// =================================================================================================

/// Ligand performance metrics
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsResult {
    /// Stability under alkaline cleaning \[%\], 1 decimal
    pub alkaline_stability: f64,
    /// Dynamic binding capacity \[mg/mL\], 1 decimal
    pub dynamic_binding_capacity: f64,
    /// Product aggregation risk \[%\], 1 decimal
    pub aggregation_risk: f64,
    /// Ligand leakage into the eluate \[μg/mL\], 2 decimals
    pub ligand_leakage: f64,
    /// Effective association constant \[M⁻¹\]
    pub binding_affinity: f64,
    /// Standard deviation of the elution peak \[pH units\], 2 decimals
    pub elution_sharpness: f64,
}

/// Contributions to the base stability, before the temperature correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityFactors {
    /// Protonation stability from histidines
    pub histidine: f64,
    /// Hydrophobic packing from Tyr + Phe
    pub aromatic: f64,
    /// Disulfide bridges, saturating at 4 bonds
    pub disulfide: f64,
    /// Deamidation penalty from Asn + Gln
    pub amide: f64,
    /// Net charge (Lys + Arg − Asp − Glu)
    pub charge: f64,
}

impl StabilityFactors {
    pub fn from_profile(profile: &ResidueProfile) -> Self {
        Self {
            histidine: profile.histidine as f64 * 3.5,
            aromatic: profile.hydrophobic_aromatic() as f64 * 2.1,
            disulfide: (profile.cysteine as f64 / 2.0).min(4.0) * 8.0,
            amide: profile.amide() as f64 * -1.2,
            charge: profile.net_charge() as f64 * 0.8,
        }
    }

    pub fn sum(&self) -> f64 {
        self.histidine + self.aromatic + self.disulfide + self.amide + self.charge
    }
}

// =================================================================================================
// Engine
// =================================================================================================

/// Computes [`MetricsResult`] against an injected constants table
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a> {
    constants: &'a MolecularConstants,
}

impl<'a> MetricsEngine<'a> {
    pub fn new(constants: &'a MolecularConstants) -> Self {
        Self { constants }
    }

    /// Compute all metrics
    ///
    /// # Arguments
    ///
    /// * `profile` - Residue counts of the effective ligand sequence
    /// * `ligand` - Ligand variant packed in the column
    /// * `target` - Antibody format being captured
    /// * `temperature` - Operating temperature \[°C\]
    pub fn compute(
        &self,
        profile: &ResidueProfile,
        ligand: LigandVariant,
        target: TargetMolecule,
        temperature: f64,
    ) -> MetricsResult {
        let target_props = self.constants.target(target);

        let alkaline_stability = alkaline_stability(profile, temperature);
        let dynamic_binding_capacity = dynamic_binding_capacity(profile, ligand);

        let aggregation_risk = (target_props.aggregation_tendency * 30.0
            + (temperature - REFERENCE_TEMPERATURE).max(0.0) * 1.2
            + (70.0 - alkaline_stability).max(0.0) * 0.3)
            .clamp(2.0, 45.0);

        let ligand_leakage = (8.0 - alkaline_stability / 12.0
            + profile.asparagine as f64 * 0.4
            + (temperature - 30.0).max(0.0) * 0.3)
            .clamp(0.5, 15.0);

        let metrics = MetricsResult {
            alkaline_stability: round_dp(alkaline_stability, 1),
            dynamic_binding_capacity: round_dp(dynamic_binding_capacity, 1),
            aggregation_risk: round_dp(aggregation_risk, 1),
            ligand_leakage: round_dp(ligand_leakage, 2),
            binding_affinity: self.binding_affinity(profile, target, temperature),
            elution_sharpness: elution_sharpness(profile, ligand),
        };

        log::debug!("metrics for {} / {} at {} °C: {:?}", ligand, target, temperature, metrics);
        metrics
    }

    /// Effective association constant \[M⁻¹\], clamped to \[1e6, 9.9e8\]
    pub fn binding_affinity(
        &self,
        profile: &ResidueProfile,
        target: TargetMolecule,
        temperature: f64,
    ) -> f64 {
        let binding = &self.constants.binding;
        let histidine_contribution = profile.histidine as f64 * 1.5;
        let aromatic_contribution = profile.hydrophobic_aromatic() as f64 * 1.2;
        let temperature_factor =
            (-binding.temperature_factor * (temperature - REFERENCE_TEMPERATURE)).exp();

        let affinity = binding.base_affinity
            * (1.0 + histidine_contribution / 100.0)
            * (1.0 + aromatic_contribution / 100.0)
            * temperature_factor
            * self.constants.target(target).stability;

        affinity.clamp(1e6, 9.9e8)
    }
}

/// Alkaline stability \[%\], unrounded, clamped to \[20, 98\]
fn alkaline_stability(profile: &ResidueProfile, temperature: f64) -> f64 {
    let base = 65.0 + StabilityFactors::from_profile(profile).sum();
    (base + (temperature - REFERENCE_TEMPERATURE) * -0.8).clamp(20.0, 98.0)
}

/// Dynamic binding capacity \[mg/mL\], unrounded
///
/// Only the upper bound is enforced; every term is non-negative so the sum
/// never drops below the 75 mg/mL base.
fn dynamic_binding_capacity(profile: &ResidueProfile, ligand: LigandVariant) -> f64 {
    let total = 75.0
        + profile.histidine as f64 * 4.5
        + profile.hydrophobic_aromatic() as f64 * 3.2
        + profile.domain_count as f64 * 15.0
        + ligand.capacity_bonus();

    total.min(MAX_BINDING_CAPACITY)
}

/// Standard deviation σ of the elution peak \[pH units\], 2 decimals
///
/// Also used by the elution simulator as the Gaussian width of the peak.
pub fn elution_sharpness(profile: &ResidueProfile, ligand: LigandVariant) -> f64 {
    let base_sigma = 0.3;
    let histidine_factor = (profile.histidine as f64 * 0.1).min(2.0);
    let ligand_factor = if ligand == LigandVariant::EngineeredMild { 0.8 } else { 1.0 };

    round_dp(base_sigma * histidine_factor * ligand_factor, 2)
}

// =================================================================================================
// Tests
// =================================================================================================
