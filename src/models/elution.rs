//! pH-gradient elution model
//!
//! Generates the chromatogram of a Protein A elution step: the column is
//! swept from neutral pH down to an acidic end point while the model tracks
//! how strongly the antibody is still bound and how much of it leaves the
//! column at every gradient step.
//!
//! # Physics
//!
//! Release is driven by protonation of two histidine populations, the ligand
//! histidines (pKa from the ligand variant) and the Fc histidine cluster of the
//! antibody (pKa from the target format). Both follow Henderson–Hasselbalch:
//!
//! ```text
//! f_his = protonated_fraction(pKa_his, pH)     (0 if the ligand has no His)
//! f_fc  = protonated_fraction(pKa_fc,  pH)
//!
//! repulsion   = 2 · f_his · f_fc
//! hydrophobic = 0.03 · (Tyr + Phe) · (1 − repulsion / 2)
//! binding     = max(0, 1 − repulsion + hydrophobic)
//! ```
//!
//! Once `binding < 0.5` the antibody is released and the absorbance follows a
//! Gaussian in pH centred on the optimal elution pH:
//!
//! ```text
//! I(pH) = I_max · exp(−(pH − pH_elution)² / (2σ²)) · (1 − binding)
//! ```
//!
//! The traditional strategy adds an exponential tail below the elution pH,
//! then every reading is scaled by temperature, perturbed by detector noise
//! and clamped at zero.
//!
//! # Example
//!
//! ```rust
//! use elution_rs::models::{ElutionSimulator, IntensityNoise};
//! use elution_rs::models::sequence::{analyze, LigandFormat};
//! use elution_rs::physics::MolecularConstants;
//! use elution_rs::simulation::SimulationParameters;
//!
//! let constants = MolecularConstants::default();
//! let noise = IntensityNoise::none();
//! let profile = analyze("HHHHHHHHHH", LigandFormat::Monomeric).unwrap().profile;
//! let parameters = SimulationParameters::default();
//!
//! let elution = ElutionSimulator::new(&constants, &noise).simulate(&profile, &parameters);
//!
//! assert_eq!(elution.len(), 151);   // traditional: 150 steps + 1
//! assert_eq!(elution.points()[0].ph, 7.4);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ElutionError;
use crate::models::metrics::{elution_sharpness, REFERENCE_TEMPERATURE};
use crate::models::noise::IntensityNoise;
use crate::models::sequence::ResidueProfile;
use crate::physics::{
    protonated_fraction, round_dp, LigandVariant, MolecularConstants, TargetMolecule,
};
use crate::simulation::SimulationParameters;

/// Binding strength below which the antibody leaves the column
pub const RELEASE_THRESHOLD: f64 = 0.5;

/// Bounds of the predicted elution pH
pub const ELUTION_PH_RANGE: (f64, f64) = (2.8, 5.5);

/// Ceiling of the peak absorbance \[mAU\]
pub const MAX_PEAK_INTENSITY: f64 = 150.0;

// =================================================================================================
// Elution strategy
// =================================================================================================

/// Linear pH program of an elution strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhGradient {
    /// Equilibration pH at the start of elution
    pub start_ph: f64,
    /// Final pH of the gradient
    pub end_ph: f64,
    /// Number of gradient steps (the profile has `steps + 1` points)
    pub steps: usize,
}

impl PhGradient {
    /// pH after a fraction `progress` ∈ \[0, 1\] of the gradient
    pub fn ph_at(&self, progress: f64) -> f64 {
        self.start_ph - progress * (self.start_ph - self.end_ph)
    }
}

/// Elution buffer strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ElutionStrategy {
    /// Glycine/citrate down to pH 2.5, shows tailing
    #[default]
    Traditional,
    /// Stops at pH 3.5
    Mild,
    /// Coarse step gradient to pH 3.0
    Step,
    /// Salt-enhanced release, down to pH 3.2
    SaltAssisted,
    /// Competitive displacement, stops at pH 4.0
    Competitive,
}

impl ElutionStrategy {
    pub const ALL: [ElutionStrategy; 5] = [
        ElutionStrategy::Traditional,
        ElutionStrategy::Mild,
        ElutionStrategy::Step,
        ElutionStrategy::SaltAssisted,
        ElutionStrategy::Competitive,
    ];

    /// pH program of this strategy
    pub fn gradient(&self) -> PhGradient {
        let (start_ph, end_ph, steps) = match self {
            ElutionStrategy::Traditional => (7.4, 2.5, 150),
            ElutionStrategy::Mild => (7.4, 3.5, 120),
            ElutionStrategy::Step => (7.4, 3.0, 50),
            ElutionStrategy::SaltAssisted => (7.4, 3.2, 100),
            ElutionStrategy::Competitive => (7.4, 4.0, 80),
        };
        PhGradient { start_ph, end_ph, steps }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ElutionStrategy::Traditional => "traditional",
            ElutionStrategy::Mild => "mild",
            ElutionStrategy::Step => "step",
            ElutionStrategy::SaltAssisted => "salt_assisted",
            ElutionStrategy::Competitive => "competitive",
        }
    }

    /// Whether the elution peak tails towards low pH
    pub fn has_tailing(&self) -> bool {
        matches!(self, ElutionStrategy::Traditional)
    }
}

impl fmt::Display for ElutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElutionStrategy {
    type Err = ElutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.tag() == s.trim())
            .ok_or_else(|| ElutionError::UnknownOption {
                kind: "elution strategy",
                value: s.to_string(),
            })
    }
}

// =================================================================================================
// Profile
// =================================================================================================

/// One reading of the chromatogram
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElutionPoint {
    /// Time since the start of elution \[min\], 2 decimals
    pub time: f64,
    /// Buffer pH, 2 decimals
    pub ph: f64,
    /// Absorbance \[mAU\], ≥ 0, 2 decimals
    pub intensity: f64,
    /// Fraction of antibody still bound, 3 decimals
    pub binding_strength: f64,
}

/// Chromatogram: one point per gradient step, in time order
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElutionProfile {
    points: Vec<ElutionPoint>,
}

impl ElutionProfile {
    pub fn new(points: Vec<ElutionPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ElutionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElutionPoint> {
        self.points.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn ph_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ph).collect()
    }

    pub fn intensities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.intensity).collect()
    }

    pub fn binding_strengths(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.binding_strength).collect()
    }

    /// Highest absorbance of the run, 0 for an empty profile
    pub fn max_intensity(&self) -> f64 {
        self.points.iter().map(|p| p.intensity).fold(0.0, f64::max)
    }
}

impl<'a> IntoIterator for &'a ElutionProfile {
    type Item = &'a ElutionPoint;
    type IntoIter = std::slice::Iter<'a, ElutionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// =================================================================================================
// Model functions
// =================================================================================================

/// Predicted pH of the elution peak, clamped to [`ELUTION_PH_RANGE`]
pub fn optimal_elution_ph(
    profile: &ResidueProfile,
    ligand: LigandVariant,
    target: TargetMolecule,
    constants: &MolecularConstants,
) -> f64 {
    let base = constants.ligand(ligand).binding_site - 0.5;
    let histidine_adjustment = profile.histidine as f64 * 0.1;
    let target_adjustment = (constants.target(target).fc_pka - 6.0) * 0.5;

    (base - histidine_adjustment + target_adjustment).clamp(ELUTION_PH_RANGE.0, ELUTION_PH_RANGE.1)
}

/// Peak absorbance before temperature scaling \[mAU\]
pub fn peak_intensity(profile: &ResidueProfile, target_concentration: f64) -> f64 {
    (50.0 + profile.histidine as f64 * 8.0 + target_concentration * 10.0).min(MAX_PEAK_INTENSITY)
}

/// Fraction of antibody bound at `ph`, ≥ 0
///
/// Exceeds 1 when aromatic residues add hydrophobic binding on top of the
/// electrostatic term.
pub fn binding_strength(profile: &ResidueProfile, ligand_pka: f64, fc_pka: f64, ph: f64) -> f64 {
    let histidine_protonation = if profile.histidine > 0 {
        protonated_fraction(ligand_pka, ph)
    } else {
        0.0
    };
    let fc_protonation = protonated_fraction(fc_pka, ph);

    let repulsion = histidine_protonation * fc_protonation * 2.0;
    let hydrophobic = profile.hydrophobic_aromatic() as f64 * 0.03 * (1.0 - repulsion * 0.5);

    (1.0 - repulsion + hydrophobic).max(0.0)
}

/// Unit-height Gaussian; a zero width collapses to a spike at the centre
#[inline]
fn gaussian(deviation: f64, sigma: f64) -> f64 {
    if sigma > 0.0 {
        (-(deviation * deviation) / (2.0 * sigma * sigma)).exp()
    } else if deviation == 0.0 {
        1.0
    } else {
        0.0
    }
}

// =================================================================================================
// Simulator
// =================================================================================================

/// Generates [`ElutionProfile`]s against an injected constants table and noise source
#[derive(Debug, Clone, Copy)]
pub struct ElutionSimulator<'a> {
    constants: &'a MolecularConstants,
    noise: &'a IntensityNoise,
}

impl<'a> ElutionSimulator<'a> {
    pub fn new(constants: &'a MolecularConstants, noise: &'a IntensityNoise) -> Self {
        Self { constants, noise }
    }

    /// Predicted elution pH for these inputs
    pub fn elution_ph(&self, profile: &ResidueProfile, parameters: &SimulationParameters) -> f64 {
        optimal_elution_ph(
            profile,
            parameters.ligand_variant,
            parameters.target_molecule,
            self.constants,
        )
    }

    /// Run the gradient
    ///
    /// # Arguments
    ///
    /// * `profile` - Residue counts of the effective ligand sequence
    /// * `parameters` - Process parameters (strategy, temperature, loading, ...)
    ///
    /// # Returns
    ///
    /// `steps + 1` points with strictly increasing time from 0 to the gradient
    /// time and non-increasing pH.
    pub fn simulate(
        &self,
        profile: &ResidueProfile,
        parameters: &SimulationParameters,
    ) -> ElutionProfile {
        let strategy = parameters.elution_strategy;
        let gradient = strategy.gradient();
        let ligand_pka = self.constants.ligand(parameters.ligand_variant).histidine;
        let fc_pka = self.constants.target(parameters.target_molecule).fc_pka;

        let elution_ph = self.elution_ph(profile, parameters);
        let sigma = elution_sharpness(profile, parameters.ligand_variant);
        let max_intensity = peak_intensity(profile, parameters.target_concentration);
        let temperature_factor =
            1.0 + (parameters.temperature - REFERENCE_TEMPERATURE) * 0.015;

        log::debug!(
            "{} gradient {} → {} over {} steps: elution pH {:.2}, σ {:.2}, I_max {:.1}",
            strategy,
            gradient.start_ph,
            gradient.end_ph,
            gradient.steps,
            elution_ph,
            sigma,
            max_intensity
        );

        let mut sampler = self.noise.sampler();
        let mut points = Vec::with_capacity(gradient.steps + 1);

        for step in 0..=gradient.steps {
            let progress = step as f64 / gradient.steps as f64;
            let ph = gradient.ph_at(progress);
            let time = progress * parameters.gradient_time;

            let binding = binding_strength(profile, ligand_pka, fc_pka, ph);

            let mut intensity = 0.0;
            if binding < RELEASE_THRESHOLD {
                let deviation = ph - elution_ph;
                intensity = max_intensity * gaussian(deviation, sigma) * (1.0 - binding);

                if strategy.has_tailing() && ph < elution_ph {
                    intensity += max_intensity * 0.1 * (-deviation.abs() / 0.5).exp();
                }
            }

            intensity *= temperature_factor;
            intensity += sampler.sample(step);
            let intensity = intensity.max(0.0);

            points.push(ElutionPoint {
                time: round_dp(time, 2),
                ph: round_dp(ph, 2),
                intensity: round_dp(intensity, 2),
                binding_strength: round_dp(binding, 3),
            });
        }

        ElutionProfile::new(points)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
