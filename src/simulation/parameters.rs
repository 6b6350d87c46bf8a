//! Process parameters of a simulation run

use crate::error::{ElutionError, Result};
use crate::models::{ElutionStrategy, LigandFormat};
use crate::physics::{LigandVariant, TargetMolecule};

/// Shortest gradient step \[min\]: profile times carry 2 decimals
pub const MIN_STEP_MINUTES: f64 = 0.01;

/// Operating conditions of one elution run
///
/// The default is a wild-type monomeric ligand capturing human IgG1 at
/// 5 mg/mL on a 5 mL column, eluted with the traditional 60 min gradient at
/// 25 °C.
///
/// # Example
///
/// ```rust
/// use elution_rs::simulation::SimulationParameters;
/// use elution_rs::models::ElutionStrategy;
///
/// let parameters = SimulationParameters::default()
///     .with_strategy(ElutionStrategy::Mild)
///     .with_temperature(4.0)
///     .with_gradient_time(30.0);
///
/// assert!(parameters.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationParameters {
    pub ligand_variant: LigandVariant,
    pub ligand_format: LigandFormat,
    pub target_molecule: TargetMolecule,
    /// Antibody concentration in the load \[mg/mL\]
    pub target_concentration: f64,
    /// Packed column volume \[mL\]
    pub column_volume: f64,
    /// \[mL/min\]
    pub flow_rate: f64,
    /// Resin loading \[mg/mL\]
    pub loading_capacity: f64,
    /// Operating temperature \[°C\]
    pub temperature: f64,
    pub elution_strategy: ElutionStrategy,
    /// Duration of the pH gradient \[min\]
    pub gradient_time: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            ligand_variant: LigandVariant::WildType,
            ligand_format: LigandFormat::Monomeric,
            target_molecule: TargetMolecule::HumanIgG1,
            target_concentration: 5.0,
            column_volume: 5.0,
            flow_rate: 1.0,
            loading_capacity: 40.0,
            temperature: 25.0,
            elution_strategy: ElutionStrategy::Traditional,
            gradient_time: 60.0,
        }
    }
}

impl SimulationParameters {
    pub fn with_ligand_variant(mut self, variant: LigandVariant) -> Self {
        self.ligand_variant = variant;
        self
    }

    pub fn with_ligand_format(mut self, format: LigandFormat) -> Self {
        self.ligand_format = format;
        self
    }

    pub fn with_target(mut self, target: TargetMolecule) -> Self {
        self.target_molecule = target;
        self
    }

    pub fn with_target_concentration(mut self, concentration: f64) -> Self {
        self.target_concentration = concentration;
        self
    }

    pub fn with_column_volume(mut self, volume: f64) -> Self {
        self.column_volume = volume;
        self
    }

    pub fn with_flow_rate(mut self, flow_rate: f64) -> Self {
        self.flow_rate = flow_rate;
        self
    }

    pub fn with_loading_capacity(mut self, loading: f64) -> Self {
        self.loading_capacity = loading;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_strategy(mut self, strategy: ElutionStrategy) -> Self {
        self.elution_strategy = strategy;
        self
    }

    pub fn with_gradient_time(mut self, minutes: f64) -> Self {
        self.gradient_time = minutes;
        self
    }

    /// Check the numeric fields
    ///
    /// Every value must be finite. Temperature may be any finite number;
    /// the other quantities must be strictly positive. The gradient must also
    /// leave at least [`MIN_STEP_MINUTES`] per step of the chosen strategy,
    /// otherwise neighbouring profile times round to the same value.
    pub fn validate(&self) -> Result<()> {
        if !self.temperature.is_finite() {
            return Err(invalid("temperature", self.temperature, "must be finite"));
        }

        let positive = [
            ("target_concentration", self.target_concentration),
            ("column_volume", self.column_volume),
            ("flow_rate", self.flow_rate),
            ("loading_capacity", self.loading_capacity),
            ("gradient_time", self.gradient_time),
        ];
        for (name, value) in positive {
            if !value.is_finite() {
                return Err(invalid(name, value, "must be finite"));
            }
            if value <= 0.0 {
                return Err(invalid(name, value, "must be positive"));
            }
        }

        let steps = self.elution_strategy.gradient().steps as f64;
        if self.gradient_time < steps * MIN_STEP_MINUTES {
            return Err(invalid(
                "gradient_time",
                self.gradient_time,
                "must allow at least 0.01 min per gradient step",
            ));
        }

        Ok(())
    }
}

fn invalid(name: &'static str, value: f64, reason: &'static str) -> ElutionError {
    ElutionError::InvalidParameter {
        name,
        value,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_too_short_for_steps() {
        // Traditional runs 150 steps: 1.5 min is the shortest accepted gradient
        let short = SimulationParameters::default().with_gradient_time(1.0);
        match short.validate() {
            Err(ElutionError::InvalidParameter { name, value, .. }) => {
                assert_eq!(name, "gradient_time");
                assert_eq!(value, 1.0);
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }

        assert!(short.with_gradient_time(1.5).validate().is_ok());

        // Step elution has 50 steps, so the same minute is enough
        assert!(short.with_strategy(ElutionStrategy::Step).validate().is_ok());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let parameters = SimulationParameters::default()
            .with_ligand_variant(LigandVariant::EngineeredHarsh)
            .with_ligand_format(LigandFormat::Tetrameric)
            .with_target(TargetMolecule::Bispecific)
            .with_target_concentration(2.5)
            .with_column_volume(1.0)
            .with_flow_rate(0.5)
            .with_loading_capacity(30.0)
            .with_temperature(4.0)
            .with_strategy(ElutionStrategy::Competitive)
            .with_gradient_time(20.0);

        assert_eq!(parameters.ligand_variant, LigandVariant::EngineeredHarsh);
        assert_eq!(parameters.ligand_format, LigandFormat::Tetrameric);
        assert_eq!(parameters.target_molecule, TargetMolecule::Bispecific);
        assert_eq!(parameters.target_concentration, 2.5);
        assert_eq!(parameters.column_volume, 1.0);
        assert_eq!(parameters.flow_rate, 0.5);
        assert_eq!(parameters.loading_capacity, 30.0);
        assert_eq!(parameters.temperature, 4.0);
        assert_eq!(parameters.elution_strategy, ElutionStrategy::Competitive);
        assert_eq!(parameters.gradient_time, 20.0);
    }

    #[test]
    fn test_negative_temperature_is_allowed() {
        let parameters = SimulationParameters::default().with_temperature(-10.0);
        assert!(parameters.validate().is_ok());
    }

    #[test]
    fn test_rejects_nan() {
        let err = SimulationParameters::default()
            .with_temperature(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ElutionError::InvalidParameter { name: "temperature", .. }));

        let err = SimulationParameters::default()
            .with_flow_rate(f64::INFINITY)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ElutionError::InvalidParameter { name: "flow_rate", .. }));
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = SimulationParameters::default()
            .with_gradient_time(0.0)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            ElutionError::InvalidParameter { name: "gradient_time", reason: "must be positive", .. }
        ));

        assert!(SimulationParameters::default().with_column_volume(-1.0).validate().is_err());
    }
}
