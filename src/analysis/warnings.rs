//! Advisory warnings on a simulation run
//!
//! Threshold checks over the metrics, the peak and the operating conditions.
//! Warnings never stop a run; each rule fires independently and the list is
//! always in the order of [`WarningKind::ALL`].
//!
//! | Rule                         | Fires when                 |
//! |------------------------------|----------------------------|
//! | High Aggregation Risk        | aggregation risk > 25 %    |
//! | Harsh Elution Conditions     | peak pH < 3.2              |
//! | High Ligand Leakage          | leakage > 8 μg/mL          |
//! | Low Binding Capacity         | capacity < 60 mg/mL        |
//! | Elevated Temperature         | temperature > 30 °C        |

use std::fmt;

use crate::analysis::peak::PeakInfo;
use crate::models::MetricsResult;
use crate::simulation::SimulationParameters;

pub const AGGREGATION_RISK_LIMIT: f64 = 25.0;
pub const HARSH_ELUTION_PH: f64 = 3.2;
pub const LIGAND_LEAKAGE_LIMIT: f64 = 8.0;
pub const LOW_BINDING_CAPACITY: f64 = 60.0;
pub const ELEVATED_TEMPERATURE: f64 = 30.0;

/// Rule that produced a [`Warning`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarningKind {
    HighAggregationRisk,
    HarshElution,
    HighLigandLeakage,
    LowBindingCapacity,
    ElevatedTemperature,
}

impl WarningKind {
    /// Evaluation order
    pub const ALL: [WarningKind; 5] = [
        WarningKind::HighAggregationRisk,
        WarningKind::HarshElution,
        WarningKind::HighLigandLeakage,
        WarningKind::LowBindingCapacity,
        WarningKind::ElevatedTemperature,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WarningKind::HighAggregationRisk => "High Aggregation Risk",
            WarningKind::HarshElution => "Harsh Elution Conditions",
            WarningKind::HighLigandLeakage => "High Ligand Leakage",
            WarningKind::LowBindingCapacity => "Low Binding Capacity",
            WarningKind::ElevatedTemperature => "Elevated Temperature",
        }
    }
}

/// Advisory message
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    pub kind: WarningKind,
    pub title: String,
    pub message: String,
}

impl Warning {
    fn new(kind: WarningKind, message: String) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Apply every rule in order
pub fn evaluate(
    metrics: &MetricsResult,
    peak: &PeakInfo,
    parameters: &SimulationParameters,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if metrics.aggregation_risk > AGGREGATION_RISK_LIMIT {
        warnings.push(Warning::new(
            WarningKind::HighAggregationRisk,
            format!(
                "Aggregation risk is {}%. Consider using milder elution conditions or adding stabilizers.",
                metrics.aggregation_risk
            ),
        ));
    }

    if peak.ph < HARSH_ELUTION_PH {
        warnings.push(Warning::new(
            WarningKind::HarshElution,
            format!(
                "Elution pH of {} may cause protein degradation. Consider engineered ligands for milder conditions.",
                peak.ph
            ),
        ));
    }

    if metrics.ligand_leakage > LIGAND_LEAKAGE_LIMIT {
        warnings.push(Warning::new(
            WarningKind::HighLigandLeakage,
            format!(
                "Predicted ligand leakage of {} μg/mL exceeds recommended levels. Check ligand stability.",
                metrics.ligand_leakage
            ),
        ));
    }

    if metrics.dynamic_binding_capacity < LOW_BINDING_CAPACITY {
        warnings.push(Warning::new(
            WarningKind::LowBindingCapacity,
            format!(
                "Binding capacity of {} mg/mL is below typical ranges. Optimize ligand density.",
                metrics.dynamic_binding_capacity
            ),
        ));
    }

    if parameters.temperature > ELEVATED_TEMPERATURE {
        warnings.push(Warning::new(
            WarningKind::ElevatedTemperature,
            format!(
                "Operating temperature of {}°C may reduce stability and increase aggregation.",
                parameters.temperature
            ),
        ));
    }

    warnings
}
