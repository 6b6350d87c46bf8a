//! Plain-text report of a simulation run
//!
//! Four blocks: the ligand sequence summary, the performance metrics, the
//! process results and the advisory warnings.
//!
//! ```text
//! Ligand Sequence
//!   Length:             10 residues ×1 domain
//!   Histidine:          10
//!   ...
//! Performance Metrics
//!   Alkaline Stability: 98%
//!   Binding Capacity:   122 mg/mL
//!   ...
//! ```
//!
//! # Example
//!
//! ```rust
//! use elution_rs::output::report::Report;
//! use elution_rs::simulation::{Simulator, SimulationParameters};
//! use elution_rs::models::IntensityNoise;
//!
//! let result = Simulator::new()
//!     .with_noise(IntensityNoise::none())
//!     .run("HHHHHHHHHH", &SimulationParameters::default())
//!     .unwrap();
//!
//! let text = Report::new(&result).to_string();
//! assert!(text.contains("Recovery Yield"));
//! ```

use std::fmt;

use crate::models::sequence::AnnotatedResidue;
use crate::simulation::SimulationResult;

const LABEL_WIDTH: usize = 20;

/// Display adapter rendering a [`SimulationResult`] as text
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a SimulationResult,
    annotate: bool,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a SimulationResult) -> Self {
        Self {
            result,
            annotate: false,
        }
    }

    /// Also print the sequence with residue classes marked
    pub fn with_annotation(mut self) -> Self {
        self.annotate = true;
        self
    }
}

/// Binding affinity in units of 10⁸ M⁻¹, one decimal
pub fn format_affinity(affinity: f64) -> String {
    format!("{:.1}×10⁸", affinity / 1e8)
}

/// Sequence with every classified residue bracketed, e.g. `A[H]K[Y]`
pub fn format_annotated(residues: &[AnnotatedResidue]) -> String {
    residues
        .iter()
        .map(|r| match r.class {
            Some(_) => format!("[{}]", r.residue),
            None => r.residue.to_string(),
        })
        .collect()
}

fn line(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {:<width$}{}", format!("{}:", label), value, width = LABEL_WIDTH)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        let profile = result.residue_profile();
        let parameters = &result.parameters;
        let metrics = &result.metrics;
        let peak = &result.peak;
        let kpis = &result.kpis;

        // ── Sequence ──
        writeln!(f, "Ligand Sequence")?;
        let domains = result.analysis.domain_count();
        line(
            f,
            "Length",
            format!(
                "{} residues ×{} domain{}",
                result.analysis.sequence.chars().count(),
                domains,
                if domains == 1 { "" } else { "s" }
            ),
        )?;
        line(f, "Histidine", profile.histidine)?;
        line(f, "Aromatic (Y+F+W)", profile.aromatic_total())?;
        line(f, "Asn + Gln", profile.amide())?;
        line(f, "Cysteine", profile.cysteine)?;
        if self.annotate {
            line(f, "Annotated", format_annotated(&result.analysis.annotated()))?;
        }

        // ── Conditions ──
        writeln!(f, "Conditions")?;
        line(
            f,
            "Ligand",
            format!("{} ({})", parameters.ligand_variant, parameters.ligand_format),
        )?;
        line(f, "Target", parameters.target_molecule)?;
        line(
            f,
            "Elution",
            format!("{}, {} min", parameters.elution_strategy, parameters.gradient_time),
        )?;
        line(f, "Temperature", format!("{} °C", parameters.temperature))?;

        // ── Metrics ──
        writeln!(f, "Performance Metrics")?;
        line(f, "Alkaline Stability", format!("{}%", metrics.alkaline_stability))?;
        line(f, "Binding Capacity", format!("{} mg/mL", metrics.dynamic_binding_capacity))?;
        line(f, "Aggregation Risk", format!("{}%", metrics.aggregation_risk))?;
        line(f, "Ligand Leakage", format!("{} μg/mL", metrics.ligand_leakage))?;
        line(f, "Binding Affinity", format!("{} M⁻¹", format_affinity(metrics.binding_affinity)))?;
        line(f, "Elution Sharpness", format!("{} pH", metrics.elution_sharpness))?;

        // ── Results ──
        writeln!(f, "Results")?;
        line(f, "Elution Peak pH", peak.ph)?;
        line(f, "Peak Time", format!("{} min", peak.time))?;
        line(f, "Peak Intensity", format!("{:.1} mAU", peak.intensity))?;
        line(f, "Peak Width", format!("{} min", peak.peak_width))?;
        line(f, "Recovery Yield", format!("{:.1}%", kpis.recovery_yield))?;
        line(f, "Product Purity", format!("{:.1}%", kpis.purity))?;
        line(f, "Productivity", format!("{:.2} mg/h", kpis.productivity))?;

        // ── Warnings ──
        if !result.warnings.is_empty() {
            writeln!(f, "Warnings")?;
            for warning in &result.warnings {
                writeln!(f, "  ⚠ {}", warning.title)?;
                writeln!(f, "    {}", warning.message)?;
            }
        }

        Ok(())
    }
}
