//! Process KPIs derived from the metrics
//!
//! ```text
//! yield        = clamp(90 − 0.5 · aggregation_risk, 70, 98)      [%]
//! purity       = clamp(95 − 2 · ligand_leakage, 85, 99.5)        [%]
//! productivity = c · V_col · yield / 100 / (t_gradient / 60)     [mg/h]
//! ```

use crate::models::MetricsResult;
use crate::simulation::SimulationParameters;

pub const YIELD_RANGE: (f64, f64) = (70.0, 98.0);
pub const PURITY_RANGE: (f64, f64) = (85.0, 99.5);

/// Yield, purity and productivity of a run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedKpis {
    /// Recovery yield \[%\]
    pub recovery_yield: f64,
    /// Eluate purity \[%\]
    pub purity: f64,
    /// Antibody mass per hour of gradient \[mg/h\]
    pub productivity: f64,
}

pub fn derive_kpis(metrics: &MetricsResult, parameters: &SimulationParameters) -> DerivedKpis {
    let recovery_yield = (90.0 - metrics.aggregation_risk * 0.5).clamp(YIELD_RANGE.0, YIELD_RANGE.1);
    let purity = (95.0 - metrics.ligand_leakage * 2.0).clamp(PURITY_RANGE.0, PURITY_RANGE.1);

    let gradient_hours = parameters.gradient_time / 60.0;
    let productivity = parameters.target_concentration * parameters.column_volume * recovery_yield
        / 100.0
        / gradient_hours;

    DerivedKpis {
        recovery_yield,
        purity,
        productivity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn metrics(aggregation_risk: f64, ligand_leakage: f64) -> MetricsResult {
        MetricsResult {
            alkaline_stability: 80.0,
            dynamic_binding_capacity: 100.0,
            aggregation_risk,
            ligand_leakage,
            binding_affinity: 5e8,
            elution_sharpness: 0.3,
        }
    }

    #[test]
    fn test_defaults() {
        let kpis = derive_kpis(&metrics(10.0, 2.0), &SimulationParameters::default());
        assert_relative_eq!(kpis.recovery_yield, 85.0);
        assert_relative_eq!(kpis.purity, 91.0);
        // 5 mg/mL × 5 mL × 0.85 / 1 h
        assert_relative_eq!(kpis.productivity, 21.25, epsilon = 1e-12);
    }

    #[test]
    fn test_clamps() {
        let low = derive_kpis(&metrics(45.0, 15.0), &SimulationParameters::default());
        assert_eq!(low.recovery_yield, 70.0);
        assert_eq!(low.purity, 85.0);

        let high = derive_kpis(&metrics(-20.0, -5.0), &SimulationParameters::default());
        assert_eq!(high.recovery_yield, 98.0);
        assert_eq!(high.purity, 99.5);
    }

    #[test]
    fn test_productivity_scales_with_gradient_time() {
        let m = metrics(10.0, 2.0);
        let hour = derive_kpis(&m, &SimulationParameters::default().with_gradient_time(60.0));
        let half_hour = derive_kpis(&m, &SimulationParameters::default().with_gradient_time(30.0));
        assert_relative_eq!(half_hour.productivity, 2.0 * hour.productivity, epsilon = 1e-12);
    }
}
