//! Peak detection on the elution chromatogram
//!
//! Finds the global absorbance maximum and estimates its full width at half
//! maximum (FWHM) from the sampled points. There is no interpolation: the
//! edges of the peak are the sampled points themselves, so the width is a
//! multiple of the gradient step and may be asymmetric.
//!
//! # Example
//!
//! ```rust
//! use elution_rs::analysis::find_peak;
//! use elution_rs::models::{ElutionPoint, ElutionProfile};
//!
//! let point = |time: f64, intensity: f64| ElutionPoint {
//!     time, ph: 7.0 - time / 10.0, intensity, binding_strength: 0.2,
//! };
//! let profile = ElutionProfile::new(vec![
//!     point(0.0, 0.0), point(1.0, 60.0), point(2.0, 100.0), point(3.0, 55.0), point(4.0, 10.0),
//! ]);
//!
//! let peak = find_peak(&profile);
//! assert_eq!(peak.time, 2.0);
//! assert_eq!(peak.peak_width, 2.0); // 1.0 → 3.0 min
//! ```

use crate::models::{ElutionPoint, ElutionProfile};
use crate::physics::round_dp;

/// pH reported when no point rises above zero
pub const DEFAULT_PEAK_PH: f64 = 7.0;

/// Elution peak: the highest point of the profile plus its width
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeakInfo {
    /// Retention time of the maximum \[min\]
    pub time: f64,
    /// Buffer pH at the maximum
    pub ph: f64,
    /// Maximum absorbance \[mAU\]
    pub intensity: f64,
    /// Residual binding at the maximum, `None` for the default peak
    pub binding_strength: Option<f64>,
    /// FWHM \[min\], 2 decimals
    pub peak_width: f64,
    /// Index of the maximum in the profile, `None` for the default peak
    pub index: Option<usize>,
}

impl Default for PeakInfo {
    fn default() -> Self {
        Self {
            time: 0.0,
            ph: DEFAULT_PEAK_PH,
            intensity: 0.0,
            binding_strength: None,
            peak_width: 0.0,
            index: None,
        }
    }
}

impl PeakInfo {
    /// Whether a point with positive absorbance was found
    pub fn is_detected(&self) -> bool {
        self.index.is_some()
    }

    fn from_point(index: usize, point: &ElutionPoint) -> Self {
        Self {
            time: point.time,
            ph: point.ph,
            intensity: point.intensity,
            binding_strength: Some(point.binding_strength),
            peak_width: 0.0,
            index: Some(index),
        }
    }
}

/// Locate the elution peak
///
/// The first point with the highest intensity wins. A profile that is empty
/// or never rises above zero yields [`PeakInfo::default`] rather than an
/// error; check [`PeakInfo::is_detected`].
pub fn find_peak(profile: &ElutionProfile) -> PeakInfo {
    let points = profile.points();

    let mut peak = PeakInfo::default();
    for (index, point) in points.iter().enumerate() {
        if point.intensity > peak.intensity {
            peak = PeakInfo::from_point(index, point);
        }
    }

    let Some(index) = peak.index else {
        log::debug!("no elution peak above baseline in {} points", points.len());
        return peak;
    };

    peak.peak_width = full_width_half_max(points, index);
    log::debug!(
        "peak at {:.2} min (pH {:.2}): {:.2} mAU, FWHM {:.2} min",
        peak.time,
        peak.ph,
        peak.intensity,
        peak.peak_width
    );
    peak
}

/// FWHM around `points[index]` from sampled points
///
/// The left edge is the nearest earlier point at or above half maximum, the
/// right edge the nearest later one. A missing edge falls back to the peak
/// time itself.
pub fn full_width_half_max(points: &[ElutionPoint], index: usize) -> f64 {
    let Some(apex) = points.get(index) else {
        return 0.0;
    };
    let half_max = apex.intensity / 2.0;

    let start = points[..index]
        .iter()
        .rev()
        .find(|p| p.intensity >= half_max)
        .map_or(apex.time, |p| p.time);

    let end = points[index + 1..]
        .iter()
        .find(|p| p.intensity >= half_max)
        .map_or(apex.time, |p| p.time);

    round_dp(end - start, 2)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(intensities: &[f64]) -> ElutionProfile {
        let points = intensities
            .iter()
            .enumerate()
            .map(|(i, &intensity)| ElutionPoint {
                time: i as f64 * 0.5,
                ph: 7.4 - i as f64 * 0.1,
                intensity,
                binding_strength: 0.1,
            })
            .collect();
        ElutionProfile::new(points)
    }

    #[test]
    fn test_empty_profile_gives_default() {
        let peak = find_peak(&ElutionProfile::default());
        assert_eq!(peak, PeakInfo::default());
        assert_eq!(peak.ph, 7.0);
        assert!(!peak.is_detected());
    }

    #[test]
    fn test_flat_zero_profile_gives_default() {
        let peak = find_peak(&profile(&[0.0; 20]));
        assert_eq!(peak.intensity, 0.0);
        assert_eq!(peak.binding_strength, None);
        assert_eq!(peak.peak_width, 0.0);
    }

    #[test]
    fn test_first_maximum_wins() {
        let peak = find_peak(&profile(&[1.0, 5.0, 3.0, 5.0, 2.0]));
        assert_eq!(peak.index, Some(1));
        assert_eq!(peak.time, 0.5);
        assert_eq!(peak.binding_strength, Some(0.1));
    }

    #[test]
    fn test_symmetric_width() {
        // half max 5: nearest edges are the neighbours at indices 3 and 5
        let peak = find_peak(&profile(&[0.0, 1.0, 6.0, 8.0, 10.0, 8.0, 6.0, 1.0, 0.0]));
        assert_eq!(peak.index, Some(4));
        assert_eq!(peak.peak_width, 1.0);
    }

    #[test]
    fn test_distant_shoulder_sets_left_edge() {
        let peak = find_peak(&profile(&[9.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0]));
        assert_eq!(peak.index, Some(4));
        // index 0 is the nearest earlier point above half max, nothing later
        assert_eq!(peak.peak_width, 2.0);
    }

    #[test]
    fn test_isolated_spike_has_zero_width() {
        let peak = find_peak(&profile(&[0.0, 0.0, 10.0, 0.0, 0.0]));
        assert_eq!(peak.peak_width, 0.0);
    }

    #[test]
    fn test_peak_at_start_and_end() {
        let start = find_peak(&profile(&[10.0, 6.0, 1.0]));
        assert_eq!(start.peak_width, 0.5);

        let end = find_peak(&profile(&[1.0, 6.0, 10.0]));
        assert_eq!(end.peak_width, 0.5);
    }

    #[test]
    fn test_width_out_of_range_index() {
        assert_eq!(full_width_half_max(&[], 3), 0.0);
    }
}
