//! Henderson–Hasselbalch protonation
//!
//! Fraction of an ionisable group carrying its proton at a given pH:
//!
//! ```text
//!              10^(pKa − pH)
//! f(pKa, pH) = ───────────────
//!              1 + 10^(pKa − pH)
//! ```
//!
//! The function is evaluated as `1 / (1 + 10^(pH − pKa))`, which is the same
//! logistic curve but stays finite when `pKa − pH` is large.

/// Protonated fraction of a group with the given pKa, in \[0, 1\]
///
/// # Example
///
/// ```rust
/// use elution_rs::physics::protonated_fraction;
///
/// // Half protonated at pH = pKa
/// assert!((protonated_fraction(6.0, 6.0) - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn protonated_fraction(pka: f64, ph: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf(ph - pka))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_half_protonated_at_pka() {
        assert_relative_eq!(protonated_fraction(5.8, 5.8), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_one_unit_below_pka() {
        // 10 / 11
        assert_relative_eq!(protonated_fraction(6.0, 5.0), 10.0 / 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_direct_form() {
        for &(pka, ph) in &[(6.0, 7.4), (6.1, 2.5), (6.3, 4.0), (5.5, 3.2)] {
            let x = 10f64.powf(pka - ph);
            assert_relative_eq!(protonated_fraction(pka, ph), x / (1.0 + x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_extremes_stay_finite() {
        assert!(protonated_fraction(6.0, -500.0) <= 1.0);
        assert_relative_eq!(protonated_fraction(6.0, -500.0), 1.0, epsilon = 1e-12);
        assert_eq!(protonated_fraction(6.0, 500.0), 0.0);
    }

    #[test]
    fn test_monotonic_in_ph() {
        let mut previous = 0.0;
        for step in 0..=50 {
            let ph = 7.4 - step as f64 * 0.1;
            let fraction = protonated_fraction(6.0, ph);
            assert!(fraction >= previous);
            previous = fraction;
        }
    }
}
