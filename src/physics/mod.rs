//! Physical constants and equilibrium laws
//!
//! This module holds the two pieces of "physics" the prediction model relies on:
//!
//! - **Constants** ([`constants`]): literature pKa values of the Protein A ligand
//!   variants, Fc-region properties of the supported antibody formats and the
//!   binding-constant parameters. Everything is gathered into one immutable
//!   [`MolecularConstants`] table that is passed explicitly to the model stages.
//! - **Protonation** ([`protonation`]): the Henderson–Hasselbalch fraction used
//!   by the binding model to decide when the ligand releases the antibody.
//!
//! # Architecture
//!
//! The constants table is *data*, the model stages in [`crate::models`] are the
//! *equations*. Swapping the table (for a calibrated resin, or a test fixture)
//! never requires touching the formulas:
//!
//! ```rust
//! use elution_rs::physics::{MolecularConstants, LigandVariant, LigandPka};
//!
//! let table = MolecularConstants::default()
//!     .with_ligand(LigandVariant::EngineeredMild, LigandPka::new(6.4, 6.2));
//!
//! assert_eq!(table.ligand(LigandVariant::EngineeredMild).binding_site, 6.2);
//! ```

pub mod constants;
pub mod protonation;

pub use constants::{
    BindingConstants,
    LigandPka,
    LigandVariant,
    MolecularConstants,
    TargetMolecule,
    TargetProperties,
};
pub use protonation::protonated_fraction;

/// Round to a fixed number of decimals
///
/// Every value the model reports is rounded the same way before it leaves the
/// crate, so equal inputs always print equal numbers.
#[inline]
pub(crate) fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(97.04999, 1), 97.0);
        assert_eq!(round_dp(3.14159, 2), 3.14);
        assert_eq!(round_dp(0.4567, 3), 0.457);
        assert_eq!(round_dp(-1.25, 0), -1.0);
    }
}
