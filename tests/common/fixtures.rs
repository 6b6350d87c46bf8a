//! Ligand sequences and simulators shared by the integration tests

#![allow(dead_code)]

use elution_rs::models::IntensityNoise;
use elution_rs::simulation::Simulator;

/// Z domain of staphylococcal Protein A
pub const Z_DOMAIN: &str = "VDNKFNKEQQNAFYEILHLPNLNEEQRNAFIQSLKDDPSQSANLLAEAKKLNDAQAPK";

/// `n` histidines
pub fn histidine_ligand(n: usize) -> String {
    "H".repeat(n)
}

/// `n` alanines: no residue the model reacts to
pub fn alanine_ligand(n: usize) -> String {
    "A".repeat(n)
}

/// Simulator without detector noise
pub fn quiet_simulator() -> Simulator {
    Simulator::new().with_noise(IntensityNoise::none())
}

/// Simulator with reproducible unit-amplitude noise
pub fn seeded_simulator(seed: u64) -> Simulator {
    Simulator::new().with_noise(IntensityNoise::seeded(seed, 1.0))
}
