//! Common utilities for integration tests

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{alanine_ligand, histidine_ligand, quiet_simulator, seeded_simulator, Z_DOMAIN};
pub use test_helpers::{assert_non_increasing, assert_strictly_increasing, count_csv_rows};
