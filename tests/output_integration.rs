//! Integration tests: simulation results through the output layer
//!
//! CSV export, chromatogram plots and the text report, all written to a
//! temporary directory.

use std::fs;

use tempfile::tempdir;

use elution_rs::models::{ElutionStrategy, LigandFormat};
use elution_rs::output::{
    export_elution_csv, export_result_csv, plot_elution_comparison, plot_result, CsvConfig,
    CsvMetadata, PlotConfig, Report,
};
use elution_rs::simulation::SimulationParameters;

mod common;
use common::{count_csv_rows, quiet_simulator, seeded_simulator, Z_DOMAIN};

// ── CSV ──

#[test]
fn test_result_csv_round_trips_points() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("elution.csv");

    let result = quiet_simulator()
        .run(Z_DOMAIN, &SimulationParameters::default())
        .unwrap();
    export_result_csv(&result, &path, &CsvConfig::default()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Protein A Elution Simulation"));
    assert!(content.contains("# Strategy: traditional"));
    assert!(content.contains(&format!("# Peak pH: {}", result.peak.ph)));
    assert!(content.contains("time,pH,intensity,binding_strength"));

    assert_eq!(count_csv_rows(&path), result.elution_profile.len());

    // Data rows parse back to the rounded profile values
    let first_row = content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .nth(1)
        .unwrap();
    let values: Vec<f64> = first_row.split(',').map(|v| v.parse().unwrap()).collect();
    let first = result.elution_profile.points()[0];
    assert_eq!(values, vec![first.time, first.ph, first.intensity, first.binding_strength]);
}

#[test]
fn test_european_csv_without_metadata() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("elution_eu.csv");

    let result = quiet_simulator()
        .run(
            Z_DOMAIN,
            &SimulationParameters::default().with_strategy(ElutionStrategy::Step),
        )
        .unwrap();

    let config = CsvConfig {
        include_metadata: false,
        ..CsvConfig::european()
    };
    export_result_csv(&result, &path, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("time;pH;intensity;binding_strength"));

    // Still bound at the start of the gradient
    let first = lines.next().unwrap();
    assert!(first.starts_with("0,000;7,400;0,000;"), "unexpected row {}", first);
    assert_eq!(count_csv_rows(&path), 51);
}

#[test]
fn test_custom_metadata_takes_precedence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.csv");

    let result = quiet_simulator()
        .run(Z_DOMAIN, &SimulationParameters::default())
        .unwrap();

    let mut metadata = CsvMetadata::default();
    metadata.add_custom("Batch", "R-042");
    let config = CsvConfig::default().with_metadata(metadata);
    export_result_csv(&result, &path, &config).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("# Batch: R-042"));
    assert!(!content.contains("# Strategy:"));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("elution.csv");

    let result = quiet_simulator()
        .run(Z_DOMAIN, &SimulationParameters::default())
        .unwrap();

    assert!(export_elution_csv(&result.elution_profile, &path, None).is_err());
}

// ── Plots ──

#[test]
fn test_plot_result_png_and_svg() {
    let dir = tempdir().unwrap();
    let result = seeded_simulator(1)
        .run(
            Z_DOMAIN,
            &SimulationParameters::default().with_ligand_format(LigandFormat::Dimeric),
        )
        .unwrap();

    let png = dir.path().join("chromatogram.png");
    let svg = dir.path().join("chromatogram.svg");

    plot_result(&result, &png, None).unwrap();
    plot_result(&result, &svg, Some(&PlotConfig::chromatogram("Dimeric Z domain"))).unwrap();

    assert!(fs::metadata(&png).unwrap().len() > 0);
    let svg_content = fs::read_to_string(&svg).unwrap();
    assert!(svg_content.contains("<svg"));
    assert!(svg_content.contains("Dimeric Z domain"));
}

#[test]
fn test_plot_strategy_comparison() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("comparison.svg");
    let simulator = quiet_simulator();

    let results: Vec<_> = ElutionStrategy::ALL
        .into_iter()
        .map(|strategy| {
            let parameters = SimulationParameters::default().with_strategy(strategy);
            (strategy, simulator.run("HHHHHHHHHH", &parameters).unwrap())
        })
        .collect();

    let datasets: Vec<_> = results
        .iter()
        .map(|(strategy, result)| (strategy.tag(), &result.elution_profile))
        .collect();

    plot_elution_comparison(&datasets, &path, None).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    for strategy in ElutionStrategy::ALL {
        assert!(content.contains(strategy.tag()), "legend is missing {}", strategy);
    }
}

// ── Report ──

#[test]
fn test_report_matches_result() {
    let result = quiet_simulator()
        .run("HHHHHHHHHH", &SimulationParameters::default())
        .unwrap();
    let text = Report::new(&result).to_string();

    assert!(text.contains("Alkaline Stability: 98%"));
    assert!(text.contains("Binding Capacity:   135 mg/mL"));
    assert!(text.contains("Recovery Yield:     85.5%"));
    assert!(!text.contains("Warnings"));
}
