//! Example: Elution Strategy Comparison
//!
//! Runs one engineered ligand through the five elution strategies and
//! compares where each one releases the antibody.
//!
//! ## Structure
//!
//! **Phase 1: Simulation** (5 strategies, seeded noise)
//! - One `plot_result` per strategy
//!
//! **Phase 2: Analysis**
//! - Peak pH, time and width per strategy
//! - Recovery yield, purity and productivity
//! - Overlaid absorbance curves with `plot_elution_comparison`
//!
//! **Conditions**:
//! - Engineered mild ligand, dimeric format, human IgG1
//! - 5 mg/mL load, 5 mL column at 1 mL/min, 25 °C, 60 min gradient

use elution_rs::{
    models::{ElutionStrategy, IntensityNoise, LigandFormat},
    output::{plot_elution_comparison, plot_result, PlotConfig},
    physics::LigandVariant,
    simulation::{SimulationParameters, SimulationResult, Simulator},
};

use std::time::Instant;

/// Z domain of staphylococcal Protein A
const Z_DOMAIN: &str = "VDNKFNKEQQNAFYEILHLPNLNEEQRNAFIQSLKDDPSQSANLLAEAKKLNDAQAPK";

/// Prints a titled section banner to stdout.
fn print_section(title: &str) {
    println!("\n═══════════════════════════════════════════════════════");
    println!("  {title}");
    println!("═══════════════════════════════════════════════════════\n");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print_section("Elution Strategy Comparison");

    let simulator = Simulator::new().with_noise(IntensityNoise::seeded(7, 1.0));
    let base = SimulationParameters::default()
        .with_ligand_variant(LigandVariant::EngineeredMild)
        .with_ligand_format(LigandFormat::Dimeric);

    // =============================================================================================
    // Simulation
    // =============================================================================================

    let mut runs: Vec<(ElutionStrategy, f64, SimulationResult)> = Vec::new();

    for strategy in ElutionStrategy::ALL {
        print!("Running {:<14} ... ", strategy.tag());
        let started = Instant::now();

        let result = simulator.run(Z_DOMAIN, &base.with_strategy(strategy))?;

        let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
        println!("✓ {:.2} ms", elapsed_ms);

        plot_result(&result, format!("elution_{}.png", strategy.tag()), None)?;
        runs.push((strategy, elapsed_ms, result));
    }

    // =============================================================================================
    // Results Analysis
    // =============================================================================================

    print_section("Results: Peak Characteristics");

    println!(
        "{:<14} {:>8} {:>10} {:>10} {:>12}",
        "Strategy", "Peak pH", "Time (min)", "FWHM (min)", "Height (mAU)"
    );
    println!("{:-<58}", "");

    for (strategy, _, result) in &runs {
        let peak = &result.peak;
        println!(
            "{:<14} {:>8.2} {:>10.2} {:>10.2} {:>12.1}",
            strategy.tag(),
            peak.ph,
            peak.time,
            peak.peak_width,
            peak.intensity
        );
    }

    print_section("Results: Process KPIs");

    println!(
        "{:<14} {:>10} {:>10} {:>14} {:>9}",
        "Strategy", "Yield (%)", "Purity (%)", "Prod. (mg/h)", "Warnings"
    );
    println!("{:-<61}", "");

    for (strategy, _, result) in &runs {
        println!(
            "{:<14} {:>10.1} {:>10.1} {:>14.2} {:>9}",
            strategy.tag(),
            result.recovery_yield(),
            result.purity(),
            result.productivity(),
            result.warnings.len()
        );
    }

    // Earliest release

    if let Some((strategy, _, result)) = runs
        .iter()
        .filter(|(_, _, r)| r.peak.is_detected())
        .min_by(|a, b| a.2.peak.time.total_cmp(&b.2.peak.time))
    {
        println!(
            "\nEarliest release: {} at {:.2} min (pH {:.2})",
            strategy, result.peak.time, result.peak.ph
        );
    }

    // =============================================================================================
    // Visualization
    // =============================================================================================

    let datasets: Vec<(&str, _)> = runs
        .iter()
        .map(|(strategy, _, result)| (strategy.tag(), &result.elution_profile))
        .collect();

    let config = PlotConfig::comparison("Elution strategies, engineered mild ligand");
    plot_elution_comparison(&datasets, "elution_strategies.png", Some(&config))?;

    println!("\nPlots written: elution_<strategy>.png, elution_strategies.png");

    Ok(())
}
