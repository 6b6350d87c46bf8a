//! Example: Ligand Format Scan
//!
//! Repeats one Protein A domain as a monomer, dimer, tetramer and hexamer
//! and reports how the metrics scale with the number of domains.
//!
//! Noise is disabled so the differences come from the model alone. The
//! profiles are exported to CSV (one file per format) for external plotting.

use elution_rs::{
    models::{IntensityNoise, LigandFormat},
    output::{export_result_csv, CsvConfig, Report},
    simulation::{SimulationParameters, Simulator},
};

/// B domain of staphylococcal Protein A
const B_DOMAIN: &str = "ADNKFNKEQQNAFYEILHLPNLNEEQRNGFIQSLKDDPSQSANLLAEAKKLNDAQAPK";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let simulator = Simulator::new().with_noise(IntensityNoise::none());

    println!(
        "{:<12} {:>8} {:>12} {:>12} {:>10} {:>10}",
        "Format", "Domains", "DBC (mg/mL)", "Leak (μg/mL)", "Peak pH", "Yield (%)"
    );
    println!("{:-<69}", "");

    for format in LigandFormat::ALL {
        let parameters = SimulationParameters::default().with_ligand_format(format);
        let result = simulator.run(B_DOMAIN, &parameters)?;

        println!(
            "{:<12} {:>8} {:>12.1} {:>12.3} {:>10.2} {:>10.1}",
            format.tag(),
            result.analysis.domain_count(),
            result.metrics.dynamic_binding_capacity,
            result.metrics.ligand_leakage,
            result.peak.ph,
            result.recovery_yield()
        );

        export_result_csv(
            &result,
            format!("format_{}.csv", format.tag()),
            &CsvConfig::default(),
        )?;
    }

    // Full report for the tetramer, the common commercial format
    let tetramer = simulator.run(
        B_DOMAIN,
        &SimulationParameters::default().with_ligand_format(LigandFormat::Tetrameric),
    )?;
    println!("\n{}", Report::new(&tetramer).with_annotation());

    Ok(())
}
