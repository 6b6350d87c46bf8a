//! Performance benchmarks for the elution pipeline
//!
//! # What We're Measuring
//!
//! 1. **Elution model alone** per strategy: one Henderson–Hasselbalch
//!    evaluation pair and one Gaussian per gradient step, so time should
//!    scale with the step count (Traditional 150 → Step 50).
//!
//! 2. **Full pipeline** (`Simulator::run`) against ligand length and format:
//!    sequence counting is linear in the effective sequence length, everything
//!    after it is independent of it.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench simulation_performance
//!
//! # Only the per-strategy group
//! cargo bench --bench simulation_performance strategy
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use elution_rs::models::sequence::analyze;
use elution_rs::models::{ElutionSimulator, ElutionStrategy, IntensityNoise, LigandFormat};
use elution_rs::physics::MolecularConstants;
use elution_rs::simulation::{SimulationParameters, Simulator};

const Z_DOMAIN: &str = "VDNKFNKEQQNAFYEILHLPNLNEEQRNAFIQSLKDDPSQSANLLAEAKKLNDAQAPK";

// =================================================================================================
// Benchmarks
// =================================================================================================

/// Elution profile generation for each strategy, noise disabled
fn benchmark_elution_strategy(c: &mut Criterion) {
    let mut group = c.benchmark_group("Elution strategy");

    let constants = MolecularConstants::default();
    let noise = IntensityNoise::none();
    let profile = analyze(Z_DOMAIN, LigandFormat::Dimeric).unwrap().profile;
    let simulator = ElutionSimulator::new(&constants, &noise);

    for strategy in ElutionStrategy::ALL {
        let parameters = SimulationParameters::default().with_strategy(strategy);

        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.tag()),
            &parameters,
            |b, parameters| {
                b.iter(|| simulator.simulate(black_box(&profile), black_box(parameters)))
            },
        );
    }

    group.finish();
}

/// Cost of the noise sources on the same run
fn benchmark_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("Detector noise");
    let parameters = SimulationParameters::default();

    let sources = [
        ("none", IntensityNoise::none()),
        ("seeded", IntensityNoise::seeded(42, 1.0)),
        ("thread_rng", IntensityNoise::uniform(1.0)),
    ];

    for (name, noise) in sources {
        let simulator = Simulator::new().with_noise(noise);
        group.bench_function(name, |b| {
            b.iter(|| simulator.run(black_box(Z_DOMAIN), black_box(&parameters)).unwrap())
        });
    }

    group.finish();
}

/// Full pipeline against the effective ligand length
fn benchmark_pipeline_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pipeline");
    let simulator = Simulator::new().with_noise(IntensityNoise::none());

    for format in LigandFormat::ALL {
        let parameters = SimulationParameters::default().with_ligand_format(format);

        group.bench_with_input(
            BenchmarkId::new("format", format.tag()),
            &parameters,
            |b, parameters| {
                b.iter(|| simulator.run(black_box(Z_DOMAIN), black_box(parameters)).unwrap())
            },
        );
    }

    for repeats in [1, 10, 100] {
        let sequence = Z_DOMAIN.repeat(repeats);
        let parameters = SimulationParameters::default();

        group.bench_with_input(
            BenchmarkId::new("residues", sequence.len()),
            &sequence,
            |b, sequence| {
                b.iter(|| simulator.run(black_box(sequence), black_box(&parameters)).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_elution_strategy,
    benchmark_noise,
    benchmark_pipeline_scaling,
);

criterion_main!(benches);
