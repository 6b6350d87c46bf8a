use clap::{ArgAction, Parser};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use elution_rs::error::{ElutionError, Result};
use elution_rs::models::noise::DEFAULT_NOISE_AMPLITUDE;
use elution_rs::models::{ElutionStrategy, IntensityNoise, LigandFormat};
use elution_rs::output::{export_result_csv, plot_result, CsvConfig, Report};
use elution_rs::physics::{LigandVariant, TargetMolecule};
use elution_rs::simulation::{SimulationParameters, Simulator};

#[derive(Parser)]
#[command(name = "elution")]
#[command(about = "Predict the Protein A elution chromatogram of a ligand sequence", long_about = None)]
struct Cli {
    /// Ligand amino-acid sequence (one-letter code, whitespace ignored)
    #[arg(required_unless_present = "file")]
    sequence: Option<String>,

    /// Read the sequence from a file (FASTA header lines are skipped)
    #[arg(short, long, value_name = "FILE", conflicts_with = "sequence")]
    file: Option<PathBuf>,

    /// Ligand variant: wild_type, engineered_mild, engineered_harsh
    #[arg(long, default_value = "wild_type")]
    ligand: LigandVariant,

    /// Ligand format: monomeric, dimeric, tetrameric, multimeric
    #[arg(long, default_value = "monomeric")]
    format: LigandFormat,

    /// Target antibody: human_igg1, human_igg2, human_igg4, mouse_igg1, fc_fusion, fab_fragment, bispecific
    #[arg(long, default_value = "human_igg1")]
    target: TargetMolecule,

    /// Target concentration (mg/mL)
    #[arg(long, default_value_t = 5.0)]
    concentration: f64,

    /// Column volume (mL)
    #[arg(long, default_value_t = 5.0)]
    column_volume: f64,

    /// Flow rate (mL/min)
    #[arg(long, default_value_t = 1.0)]
    flow_rate: f64,

    /// Loading capacity (mg/mL resin)
    #[arg(long, default_value_t = 40.0)]
    loading: f64,

    /// Operating temperature (°C)
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    temperature: f64,

    /// Elution strategy: traditional, mild, step, salt_assisted, competitive
    #[arg(long, default_value = "traditional")]
    strategy: ElutionStrategy,

    /// Gradient time (min)
    #[arg(long, default_value_t = 60.0)]
    gradient_time: f64,

    /// Seed the detector noise for a reproducible profile
    #[arg(long, conflicts_with = "no_noise")]
    seed: Option<u64>,

    /// Disable detector noise
    #[arg(long, action = ArgAction::SetTrue)]
    no_noise: bool,

    /// Write the elution profile as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write the chromatogram (.png or .svg)
    #[arg(long, value_name = "PATH")]
    plot: Option<PathBuf>,

    /// Print the sequence with highlighted residues
    #[arg(long, action = ArgAction::SetTrue)]
    annotate: bool,
}

impl Cli {
    fn parameters(&self) -> SimulationParameters {
        SimulationParameters::default()
            .with_ligand_variant(self.ligand)
            .with_ligand_format(self.format)
            .with_target(self.target)
            .with_target_concentration(self.concentration)
            .with_column_volume(self.column_volume)
            .with_flow_rate(self.flow_rate)
            .with_loading_capacity(self.loading)
            .with_temperature(self.temperature)
            .with_strategy(self.strategy)
            .with_gradient_time(self.gradient_time)
    }

    fn noise(&self) -> IntensityNoise {
        match (self.no_noise, self.seed) {
            (true, _) => IntensityNoise::none(),
            (false, Some(seed)) => IntensityNoise::seeded(seed, DEFAULT_NOISE_AMPLITUDE),
            (false, None) => IntensityNoise::default(),
        }
    }

    fn sequence(&self) -> Result<String> {
        match (&self.sequence, &self.file) {
            (Some(sequence), _) => Ok(sequence.clone()),
            (None, Some(path)) => {
                let content = fs::read_to_string(path)?;
                Ok(content
                    .lines()
                    .filter(|line| !line.trim_start().starts_with('>'))
                    .collect())
            }
            (None, None) => Err(ElutionError::InvalidSequence { length: 0 }),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let sequence = cli.sequence()?;
    let simulator = Simulator::new().with_noise(cli.noise());
    let result = simulator.run(&sequence, &cli.parameters())?;

    let report = Report::new(&result);
    if cli.annotate {
        println!("{}", report.with_annotation());
    } else {
        println!("{}", report);
    }

    if let Some(path) = &cli.csv {
        export_result_csv(&result, path, &CsvConfig::default())?;
        println!("CSV written to {}", path.display());
    }

    if let Some(path) = &cli.plot {
        plot_result(&result, path, None)?;
        println!("Chromatogram written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
