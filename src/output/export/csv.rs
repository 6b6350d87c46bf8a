//! CSV export of the elution chromatogram
//!
//! Writes one row per gradient step, readable by Excel, pandas or MATLAB.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use elution_rs::output::export::export_elution_csv;
//!
//! export_elution_csv(&result.elution_profile, "elution.csv", None)?;
//! ```
//!
//! **Output** (`elution.csv`):
//! ```csv
//! time,pH,intensity,binding_strength
//! 0.000,7.400,0.310,0.996
//! 0.400,7.370,0.000,0.996
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use elution_rs::output::export::{export_result_csv, CsvConfig};
//!
//! // Metadata (strategy, ligand, target, peak) is taken from the result
//! export_result_csv(&result, "elution.csv", &CsvConfig::default())?;
//! ```
//!
//! **Output**:
//! ```csv
//! # Protein A Elution Simulation
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Strategy: traditional
//! # Ligand: wild_type (monomeric)
//! # Target: human_igg1
//! # Temperature: 25 °C
//! # Gradient Time: 60 min
//! # Peak pH: 4.35
//! # Peak Time: 37.2 min
//! #
//! time,pH,intensity,binding_strength
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ElutionError, Result};
use crate::models::ElutionProfile;
use crate::simulation::SimulationResult;

/// Column names, in order
pub const COLUMNS: [&str; 4] = ["time", "pH", "intensity", "binding_strength"];

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use elution_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places (default: 3, the resolution of the binding strength)
    pub precision: usize,

    /// Include metadata header comments (default: true)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 3,
            include_metadata: true,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Semicolon delimiter and decimal comma
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Data rows only
    pub fn bare() -> Self {
        Self {
            include_metadata: false,
            ..Default::default()
        }
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set are written.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    pub strategy: Option<String>,
    pub ligand: Option<String>,
    pub target: Option<String>,
    /// \[°C\]
    pub temperature: Option<f64>,
    /// \[min\]
    pub gradient_time: Option<f64>,
    pub peak_ph: Option<f64>,
    /// \[min\]
    pub peak_time: Option<f64>,
    /// Additional key/value lines
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Describe the run that produced `result`
    pub fn from_result(result: &SimulationResult) -> Self {
        let parameters = &result.parameters;
        let peak = result.peak.is_detected().then_some(&result.peak);

        Self {
            strategy: Some(parameters.elution_strategy.to_string()),
            ligand: Some(format!(
                "{} ({})",
                parameters.ligand_variant, parameters.ligand_format
            )),
            target: Some(parameters.target_molecule.to_string()),
            temperature: Some(parameters.temperature),
            gradient_time: Some(parameters.gradient_time),
            peak_ph: peak.map(|p| p.ph),
            peak_time: peak.map(|p| p.time),
            custom: Vec::new(),
        }
    }

    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Protein A Elution Simulation")?;
    writeln!(out, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;

    if let Some(strategy) = &metadata.strategy {
        writeln!(out, "# Strategy: {}", strategy)?;
    }
    if let Some(ligand) = &metadata.ligand {
        writeln!(out, "# Ligand: {}", ligand)?;
    }
    if let Some(target) = &metadata.target {
        writeln!(out, "# Target: {}", target)?;
    }
    if let Some(temperature) = metadata.temperature {
        writeln!(out, "# Temperature: {} °C", temperature)?;
    }
    if let Some(gradient_time) = metadata.gradient_time {
        writeln!(out, "# Gradient Time: {} min", gradient_time)?;
    }
    if let Some(ph) = metadata.peak_ph {
        writeln!(out, "# Peak pH: {}", ph)?;
    }
    if let Some(time) = metadata.peak_time {
        writeln!(out, "# Peak Time: {} min", time)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Write the profile as CSV into any writer
///
/// # Errors
///
/// - Empty profile
/// - Delimiter equal to the decimal separator
/// - Write failures
pub fn write_elution_csv<W: Write>(
    out: &mut W,
    profile: &ElutionProfile,
    configuration: &CsvConfig,
) -> Result<()> {
    // ============================= Validation =============================

    if profile.is_empty() {
        return Err(ElutionError::Export(
            "Empty data: elution profile has no points".to_string(),
        ));
    }

    if configuration.delimiter == configuration.decimal_separator {
        return Err(ElutionError::Export(format!(
            "Delimiter and decimal separator are both '{}'",
            configuration.delimiter
        )));
    }

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(out, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    let delimiter = configuration.delimiter.to_string();
    writeln!(out, "{}", COLUMNS.join(delimiter.as_str()))?;

    // ============================= Write Data =============================

    for point in profile {
        let row = [point.time, point.ph, point.intensity, point.binding_strength]
            .map(|value| format_number(value, configuration));
        writeln!(out, "{}", row.join(delimiter.as_str()))?;
    }

    Ok(())
}

/// Export the profile to a CSV file
///
/// # Example
///
/// ```rust,ignore
/// export_elution_csv(&result.elution_profile, "elution.csv", None)?;
/// ```
pub fn export_elution_csv(
    profile: &ElutionProfile,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut file = BufWriter::new(File::create(output_path.as_ref())?);
    write_elution_csv(&mut file, profile, configuration)?;
    file.flush()?;

    log::info!(
        "exported {} elution points to {}",
        profile.len(),
        output_path.as_ref().display()
    );
    Ok(())
}

/// Export a full result, filling the metadata header from the run
///
/// Metadata already present in `configuration` takes precedence.
pub fn export_result_csv(
    result: &SimulationResult,
    output_path: impl AsRef<Path>,
    configuration: &CsvConfig,
) -> Result<()> {
    let mut configuration = configuration.clone();
    if configuration.include_metadata && configuration.metadata.is_none() {
        configuration.metadata = Some(CsvMetadata::from_result(result));
    }
    export_elution_csv(&result.elution_profile, output_path, Some(&configuration))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ElutionPoint, IntensityNoise};
    use crate::simulation::{SimulationParameters, Simulator};
    use std::fs;
    use tempfile::NamedTempFile;

    fn small_profile() -> ElutionProfile {
        ElutionProfile::new(vec![
            ElutionPoint { time: 0.0, ph: 7.4, intensity: 0.0, binding_strength: 0.996 },
            ElutionPoint { time: 0.4, ph: 7.37, intensity: 12.5, binding_strength: 0.45 },
        ])
    }

    fn render(profile: &ElutionProfile, config: &CsvConfig) -> String {
        let mut buffer = Vec::new();
        write_elution_csv(&mut buffer, profile, config).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    // ── Formatting ──

    #[test]
    fn test_bare_output() {
        let csv = render(&small_profile(), &CsvConfig::bare());
        assert_eq!(
            csv,
            "time,pH,intensity,binding_strength\n\
             0.000,7.400,0.000,0.996\n\
             0.400,7.370,12.500,0.450\n"
        );
    }

    #[test]
    fn test_european_format() {
        let csv = render(&small_profile(), &CsvConfig::european().precision(2));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "time;pH;intensity;binding_strength");
        assert_eq!(lines[2], "0,40;7,37;12,50;0,45");
    }

    #[test]
    fn test_metadata_header() {
        let mut metadata = CsvMetadata {
            strategy: Some("mild".to_string()),
            peak_ph: Some(4.35),
            ..Default::default()
        };
        metadata.add_custom("Operator", "QA");

        let csv = render(&small_profile(), &CsvConfig::default().with_metadata(metadata));
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "# Protein A Elution Simulation");
        assert!(lines[1].starts_with("# Generated: "));
        assert!(csv.contains("# Strategy: mild\n"));
        assert!(csv.contains("# Peak pH: 4.35\n"));
        assert!(csv.contains("# Operator: QA\n"));
        assert!(!csv.contains("# Target"));
        assert!(csv.contains("#\ntime,pH,intensity,binding_strength\n"));
    }

    // ── Validation ──

    #[test]
    fn test_empty_profile_is_rejected() {
        let mut buffer = Vec::new();
        let err = write_elution_csv(&mut buffer, &ElutionProfile::default(), &CsvConfig::default())
            .unwrap_err();
        assert!(matches!(err, ElutionError::Export(_)));
    }

    #[test]
    fn test_ambiguous_separators_are_rejected() {
        let config = CsvConfig::european().delimiter(',');
        let mut buffer = Vec::new();
        assert!(write_elution_csv(&mut buffer, &small_profile(), &config).is_err());
    }

    // ── Files ──

    #[test]
    fn test_export_full_result() {
        let result = Simulator::new()
            .with_noise(IntensityNoise::none())
            .run("HHHHHHHHHH", &SimulationParameters::default())
            .unwrap();

        let file = NamedTempFile::new().unwrap();
        export_result_csv(&result, file.path(), &CsvConfig::default()).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("# Strategy: traditional"));
        assert!(content.contains("# Ligand: wild_type (monomeric)"));
        assert!(content.contains("# Target: human_igg1"));
        assert!(content.contains("# Peak pH: "));

        let rows = content.lines().filter(|l| !l.starts_with('#')).count();
        assert_eq!(rows, 1 + result.elution_profile.len());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let err = export_elution_csv(&small_profile(), "/nonexistent/dir/out.csv", None).unwrap_err();
        assert!(matches!(err, ElutionError::Io(_)));
    }
}
