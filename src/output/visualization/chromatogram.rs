//! Elution chromatogram plots
//!
//! Three series share one axis: the absorbance trace, the pH program and the
//! residual binding strength. pH and binding are rescaled onto the
//! absorbance range so the release point lines up visually with the peak:
//!
//! ```text
//! pH series      = pH · (I_max / 8)
//! binding series = binding_strength · I_max
//! ```
//!
//! where `I_max` is the highest absorbance of the run.
//!
//! # Available functions
//!
//! - [`plot_result`]               Chromatogram of a full run, titled with its peak
//! - [`plot_elution_profile`]      Chromatogram of a bare profile
//! - [`plot_elution_comparison`]   Overlay the absorbance of several runs
//!
//! # Usage
//!
//! ```rust,ignore
//! use elution_rs::output::visualization::plot_result;
//!
//! let result = simulator.run(sequence, &parameters)?;
//! plot_result(&result, "elution.png", None)?;   // .svg for vector output
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use crate::analysis::PeakInfo;
use crate::error::{ElutionError, Result};
use crate::models::ElutionProfile;
use crate::simulation::SimulationResult;

/// pH values are divided by this before scaling onto the absorbance axis
pub const PH_SCALE_DIVISOR: f64 = 8.0;

// =================================================================================================
// Series
// =================================================================================================

/// The three plotted curves as `(time, value)` pairs
#[derive(Debug, Clone, PartialEq)]
pub struct ChromatogramSeries {
    pub intensity: Vec<(f64, f64)>,
    pub ph: Vec<(f64, f64)>,
    pub binding: Vec<(f64, f64)>,
    /// Highest absorbance, the scale of the two secondary curves
    pub scale: f64,
}

impl ChromatogramSeries {
    pub fn from_profile(profile: &ElutionProfile) -> Self {
        let scale = profile.max_intensity();

        Self {
            intensity: profile.iter().map(|p| (p.time, p.intensity)).collect(),
            ph: profile
                .iter()
                .map(|p| (p.time, p.ph * (scale / PH_SCALE_DIVISOR)))
                .collect(),
            binding: profile
                .iter()
                .map(|p| (p.time, p.binding_strength * scale))
                .collect(),
            scale,
        }
    }

    /// Largest value over all three curves, at least 1
    pub fn y_max(&self) -> f64 {
        self.intensity
            .iter()
            .chain(&self.ph)
            .chain(&self.binding)
            .map(|(_, y)| *y)
            .fold(1.0, f64::max)
    }

    pub fn t_max(&self) -> f64 {
        self.intensity.last().map_or(1.0, |&(t, _)| t.max(1e-10))
    }
}

/// Title naming the peak, e.g. `Predicted Chromatogram - Peak at pH 4.35 (37.2 min)`
pub fn chromatogram_title(peak: &PeakInfo) -> String {
    format!(
        "Predicted Chromatogram - Peak at pH {} ({} min)",
        peak.ph, peak.time
    )
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the chromatogram of a full run
///
/// With `config = None` the title names the peak pH and time.
///
/// # Errors
///
/// Returns [`ElutionError::Export`] if the profile is empty or the backend
/// cannot write to `output_path`.
pub fn plot_result(
    result: &SimulationResult,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let titled = PlotConfig::chromatogram(chromatogram_title(&result.peak));
    plot_elution_profile(&result.elution_profile, output_path, Some(config.unwrap_or(&titled)))
}

/// Plot the three chromatogram series of a profile
///
/// # Arguments
///
/// * `profile`     - Elution profile to draw
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses defaults
pub fn plot_elution_profile(
    profile: &ElutionProfile,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    if profile.is_empty() {
        return Err(ElutionError::Export("Empty elution profile".to_string()));
    }

    let default_config = PlotConfig::chromatogram(NO_TITLE);
    let config = config.unwrap_or(&default_config);
    let series = ChromatogramSeries::from_profile(profile);
    let path = output_path.as_ref();

    let rendered = if is_svg(path) {
        let backend = SVGBackend::new(path, (config.width, config.height));
        plot_chromatogram_impl(backend, &series, config)
    } else {
        let backend = BitMapBackend::new(path, (config.width, config.height));
        plot_chromatogram_impl(backend, &series, config)
    };

    rendered.map_err(|e| ElutionError::Export(format!("{}: {}", path.display(), e)))?;
    log::info!("chromatogram written to {}", path.display());
    Ok(())
}

/// Overlay the absorbance curves of several labelled runs
///
/// # Example
///
/// ```rust,ignore
/// let datasets = vec![
///     ("traditional", &traditional.elution_profile),
///     ("mild",        &mild.elution_profile),
/// ];
/// plot_elution_comparison(&datasets, "strategies.png", None)?;
/// ```
pub fn plot_elution_comparison(
    datasets: &[(&str, &ElutionProfile)],
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    if datasets.is_empty() {
        return Err(ElutionError::Export("No datasets provided".to_string()));
    }

    let default_config = PlotConfig::comparison(NO_TITLE);
    let config = config.unwrap_or(&default_config);
    let path = output_path.as_ref();

    let curves: Vec<(&str, Vec<(f64, f64)>)> = datasets
        .iter()
        .map(|(label, profile)| {
            let points = profile.iter().map(|p| (p.time, p.intensity)).collect();
            (*label, points)
        })
        .collect();

    let max_time = curves
        .iter()
        .filter_map(|(_, points)| points.last().map(|(t, _)| *t))
        .fold(1e-10, f64::max);
    let max_intensity = curves
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, y)| *y))
        .fold(1.0, f64::max);

    let rendered = if is_svg(path) {
        let backend = SVGBackend::new(path, (config.width, config.height));
        plot_comparison_impl(backend, &curves, config, max_time, max_intensity)
    } else {
        let backend = BitMapBackend::new(path, (config.width, config.height));
        plot_comparison_impl(backend, &curves, config, max_time, max_intensity)
    };

    rendered.map_err(|e| ElutionError::Export(format!("{}: {}", path.display(), e)))
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

fn plot_chromatogram_impl<DB: DrawingBackend>(
    backend: DB,
    series: &ChromatogramSeries,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..series.t_max(), 0.0..(series.y_max() * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;
    }

    let curves = [
        ("Antibody Elution (A280 nm)", &series.intensity, config.intensity_color, config.line_width),
        ("pH Gradient", &series.ph, config.ph_color, 2),
        ("Binding Strength", &series.binding, config.binding_color, 2),
    ];

    for (label, points, color, width) in curves {
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(width),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    curves: &[(&str, Vec<(f64, f64)>)],
    config: &PlotConfig,
    max_time: f64,
    max_intensity: f64,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_time, 0.0..(max_intensity * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;
    }

    for (index, (label, points)) in curves.iter().enumerate() {
        let color = config.get_series_color(index);

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
