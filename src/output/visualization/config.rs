//! Plot configuration shared by the chromatogram plots

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `intensity_color`, `ph_color`, `binding_color`: Colors of the three chromatogram series
/// - `series_colors`: Optional palette for comparison plots (one per run)
/// - `background`: Background color
/// - `line_width`: Thickness of the absorbance curve in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use elution_rs::output::visualization::PlotConfig;
///
/// let mut config = PlotConfig::chromatogram("Engineered ligand, mild elution");
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "Time (minutes)")
    pub xlabel: String,

    /// Y-axis label (default: "Absorbance (mAU) / Binding Strength")
    pub ylabel: String,

    /// Absorbance curve (default: violet)
    pub intensity_color: RGBColor,

    /// Scaled pH curve (default: red)
    pub ph_color: RGBColor,

    /// Scaled binding-strength curve (default: green)
    pub binding_color: RGBColor,

    /// Optional palette for comparison plots
    ///
    /// If None, uses the default palette starting with the absorbance color.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 3)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "Time (minutes)".to_string(),
            ylabel: "Absorbance (mAU) / Binding Strength".to_string(),
            intensity_color: RGBColor(108, 92, 231),
            ph_color: RGBColor(239, 68, 68),
            binding_color: RGBColor(34, 197, 94),
            series_colors: None,
            background: WHITE,
            line_width: 3,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust
/// use elution_rs::output::visualization::{PlotConfig, NO_TITLE};
///
/// let config = PlotConfig::chromatogram(NO_TITLE);
/// assert_eq!(config.title, "Predicted Chromatogram");
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for an elution chromatogram with optional custom title
    ///
    /// The default title is "Predicted Chromatogram"; [`plot_result`](super::plot_result)
    /// replaces it with one naming the peak.
    pub fn chromatogram(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Predicted Chromatogram".to_string()),
            ..Self::default()
        }
    }

    /// Create config for overlaid absorbance curves of several runs
    pub fn comparison(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Elution Comparison".to_string()),
            ylabel: "Absorbance (mAU)".to_string(),
            line_width: 2,
            ..Self::default()
        }
    }

    /// Create config with a custom comparison palette
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        Self {
            series_colors: Some(colors),
            ..Self::comparison(NO_TITLE)
        }
    }

    /// Get color for the comparison series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors {
            if let Some(color) = colors.get(index) {
                return *color;
            }
        }

        let default_colors = [
            self.intensity_color,
            self.ph_color,
            self.binding_color,
            RGBColor(245, 158, 11),  // Amber
            RGBColor(14, 165, 233),  // Sky
            MAGENTA,
            BLACK,
        ];

        default_colors[index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_chromatogram_config_default() {
        let config = PlotConfig::chromatogram(NO_TITLE);
        assert_eq!(config.xlabel, "Time (minutes)");
        assert_eq!(config.ylabel, "Absorbance (mAU) / Binding Strength");
        assert_eq!(config.title, "Predicted Chromatogram");
    }

    #[test]
    fn test_chromatogram_config_with_string() {
        let title = format!("Strategy: {}", "mild");
        let config = PlotConfig::chromatogram(title);
        assert_eq!(config.title, "Strategy: mild");
    }

    #[test]
    fn test_comparison_config() {
        let config = PlotConfig::comparison("Strategies");
        assert_eq!(config.title, "Strategies");
        assert_eq!(config.ylabel, "Absorbance (mAU)");
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), config.intensity_color);
        assert_eq!(config.get_series_color(1), config.ph_color);
        assert_eq!(config.get_series_color(7), config.intensity_color); // Wraparound
    }

    #[test]
    fn test_series_color_custom() {
        let config = PlotConfig::series_colors(vec![RED, BLUE]);
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), BLUE);
        // Beyond the custom palette: default palette
        assert_eq!(config.get_series_color(2), config.binding_color);
    }
}
