use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::errors::{RenderError, Result};

/// Fixed upper limit of the coverage axis.
pub const DEFAULT_Y_MAX: f64 = 500.0;
/// Distance between labelled position ticks, in bp.
pub const DEFAULT_X_TICK_STEP: u64 = 5_000_000;
/// Pixels per inch used to turn figure inches and font points into pixels.
pub const PX_PER_INCH: f64 = 100.0;
/// Most points drawn per line before neighbouring rows are merged.
pub const DEFAULT_MAX_POINTS: usize = 20_000;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

///
/// Figure style. Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// y_max = 200.0
/// line_color = "#d62728"
/// format = "png"
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub width_px: u32,
    pub height_px: u32,
    pub y_max: f64,
    pub x_tick_step: u64,
    pub line_color: String,
    pub line_alpha: f64,
    pub line_width_pt: f64,
    pub fill_alpha: f64,
    pub average_color: String,
    pub grid_color: String,
    pub legend_background: String,
    pub title_font_size_pt: f64,
    pub label_font_size_pt: f64,
    pub tick_font_size_pt: f64,
    pub font_family: String,
    pub max_points: usize,
    pub format: OutputFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            width_px: (10.0 * PX_PER_INCH) as u32,
            height_px: (5.0 * PX_PER_INCH) as u32,
            y_max: DEFAULT_Y_MAX,
            x_tick_step: DEFAULT_X_TICK_STEP,
            line_color: "#0000ff".to_string(),
            line_alpha: 0.6,
            line_width_pt: 1.5,
            fill_alpha: 0.2,
            average_color: "#808080".to_string(),
            grid_color: "#d3d3d3".to_string(),
            legend_background: "#f2f2f2".to_string(),
            title_font_size_pt: 16.0,
            label_font_size_pt: 14.0,
            tick_font_size_pt: 10.0,
            font_family: "sans-serif".to_string(),
            max_points: DEFAULT_MAX_POINTS,
            format: OutputFormat::Svg,
        }
    }
}

impl TryFrom<&Path> for PlotConfig {
    type Error = RenderError;

    ///
    /// Load a style from a TOML file and validate it.
    ///
    /// # Arguments
    /// - path: path to the `.toml` file
    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)?;
        let config: PlotConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

impl PlotConfig {
    /// Check colors parse and numeric settings are usable.
    pub fn validate(&self) -> Result<()> {
        for color in [
            &self.line_color,
            &self.average_color,
            &self.grid_color,
            &self.legend_background,
        ] {
            parse_hex_color(color)?;
        }

        let invalid = |name: &'static str, reason: &str| {
            Err(RenderError::InvalidSetting {
                name,
                reason: reason.to_string(),
            })
        };

        if self.width_px == 0 || self.height_px == 0 {
            return invalid("width_px/height_px", "figure size must be positive");
        }
        if !(self.y_max.is_finite() && self.y_max > 0.0) {
            return invalid("y_max", "must be a positive number");
        }
        if self.x_tick_step == 0 {
            return invalid("x_tick_step", "must be at least 1");
        }
        for (name, alpha) in [("line_alpha", self.line_alpha), ("fill_alpha", self.fill_alpha)] {
            if !(0.0..=1.0).contains(&alpha) {
                return invalid(name, "must be between 0 and 1");
            }
        }
        if self.line_width_pt <= 0.0 {
            return invalid("line_width_pt", "must be positive");
        }

        Ok(())
    }

    pub fn line_rgb(&self) -> Result<RGBColor> {
        parse_hex_color(&self.line_color)
    }

    pub fn average_rgb(&self) -> Result<RGBColor> {
        parse_hex_color(&self.average_color)
    }

    pub fn grid_rgb(&self) -> Result<RGBColor> {
        parse_hex_color(&self.grid_color)
    }

    pub fn legend_rgb(&self) -> Result<RGBColor> {
        parse_hex_color(&self.legend_background)
    }

    pub fn line_width_px(&self) -> u32 {
        pt_to_px(self.line_width_pt).round().max(1.0) as u32
    }
}

/// Convert typographic points to pixels at [PX_PER_INCH].
pub fn pt_to_px(pt: f64) -> f64 {
    pt * PX_PER_INCH / 72.0
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(value: &str) -> Result<RGBColor> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RenderError::InvalidColor(value.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| RenderError::InvalidColor(value.to_string()))
    };

    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_default_matches_reference_figure() {
        let config = PlotConfig::default();
        assert_eq!((config.width_px, config.height_px), (1000, 500));
        assert_eq!(config.y_max, 500.0);
        assert_eq!(config.x_tick_step, 5_000_000);
        assert_eq!(config.format, OutputFormat::Svg);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case("#0000ff", RGBColor(0, 0, 255))]
    #[case("d3d3d3", RGBColor(211, 211, 211))]
    #[case("#F2f2F2", RGBColor(242, 242, 242))]
    fn test_parse_hex_color(#[case] value: &str, #[case] expected: RGBColor) {
        assert_eq!(parse_hex_color(value).unwrap(), expected);
    }

    #[rstest]
    #[case("blue")]
    #[case("#00f")]
    #[case("#gg0000")]
    fn test_parse_hex_color_rejects(#[case] value: &str) {
        assert!(parse_hex_color(value).is_err());
    }

    #[rstest]
    fn test_partial_toml_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "y_max = 200.0\nformat = \"png\"\n").unwrap();

        let config = PlotConfig::try_from(path.as_path()).unwrap();
        assert_eq!(config.y_max, 200.0);
        assert_eq!(config.format, OutputFormat::Png);
        assert_eq!(config.line_color, "#0000ff");
    }

    #[rstest]
    fn test_unknown_toml_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        std::fs::write(&path, "ymax = 200.0\n").unwrap();

        assert!(matches!(
            PlotConfig::try_from(path.as_path()),
            Err(RenderError::Toml(_))
        ));
    }

    #[rstest]
    fn test_invalid_values_are_rejected() {
        let config = PlotConfig {
            fill_alpha: 1.5,
            ..PlotConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RenderError::InvalidSetting { name: "fill_alpha", .. })
        ));

        let config = PlotConfig {
            line_color: "navy".to_string(),
            ..PlotConfig::default()
        };
        assert!(matches!(config.validate(), Err(RenderError::InvalidColor(_))));
    }

    #[rstest]
    #[case("svg", OutputFormat::Svg)]
    #[case("PNG", OutputFormat::Png)]
    fn test_output_format_from_str(#[case] value: &str, #[case] expected: OutputFormat) {
        assert_eq!(value.parse::<OutputFormat>().unwrap(), expected);
    }

    #[rstest]
    fn test_line_width_in_pixels() {
        assert_eq!(PlotConfig::default().line_width_px(), 2);
    }
}
