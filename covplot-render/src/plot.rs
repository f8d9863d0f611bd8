use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use covplot_rolling::{CoverageProfile, ProfilePoint};

use crate::config::{OutputFormat, PlotConfig, pt_to_px};
use crate::downsample::downsample_segments;
use crate::errors::{RenderError, Result};
use crate::format::{
    format_coverage_tick, format_position_tick, nice_ticks, padded_range, smoothed_label,
    tick_positions, title,
};

/// Share of the data width left empty on each side of the position axis.
const X_MARGIN: f64 = 0.05;
const DASH_PX: u32 = 4;
const GAP_PX: u32 = 3;
const LEGEND_SWATCH_PX: i32 = 20;

/// File name of a scaffold's figure, `<scaffold>_coverage.<ext>`.
pub fn figure_file_name(chr: &str, format: OutputFormat) -> String {
    let safe: String = chr
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}_coverage.{}", safe, format.extension())
}

///
/// Draw one scaffold and save it to `<out_dir>/<scaffold>_coverage.<ext>`.
///
/// # Arguments
/// - profile: the smoothed scaffold
/// - config: figure style
/// - out_dir: directory for the figure, created when missing
///
/// # Returns
/// The path of the written file.
pub fn render_profile(profile: &CoverageProfile, config: &PlotConfig, out_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|source| RenderError::OutputDirectory {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(figure_file_name(&profile.chr, config.format));
    let size = (config.width_px, config.height_px);

    match config.format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            draw_profile(&root, profile, config)?;
            root.present()?;
        }
        OutputFormat::Png => {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            draw_profile(&root, profile, config)?;
            root.present()?;
        }
    }

    info!("Saved {}", path.display());
    Ok(path)
}

///
/// Render a scaffold to an SVG document held in memory.
///
pub fn render_svg_string(profile: &CoverageProfile, config: &PlotConfig) -> Result<String> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (config.width_px, config.height_px))
            .into_drawing_area();
        draw_profile(&root, profile, config)?;
        root.present()?;
    }
    Ok(buffer)
}

/// Position axis bounds: the padded span of the drawn (defined) positions, falling
/// back to every row mid-point when nothing is defined.
fn x_bounds(profile: &CoverageProfile) -> (f64, f64) {
    let defined = span(profile.defined_points().map(|(_, p)| p.x));
    match defined.or_else(|| span(profile.x.iter().copied())) {
        Some((lo, hi)) => padded_range(lo, hi, X_MARGIN),
        None => (0.0, 1.0),
    }
}

fn span(xs: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    xs.fold(None, |acc: Option<(f64, f64)>, x| match acc {
        Some((lo, hi)) => Some((f64::min(lo, x), f64::max(hi, x))),
        None => Some((x, x)),
    })
}

/// Height of the average line, `None` when it falls outside the coverage axis.
fn average_level(mean: f64, y_max: f64) -> Option<f64> {
    (0.0..=y_max).contains(&mean).then_some(mean)
}

fn clamp_y(y: f64, y_max: f64) -> f64 {
    y.clamp(0.0, y_max)
}

///
/// Draw the full figure on any plotters backend: title, dashed grid, min-max
/// envelope, smoothed line, dashed average line and legend.
///
pub fn draw_profile<DB>(
    root: &DrawingArea<DB, Shift>,
    profile: &CoverageProfile,
    config: &PlotConfig,
) -> Result<()>
where
    DB: DrawingBackend,
{
    config.validate()?;

    let line_rgb = config.line_rgb()?;
    let average_rgb = config.average_rgb()?;
    let grid_rgb = config.grid_rgb()?;
    let legend_rgb = config.legend_rgb()?;

    let font = config.font_family.as_str();
    let title_px = pt_to_px(config.title_font_size_pt);
    let label_px = pt_to_px(config.label_font_size_pt);
    let tick_px = pt_to_px(config.tick_font_size_pt);

    let (x_lo, x_hi) = x_bounds(profile);
    let y_max = config.y_max;
    let x_ticks = tick_positions(x_lo, x_hi, config.x_tick_step as f64);
    let y_ticks = nice_ticks(y_max, 5);

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(title(&profile.chr), (font, title_px))
        .margin(10)
        .x_label_area_size(pt_to_px(config.label_font_size_pt + config.tick_font_size_pt) as u32 + 20)
        .y_label_area_size(pt_to_px(config.label_font_size_pt + config.tick_font_size_pt) as u32 + 30)
        .build_cartesian_2d(
            (x_lo..x_hi).with_key_points(x_ticks.clone()),
            (0f64..y_max).with_key_points(y_ticks.clone()),
        )?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Position (bp)")
        .y_desc("Coverage")
        .axis_desc_style((font, label_px))
        .label_style((font, tick_px))
        .x_label_formatter(&|x| format_position_tick(*x))
        .y_label_formatter(&|y| format_coverage_tick(*y))
        .draw()?;

    // grid goes first so the data is drawn over it
    let grid_style = grid_rgb.stroke_width(1);
    for &x in &x_ticks {
        chart.draw_series(DashedLineSeries::new(
            vec![(x, 0.0), (x, y_max)],
            DASH_PX,
            GAP_PX,
            grid_style,
        ))?;
    }
    for &y in &y_ticks {
        chart.draw_series(DashedLineSeries::new(
            vec![(x_lo, y), (x_hi, y)],
            DASH_PX,
            GAP_PX,
            grid_style,
        ))?;
    }

    let segments = downsample_segments(&profile.segments(), config.max_points);
    debug!(
        "Drawing {} in {} segments ({} points)",
        profile.chr,
        segments.len(),
        segments.iter().map(|s| s.len()).sum::<usize>()
    );

    let fill_style = line_rgb.mix(config.fill_alpha).filled();
    chart
        .draw_series(
            segments
                .iter()
                .map(|segment| Polygon::new(envelope_outline(segment, y_max), fill_style)),
        )?
        .label("Coverage spread (min-max)")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + LEGEND_SWATCH_PX, y + 5)], fill_style)
        });

    let line_style = line_rgb
        .mix(config.line_alpha)
        .stroke_width(config.line_width_px());
    chart
        .draw_series(segments.iter().map(|segment| {
            PathElement::new(
                segment
                    .iter()
                    .map(|p| (p.x, clamp_y(p.smoothed, y_max)))
                    .collect::<Vec<_>>(),
                line_style,
            )
        }))?
        .label(smoothed_label(profile.window))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_SWATCH_PX, y)], line_style));

    if let Some(mean) = profile.mean_coverage {
        let average_style = average_rgb.stroke_width(1);
        // off-axis averages keep their legend entry but draw nothing
        let series = match average_level(mean, y_max) {
            Some(level) => chart.draw_series(DashedLineSeries::new(
                vec![(x_lo, level), (x_hi, level)],
                DASH_PX + 2,
                GAP_PX,
                average_style,
            ))?,
            None => chart.draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?,
        };
        series
            .label("Average coverage")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + LEGEND_SWATCH_PX, y)], average_style)
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&legend_rgb)
        .border_style(&TRANSPARENT)
        .label_font((font, tick_px))
        .draw()?;

    Ok(())
}

/// Closed outline of the min-max band: along the maxima, then back along the minima.
fn envelope_outline(segment: &[ProfilePoint], y_max: f64) -> Vec<(f64, f64)> {
    segment
        .iter()
        .map(|p| (p.x, clamp_y(p.max, y_max)))
        .chain(segment.iter().rev().map(|p| (p.x, clamp_y(p.min, y_max))))
        .collect()
}
