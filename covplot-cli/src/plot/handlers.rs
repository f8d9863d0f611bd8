use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use covplot_render::{OutputFormat, PlotConfig, render_profile};
use covplot_rolling::CoverageProfile;

use crate::common::{get_window, load_bedgraph, requested_scaffolds, select_tracks};

///
/// Style from `--config` (or defaults) with the individual flags applied on top.
///
pub fn get_plot_config(matches: &ArgMatches) -> Result<PlotConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => PlotConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load plot config: {}", path))?,
        None => PlotConfig::default(),
    };

    if let Some(y_max) = matches.get_one::<f64>("y-max") {
        config.y_max = *y_max;
    }
    if let Some(step) = matches.get_one::<u64>("x-tick-step") {
        config.x_tick_step = *step;
    }
    if let Some(max_points) = matches.get_one::<usize>("max-points") {
        config.max_points = *max_points;
    }
    if let Some(format) = matches.get_one::<OutputFormat>("format") {
        config.format = *format;
    }

    config.validate().context("Invalid plot settings")?;
    Ok(config)
}

pub fn run_plot(matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .expect("An output directory is required.");
    let threads = matches.get_one::<usize>("threads").copied().unwrap_or(1);
    let quiet = matches.get_flag("quiet");

    let config = get_plot_config(matches)?;
    let window = get_window(matches)?;
    let requested = requested_scaffolds(matches)?;

    let bedgraph = load_bedgraph(matches)?;
    let tracks = select_tracks(&bedgraph, &requested);

    let out_dir = Path::new(output);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", output))?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(tracks.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} scaffolds ({eta}) {msg}")?
            .progress_chars("##-"),
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build the worker pool")?;

    let written: Vec<PathBuf> = pool.install(|| {
        tracks
            .par_iter()
            .map(|track| {
                info!("Processing scaffold {}...", track.chr);
                let profile = CoverageProfile::from_track(track, &window);
                let path = render_profile(&profile, &config, out_dir)
                    .with_context(|| format!("Failed to plot scaffold {}", track.chr))?;

                pb.set_message(track.chr.clone());
                pb.inc(1);
                Ok(path)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    pb.finish_and_clear();
    info!("Wrote {} figures to {}", written.len(), out_dir.display());

    Ok(())
}
