use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use covplot_rolling::{CoverageProfile, ProfileSummary};

use crate::common::{get_window, load_bedgraph, requested_scaffolds, select_tracks};

pub fn run_stats(matches: &ArgMatches) -> Result<()> {
    let output_path = matches.get_one::<String>("output");

    let window = get_window(matches)?;
    let requested = requested_scaffolds(matches)?;

    let bedgraph = load_bedgraph(matches)?;
    let tracks = select_tracks(&bedgraph, &requested);

    let summaries: Vec<ProfileSummary> = tracks
        .iter()
        .map(|track| CoverageProfile::from_track(track, &window).summary())
        .collect();

    let json = serde_json::to_string_pretty(&summaries)
        .context("Failed to serialize summaries to JSON")?;

    match output_path {
        Some(p) => {
            if let Some(parent) = Path::new(p).parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create output directory for {}", p))?;
            }
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            info!("Output written to {}", p);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
