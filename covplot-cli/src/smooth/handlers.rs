use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use covplot_core::utils::{STDIN_PATH, remove_all_extensions};
use covplot_io::write_profiles;
use covplot_rolling::CoverageProfile;

use super::cli::SMOOTHED_SUFFIX;
use crate::common::{BEDGRAPH_ARG, get_window, load_bedgraph, requested_scaffolds, select_tracks};

/// `<input stem>.smoothed.bedgraph` in the working directory, `stdin` standing in for `-`.
fn default_output(input: &str) -> PathBuf {
    let stem = if input == STDIN_PATH {
        "stdin".to_string()
    } else {
        remove_all_extensions(Path::new(input))
    };
    PathBuf::from(format!("{}.{}", stem, SMOOTHED_SUFFIX))
}

pub fn run_smooth(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>(BEDGRAPH_ARG)
        .expect("A path to a bedgraph file is required.");
    let output = match matches.get_one::<String>("output") {
        Some(path) => PathBuf::from(path),
        None => default_output(input),
    };

    let window = get_window(matches)?;
    let requested = requested_scaffolds(matches)?;

    let bedgraph = load_bedgraph(matches)?;
    let tracks = select_tracks(&bedgraph, &requested);

    let profiles: Vec<CoverageProfile> = tracks
        .iter()
        .map(|track| {
            info!("Processing scaffold {}...", track.chr);
            CoverageProfile::from_track(track, &window)
        })
        .collect();

    write_profiles(&profiles, &output)
        .with_context(|| format!("Failed to write smoothed bedGraph: {}", output.display()))?;
    info!("Smoothed coverage written to {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output("data/sample.bedgraph.gz"),
            PathBuf::from("sample.smoothed.bedgraph")
        );
        assert_eq!(default_output("-"), PathBuf::from("stdin.smoothed.bedgraph"));
    }
}
