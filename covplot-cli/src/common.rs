//! Argument handling shared by every subcommand.
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::{info, warn};

use covplot_core::models::{BedGraph, CoverageTrack};
use covplot_core::utils::read_scaffold_list;
use covplot_rolling::{DEFAULT_WINDOW_SIZE, RollingWindow};

pub const BEDGRAPH_ARG: &str = "bedgraph";
pub const SCAFFOLD_ARG: &str = "scaffold";
pub const SCAFFOLDS_FILE_ARG: &str = "scaffolds-file";
pub const WINDOW_ARG: &str = "window";

/// Input, scaffold selection and window arguments.
pub fn with_input_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(BEDGRAPH_ARG)
            .required(true)
            .help("Path to a bedgraph file (chrom, start, end, coverage). Gzip is detected from .gz, - reads stdin"),
    )
    .arg(
        Arg::new(SCAFFOLD_ARG)
            .short('s')
            .long("scaffold")
            .action(ArgAction::Append)
            .help("Scaffold to process, can be repeated (default: every scaffold in the file)"),
    )
    .arg(
        Arg::new(SCAFFOLDS_FILE_ARG)
            .long("scaffolds-file")
            .help("File with one scaffold name per line, added to --scaffold"),
    )
    .arg(
        Arg::new(WINDOW_ARG)
            .short('w')
            .long("window")
            .value_parser(value_parser!(usize))
            .help("Rolling window size in rows [default: 100000]"),
    )
}

pub fn get_window(matches: &ArgMatches) -> Result<RollingWindow> {
    let size = matches
        .get_one::<usize>(WINDOW_ARG)
        .copied()
        .unwrap_or(DEFAULT_WINDOW_SIZE);
    RollingWindow::new(size).context("--window must be at least 1")
}

pub fn load_bedgraph(matches: &ArgMatches) -> Result<BedGraph> {
    let path = matches
        .get_one::<String>(BEDGRAPH_ARG)
        .expect("A path to a bedgraph file is required.");

    info!("Loading bedgraph {}...", path);
    let bedgraph = BedGraph::try_from(path.as_str())
        .with_context(|| format!("Failed to load bedgraph: {}", path))?;
    info!("{}", bedgraph);

    Ok(bedgraph)
}

/// Scaffold names given on the command line and in `--scaffolds-file`, in that order.
pub fn requested_scaffolds(matches: &ArgMatches) -> Result<Vec<String>> {
    let mut names: Vec<String> = matches
        .get_many::<String>(SCAFFOLD_ARG)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if let Some(file) = matches.get_one::<String>(SCAFFOLDS_FILE_ARG) {
        let listed = read_scaffold_list(Path::new(file))
            .with_context(|| format!("Failed to read scaffold list: {}", file))?;
        names.extend(listed);
    }

    Ok(names)
}

///
/// Pick the tracks to process. Without any requested names every scaffold is used,
/// in file order. Otherwise names are taken once each, in request order. A scaffold
/// absent from the file is reported and stands in as an empty track, so it still
/// gets its (empty) output.
///
pub fn select_tracks<'a>(bedgraph: &'a BedGraph, requested: &[String]) -> Vec<Cow<'a, CoverageTrack>> {
    if requested.is_empty() {
        return bedgraph.tracks.iter().map(Cow::Borrowed).collect();
    }

    let mut seen: HashSet<&String> = HashSet::new();
    requested
        .iter()
        .filter(|name| seen.insert(*name))
        .map(|name| match bedgraph.track(name) {
            Some(track) => Cow::Borrowed(track),
            None => {
                warn!("Scaffold {} not found in the bedgraph, its output will be empty", name);
                Cow::Owned(CoverageTrack::new(name))
            }
        })
        .collect()
}
