use clap::{Command, arg};

use crate::common::with_input_args;

pub const STATS_CMD: &str = "stats";

pub fn create_stats_cli() -> Command {
    let cmd = Command::new(STATS_CMD)
        .about("Summarize coverage and smoothed coverage for each scaffold as JSON.");

    with_input_args(cmd).arg(
        arg!(-o --output <OUTPUT>)
            .required(false)
            .help("Output JSON path (default: stdout)"),
    )
}
