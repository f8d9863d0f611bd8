use clap::{Command, arg};

use crate::common::with_input_args;

pub const SMOOTH_CMD: &str = "smooth";
pub const SMOOTHED_SUFFIX: &str = "smoothed.bedgraph";

pub fn create_smooth_cli() -> Command {
    let cmd = Command::new(SMOOTH_CMD)
        .about("Write the rolling mean coverage of each scaffold as a bedGraph file.");

    with_input_args(cmd).arg(
        arg!(-o --output <FILE>)
            .required(false)
            .help("Output bedGraph, gzipped when it ends with .gz (default: <input>.smoothed.bedgraph)"),
    )
}
