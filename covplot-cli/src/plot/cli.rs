use clap::{Arg, Command, arg, value_parser};

use covplot_render::OutputFormat;

use crate::common::with_input_args;

pub const PLOT_CMD: &str = "plot";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_THREADS: &str = "1";

pub fn create_plot_cli() -> Command {
    let cmd = Command::new(PLOT_CMD)
        .about("Plot smoothed coverage, its min-max spread and the average for each scaffold.");

    with_input_args(cmd)
        .arg(
            arg!(-o --output <DIR>)
                .required(false)
                .default_value(DEFAULT_OUTPUT_DIR)
                .help("Directory for the <scaffold>_coverage.svg files"),
        )
        .arg(
            arg!(--config <TOML>)
                .required(false)
                .help("TOML file with figure style settings; flags below override it"),
        )
        .arg(
            Arg::new("y-max")
                .long("y-max")
                .value_parser(value_parser!(f64))
                .help("Upper limit of the coverage axis [default: 500]"),
        )
        .arg(
            Arg::new("x-tick-step")
                .long("x-tick-step")
                .value_parser(value_parser!(u64))
                .help("Distance between position ticks in bp [default: 5000000]"),
        )
        .arg(
            Arg::new("max-points")
                .long("max-points")
                .value_parser(value_parser!(usize))
                .help("Merge neighbouring points above this many per figure, 0 keeps all [default: 20000]"),
        )
        .arg(
            arg!(--format <FORMAT>)
                .required(false)
                .value_parser(value_parser!(OutputFormat))
                .help("Figure format: svg or png [default: svg]"),
        )
        .arg(
            arg!(-t --threads <THREADS>)
                .required(false)
                .value_parser(value_parser!(usize))
                .default_value(DEFAULT_THREADS)
                .help("Number of figures drawn in parallel, 0 uses every core"),
        )
}
