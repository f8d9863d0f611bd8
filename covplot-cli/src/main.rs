mod common;
mod plot;
mod smooth;
mod stats;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "covplot";
    pub const BIN_NAME: &str = "covplot";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Smoothed per-scaffold coverage plots from bedgraph files.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("More log output (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("verbose")
                .help("Only log warnings and errors, hide progress bars"),
        )
        .subcommand(plot::cli::create_plot_cli())
        .subcommand(smooth::cli::create_smooth_cli())
        .subcommand(stats::cli::create_stats_cli())
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("quiet") {
        "warn"
    } else {
        match matches.get_count("verbose") {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);
    log::debug!("{} {}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // PLOT
        //
        Some((plot::cli::PLOT_CMD, matches)) => {
            plot::handlers::run_plot(matches)?;
        }

        //
        // SMOOTH
        //
        Some((smooth::cli::SMOOTH_CMD, matches)) => {
            smooth::handlers::run_smooth(matches)?;
        }

        //
        // STATS
        //
        Some((stats::cli::STATS_CMD, matches)) => {
            stats::handlers::run_stats(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
