use clap::Parser;
use log::LevelFilter;

use co2_calc::cli::{Cli, Commands};
use co2_calc::commands::{run_calc, run_compare, run_init, run_session};

const fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    // RUST_LOG, when set, takes precedence over the flags
    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Calc(args) => run_calc(args, &cli),
        Commands::Compare(args) => run_compare(args, &cli),
        Commands::Session(args) => run_session(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
