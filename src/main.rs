mod cli;

use clap::Parser;
use log::error;
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main
-------------------------------------------------------------------------------------------------*/

// Exit status when a candidate address is already in use
const EXIT_DUPLICATE: u8 = 1;

// Exit status when the check could not be run
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    if let Err(error) = stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
    {
        eprintln!("Unable to initialize logging: {error}");
    }

    match cli::run(&args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(EXIT_DUPLICATE),
        Err(error) => {
            error!("{}", error);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
