use urlcanon_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Falls back to stderr on its own; stdout stays reserved for URLs.
    logging::init_logging();

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("urlcanon error: {:#}", err);
        std::process::exit(1);
    }
}
