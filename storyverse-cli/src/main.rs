//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use storyverse_cli::{CliError, DEFAULT_LOG_FILTER, init_logging, run};

#[expect(clippy::print_stderr, reason = "fatal errors are reported on stderr")]
fn main() -> ExitCode {
    if let Err(err) = init_logging(DEFAULT_LOG_FILTER) {
        eprintln!("storyverse: {err}");
        return ExitCode::FAILURE;
    }
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("storyverse: {err}");
            ExitCode::FAILURE
        }
    }
}
