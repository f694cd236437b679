//! Binary entrypoint for the `barsheet` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    barsheet::logging::init();
    match barsheet::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
