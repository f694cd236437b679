//! Core library entry for the `barsheet` CLI.
//!
//! `barsheet` allocates unique 9-digit barcode ids, keeps them in a local
//! history, and lays selected ids out on a 20-slot A4 print sheet.

pub mod adapters;
pub mod allocator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod model;
pub mod ports;
pub mod session;
pub mod store;

pub use error::{AllocationFailure, SessionError};
pub use model::{BarcodeFormat, Entry, QueueSlotItem};
pub use session::Session;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}
