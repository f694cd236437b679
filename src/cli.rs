//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `barsheet`.
#[derive(Debug, Parser)]
#[command(name = "barsheet", version, about = "Generate barcode ids and lay out print sheets")]
pub struct Cli {
    /// Store directory (overrides `BARSHEET_STORE`).
    #[arg(long, global = true, value_name = "DIR")]
    pub store: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Allocate a new unique 9-digit barcode.
    Generate {
        /// Optional label printed under the barcode.
        label: Option<String>,
    },
    /// List generated barcodes, most recent first.
    History,
    /// Show one barcode (defaults to the most recent).
    Show {
        /// Barcode id.
        id: Option<String>,
    },
    /// Delete a barcode and remove it from the print sheet.
    Delete {
        /// Barcode id.
        id: String,
    },
    /// Delete every barcode and empty the print sheet.
    ClearHistory,
    /// Manage the 20-slot print sheet.
    Queue {
        /// Queue action.
        #[command(subcommand)]
        action: QueueCommand,
    },
    /// Preview the print sheet layout.
    Sheet,
    /// Print a barcode, or the whole sheet, as JSON.
    Export {
        /// Barcode id (defaults to the most recent).
        id: Option<String>,
        /// Export the print sheet instead of a single barcode.
        #[arg(long, conflicts_with = "id")]
        queue: bool,
    },
}

/// Print-sheet subcommands.
#[derive(Debug, Subcommand)]
pub enum QueueCommand {
    /// Place a barcode on the sheet (defaults to the most recent).
    Add {
        /// Barcode id.
        id: Option<String>,
        /// Number of copies to place.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=20))]
        copies: u32,
    },
    /// Remove one placement by its print id.
    Remove {
        /// Print id shown by `queue list`.
        print_id: String,
    },
    /// Remove every placement.
    Clear,
    /// List placements in sheet order.
    List,
}
