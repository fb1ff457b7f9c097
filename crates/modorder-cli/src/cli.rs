//! CLI argument definitions for modorder.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use modorder_core::config::FailOn;

#[derive(Parser, Debug)]
#[command(
    name = "modorder",
    version,
    about = "Compute and check mod load orders",
    long_about = "modorder computes a deterministic, dependency-respecting load order for a set \
                  of mods and checks an existing order for misplaced entries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a load order from the declared dependencies
    Resolve {
        /// Mods file (default: search upward for mods.json)
        #[arg(long)]
        mods: Option<PathBuf>,
        /// Order file (default: order.json next to the mods file)
        #[arg(long)]
        order: Option<PathBuf>,
        /// Write the resolved order to the order file
        #[arg(long)]
        write: bool,
        /// Ignore the existing order file when breaking ties
        #[arg(long)]
        ignore_order: bool,
    },

    /// Check the current load order for misplaced mods
    Check {
        /// Mods file (default: search upward for mods.json)
        #[arg(long)]
        mods: Option<PathBuf>,
        /// Order file (default: order.json next to the mods file)
        #[arg(long)]
        order: Option<PathBuf>,
        /// Findings that make the check fail: hard, soft, never
        #[arg(long)]
        fail_on: Option<FailOn>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
