//! Command dispatch and handler modules.

mod check;
mod resolve;

use miette::Result;
use modorder_core::config::GlobalConfig;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = GlobalConfig::load()?;
    match cli.command {
        Command::Resolve {
            mods,
            order,
            write,
            ignore_order,
        } => resolve::exec(mods, order, write, ignore_order, &config),
        Command::Check {
            mods,
            order,
            fail_on,
        } => check::exec(mods, order, fail_on, &config),
    }
}
