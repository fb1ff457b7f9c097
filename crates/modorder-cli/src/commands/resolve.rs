//! Handler for `modorder resolve`.

use std::path::PathBuf;

use miette::Result;
use modorder_core::config::GlobalConfig;
use modorder_ops::ops_resolve::{self, ResolveOptions};
use modorder_util::errors::ModorderError;

pub fn exec(
    mods: Option<PathBuf>,
    order: Option<PathBuf>,
    write: bool,
    ignore_order: bool,
    config: &GlobalConfig,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ModorderError::Io)?;
    let opts = ResolveOptions {
        mods_file: mods,
        order_file: order,
        write,
        ignore_order,
    };
    ops_resolve::resolve(&cwd, &opts, config).map(|_| ())
}
