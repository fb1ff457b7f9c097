//! Handler for `modorder check`.

use std::path::PathBuf;

use miette::Result;
use modorder_core::config::{FailOn, GlobalConfig};
use modorder_ops::ops_check::{self, CheckOptions};
use modorder_util::errors::ModorderError;

pub fn exec(
    mods: Option<PathBuf>,
    order: Option<PathBuf>,
    fail_on: Option<FailOn>,
    config: &GlobalConfig,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ModorderError::Io)?;
    let opts = CheckOptions {
        mods_file: mods,
        order_file: order,
        fail_on,
    };
    ops_check::check(&cwd, &opts, config).map(|_| ())
}
