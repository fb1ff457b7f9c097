//! Operation: compute a load order from scratch.

use std::path::{Path, PathBuf};

use modorder_core::config::GlobalConfig;
use modorder_core::order_file::OrderFile;
use modorder_resolver::ResolutionResult;
use modorder_util::errors::ModorderResult;
use modorder_util::progress;

use crate::ops_inputs;

/// Options for `modorder resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Explicit mods file instead of searching for one.
    pub mods_file: Option<PathBuf>,
    /// Explicit order file instead of the one next to the mods file.
    pub order_file: Option<PathBuf>,
    /// Persist the resolved order to the order file.
    pub write: bool,
    /// Do not use the existing order file as tie-break priority.
    pub ignore_order: bool,
}

/// Resolve the load order for the mods found from `cwd` and print it.
pub fn resolve(
    cwd: &Path,
    opts: &ResolveOptions,
    config: &GlobalConfig,
) -> ModorderResult<ResolutionResult> {
    let paths = ops_inputs::locate(
        cwd,
        opts.mods_file.as_deref(),
        opts.order_file.as_deref(),
        &config.resolve,
    )?;
    let inputs = ops_inputs::load(paths)?;

    progress::status("Resolving", &format!("{} mods", inputs.packages.len()));
    let hint: &[String] = if opts.ignore_order {
        &[]
    } else {
        &inputs.order.order
    };
    let result = modorder_resolver::resolve(&inputs.packages, hint);

    for (i, package) in result.order.iter().enumerate() {
        println!("{:>3}. {package}", i + 1);
    }
    crate::report_problems(&result.diagnostics, &result.cycles, &result.cycled);

    if opts.write {
        let order_file = OrderFile::new(result.ids.clone());
        order_file.save(&inputs.paths.order_file)?;
        progress::status("Writing", &inputs.paths.order_file.display().to_string());
    }

    progress::status(
        "Finished",
        &format!(
            "{} mods ordered, {} problems",
            result.ids.len(),
            result.diagnostics.len() + result.cycles.len()
        ),
    );
    Ok(result)
}
