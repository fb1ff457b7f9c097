//! Locating and loading the files the operations work on.

use std::path::{Path, PathBuf};

use modorder_core::config::ResolveConfig;
use modorder_core::metadata::{self, ModMetadata};
use modorder_core::order_file::OrderFile;
use modorder_core::package::PackageDescriptor;
use modorder_util::errors::{ModorderError, ModorderResult};

/// Resolved locations of the mods file and the order file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub mods_file: PathBuf,
    pub order_file: PathBuf,
}

/// Everything an operation needs, read from disk.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub paths: InputPaths,
    pub packages: Vec<PackageDescriptor>,
    pub order: OrderFile,
}

/// Work out which files to use.
///
/// Explicit paths are taken relative to `cwd`. Without an explicit mods
/// file, the configured file name is searched for from `cwd` upward. The
/// order file defaults to the configured name next to the mods file.
pub fn locate(
    cwd: &Path,
    mods_file: Option<&Path>,
    order_file: Option<&Path>,
    config: &ResolveConfig,
) -> ModorderResult<InputPaths> {
    let mods_file = match mods_file {
        Some(path) => cwd.join(path),
        None => modorder_util::fs::find_ancestor_with(cwd, &config.mods_file)
            .map(|dir| dir.join(&config.mods_file))
            .ok_or_else(|| ModorderError::Metadata {
                message: format!(
                    "No {} found in {} or any parent directory",
                    config.mods_file,
                    cwd.display()
                ),
            })?,
    };

    let order_file = match order_file {
        Some(path) => cwd.join(path),
        None => mods_file
            .parent()
            .unwrap_or(cwd)
            .join(&config.order_file),
    };

    Ok(InputPaths {
        mods_file,
        order_file,
    })
}

/// Read the mods file and the order file (missing order file = empty order).
pub fn load(paths: InputPaths) -> ModorderResult<Inputs> {
    tracing::info!("loading mods from {}", paths.mods_file.display());
    let packages = metadata::into_descriptors(ModMetadata::load_all(&paths.mods_file)?);

    tracing::info!("loading load order from {}", paths.order_file.display());
    let order = OrderFile::load_or_default(&paths.order_file)?;

    Ok(Inputs {
        paths,
        packages,
        order,
    })
}
