//! On-disk mod metadata and id derivation.
//!
//! A mods file is a JSON array of loosely filled objects. Converting it to
//! [`PackageDescriptor`]s never fails: every entry gets an id, falling back
//! to a generated placeholder when nothing usable is present.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::id::normalize_id;
use crate::package::PackageDescriptor;

/// Prefix of ids generated for entries with no derivable identity.
pub const PLACEHOLDER_PREFIX: &str = "unnamed-mod-";

/// Metadata for a single mod as written by the mod author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Directory the mod was discovered in.
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default, alias = "depends_on")]
    pub depends_on: Vec<String>,
    #[serde(default, alias = "load_before")]
    pub load_before: Vec<String>,
    #[serde(default, alias = "load_after")]
    pub load_after: Vec<String>,
}

impl ModMetadata {
    /// Load and parse a mods file from the given path.
    pub fn load_all(path: &Path) -> miette::Result<Vec<Self>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            modorder_util::errors::ModorderError::Metadata {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::parse_all(&content)
    }

    /// Parse a mods file from a string.
    pub fn parse_all(content: &str) -> miette::Result<Vec<Self>> {
        serde_json::from_str(content).map_err(|e| {
            modorder_util::errors::ModorderError::Metadata {
                message: format!("Failed to parse mods file: {e}"),
            }
            .into()
        })
    }

    /// The id this entry declares: `id`, else `name`, else the root
    /// directory name. `None` when none of them has any content.
    pub fn derive_id(&self) -> Option<String> {
        let from_text = |s: &Option<String>| {
            s.as_deref()
                .map(normalize_id)
                .filter(|normalized| !normalized.is_empty())
        };
        from_text(&self.id)
            .or_else(|| from_text(&self.name))
            .or_else(|| self.root.as_deref().and_then(id_from_root))
    }
}

fn id_from_root(root: &Path) -> Option<String> {
    let raw = match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => root.to_string_lossy().into_owned(),
    };
    let id = normalize_id(&raw);
    (!id.is_empty()).then_some(id)
}

/// Convert metadata entries into descriptors, in input order.
///
/// Entries without a derivable id receive `unnamed-mod-<n>`, numbered from 1
/// and skipping any number whose id is already taken by another entry.
pub fn into_descriptors(entries: Vec<ModMetadata>) -> Vec<PackageDescriptor> {
    let taken: HashSet<String> = entries.iter().filter_map(ModMetadata::derive_id).collect();
    let mut next_placeholder = 1usize;

    entries
        .into_iter()
        .map(|entry| {
            let id = entry.derive_id().unwrap_or_else(|| loop {
                let candidate = format!("{PLACEHOLDER_PREFIX}{next_placeholder}");
                next_placeholder += 1;
                if !taken.contains(&candidate) {
                    tracing::debug!("mod without identity assigned placeholder id {candidate}");
                    break candidate;
                }
            });
            let version = entry
                .version
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
            PackageDescriptor {
                id,
                version,
                depends_on: entry.depends_on,
                load_before: entry.load_before,
                load_after: entry.load_after,
            }
        })
        .collect()
}
