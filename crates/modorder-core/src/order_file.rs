use std::path::Path;

use serde::{Deserialize, Serialize};

use modorder_util::errors::ModorderError;

/// Persisted user-curated load order: `{ "order": [ids...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFile {
    #[serde(default)]
    pub order: Vec<String>,
}

impl OrderFile {
    pub fn new(order: Vec<String>) -> Self {
        Self { order }
    }

    /// Load and parse an order file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModorderError::OrderFile {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ModorderError::OrderFile {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Like [`OrderFile::from_path`], but a missing file is an empty order.
    pub fn load_or_default(path: &Path) -> miette::Result<Self> {
        if path.is_file() {
            Self::from_path(path)
        } else {
            tracing::debug!("no order file at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Serialize the order file to a pretty-printed JSON string.
    pub fn to_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the order file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> miette::Result<()> {
        let mut content = self.to_string_pretty().map_err(|e| ModorderError::OrderFile {
            message: format!("Failed to serialize order: {e}"),
        })?;
        content.push('\n');
        modorder_util::fs::write_with_parents(path, &content).map_err(|e| {
            ModorderError::OrderFile {
                message: format!("Failed to write {}: {e}", path.display()),
            }
            .into()
        })
    }
}
