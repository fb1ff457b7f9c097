use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{DEFAULT_MODS_FILE, DEFAULT_ORDER_FILE};

/// Global user configuration loaded from `~/.modorder/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Settings from `[resolve]` in global config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default, rename = "fail-on")]
    pub fail_on: FailOn,
    #[serde(default = "default_mods_file", rename = "mods-file")]
    pub mods_file: String,
    #[serde(default = "default_order_file", rename = "order-file")]
    pub order_file: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            fail_on: FailOn::default(),
            mods_file: default_mods_file(),
            order_file: default_order_file(),
        }
    }
}

fn default_mods_file() -> String {
    DEFAULT_MODS_FILE.to_string()
}

fn default_order_file() -> String {
    DEFAULT_ORDER_FILE.to_string()
}

/// Which findings of `modorder check` make it exit with an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Only hard dependency violations and cycles.
    #[default]
    Hard,
    /// Hard violations plus violated load-before/load-after hints.
    Soft,
    /// Report only.
    Never,
}

impl FromStr for FailOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "soft" => Ok(Self::Soft),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "unknown fail-on level '{other}' (expected hard, soft or never)"
            )),
        }
    }
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
            Self::Never => "never",
        })
    }
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            modorder_util::errors::ModorderError::Config {
                message: format!("Failed to read global config: {e}"),
            }
        })?;
        toml::from_str(&content).map_err(|e| {
            modorder_util::errors::ModorderError::Config {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the modorder data directory: `$MODORDER_HOME`, else `~/.modorder/`.
pub fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("MODORDER_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".modorder")
}
