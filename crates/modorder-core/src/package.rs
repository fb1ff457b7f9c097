use serde::{Deserialize, Serialize};

use crate::id::normalize_id;

/// One discovered mod as seen by the resolver.
///
/// `depends_on` holds hard constraint strings (`"id"`, `"id>=1.2"`),
/// `load_before` / `load_after` hold soft ordering hints in the same syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub id: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub load_before: Vec<String>,
    #[serde(default)]
    pub load_after: Vec<String>,
}

impl PackageDescriptor {
    /// Create a descriptor with no version and no constraints.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: normalize_id(id.as_ref()),
            version: None,
            depends_on: Vec::new(),
            load_before: Vec::new(),
            load_after: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_depends_on<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on.extend(constraints.into_iter().map(Into::into));
        self
    }

    pub fn with_load_before<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load_before.extend(constraints.into_iter().map(Into::into));
        self
    }

    pub fn with_load_after<I, S>(mut self, constraints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.load_after.extend(constraints.into_iter().map(Into::into));
        self
    }

    /// The id under the identity rule, regardless of how the field was set.
    pub fn key(&self) -> String {
        normalize_id(&self.id)
    }
}

impl std::fmt::Display for PackageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{} v{}", self.id, v),
            None => f.write_str(&self.id),
        }
    }
}
