//! Data-quality findings collected while building the load graph.

use std::fmt;

use crate::constraint::VersionRequirement;

/// A single recoverable problem with the input mods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A hard dependency names a mod that was not discovered.
    MissingDependency { package: String, dependency: String },
    /// A hard dependency exists but its version does not satisfy the requirement.
    VersionMismatch {
        package: String,
        dependency: String,
        requirement: VersionRequirement,
        found: Option<String>,
    },
    /// Two descriptors normalize to the same id; the later one is ignored.
    DuplicatePackage { id: String },
}

impl Diagnostic {
    /// Whether the finding means a hard dependency is unmet.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            Self::MissingDependency { .. } | Self::VersionMismatch { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDependency {
                package,
                dependency,
            } => write!(
                f,
                "Mod '{package}' has a missing hard dependency: '{dependency}'."
            ),
            Self::VersionMismatch {
                package,
                dependency,
                requirement,
                found,
            } => write!(
                f,
                "Mod '{package}' requires dependency '{dependency}' version {requirement}, \
                 but found version {}.",
                found.as_deref().unwrap_or("none")
            ),
            Self::DuplicatePackage { id } => write!(
                f,
                "Mod '{id}' is declared more than once; keeping the first declaration."
            ),
        }
    }
}

/// All diagnostics produced by one resolution or evaluation, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Whether any finding is a blocking (hard dependency) problem.
    pub fn has_blocking(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_blocking)
    }

    /// The rendered message of every finding.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No dependency problems.");
        }
        writeln!(f, "Dependency problems ({}):", self.entries.len())?;
        for d in &self.entries {
            writeln!(f, "  {d}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Comparator;

    #[test]
    fn missing_dependency_message() {
        let d = Diagnostic::MissingDependency {
            package: "a".into(),
            dependency: "ghost".into(),
        };
        assert_eq!(d.to_string(), "Mod 'a' has a missing hard dependency: 'ghost'.");
        assert!(d.is_blocking());
    }

    #[test]
    fn version_mismatch_message() {
        let requirement = VersionRequirement {
            comparator: Comparator::GreaterEq,
            version: "2.0.0".into(),
        };
        let d = Diagnostic::VersionMismatch {
            package: "a".into(),
            dependency: "x".into(),
            requirement: requirement.clone(),
            found: Some("1.0.0".into()),
        };
        assert_eq!(
            d.to_string(),
            "Mod 'a' requires dependency 'x' version >=2.0.0, but found version 1.0.0."
        );

        let unversioned = Diagnostic::VersionMismatch {
            package: "a".into(),
            dependency: "x".into(),
            requirement,
            found: None,
        };
        assert!(unversioned.to_string().ends_with("but found version none."));
    }

    #[test]
    fn duplicate_is_not_blocking() {
        let d = Diagnostic::DuplicatePackage { id: "a".into() };
        assert!(!d.is_blocking());
    }

    #[test]
    fn empty_report() {
        let report = Diagnostics::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert!(!report.has_blocking());
        assert_eq!(report.to_string(), "No dependency problems.");
    }

    #[test]
    fn report_lists_every_message() {
        let mut report = Diagnostics::new();
        report.add(Diagnostic::DuplicatePackage { id: "a".into() });
        report.add(Diagnostic::MissingDependency {
            package: "b".into(),
            dependency: "c".into(),
        });
        assert!(report.has_blocking());
        assert_eq!(report.messages().len(), 2);
        let s = report.to_string();
        assert!(s.starts_with("Dependency problems (2):"));
        assert!(s.contains("missing hard dependency: 'c'"));
    }
}
