//! Parsing of dependency strings such as `"harmony"` or `"core >= 1.2"`.
//!
//! The accepted shape is `<id>[ <op> <version>]`. Parsing never fails on
//! non-empty input: anything that does not fit the shape becomes an
//! unconditional dependency on the whole trimmed, lower-cased string, and a
//! lone operator or a lone version is dropped in favour of the bare id.

use std::fmt;

use modorder_core::id::normalize_id;

use crate::version::{is_version_shape, Comparator, ModVersion};

/// Characters that end the id part of a constraint.
const OPERATOR_CHARS: [char; 4] = ['<', '>', '=', '!'];

/// The version half of a constraint: an operator and the version it compares against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRequirement {
    pub comparator: Comparator,
    pub version: String,
}

impl VersionRequirement {
    /// Check a candidate version against this requirement.
    ///
    /// A missing or malformed candidate never satisfies a requirement, and
    /// neither does anything when the required version itself is malformed.
    pub fn is_satisfied_by(&self, candidate: Option<&str>) -> bool {
        let Some(required) = ModVersion::parse(&self.version) else {
            return false;
        };
        match candidate.and_then(ModVersion::parse) {
            Some(found) => self.comparator.accepts(found.cmp(&required)),
            None => false,
        }
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator, self.version)
    }
}

/// A parsed dependency: the target id and an optional version gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub target_id: String,
    pub requirement: Option<VersionRequirement>,
}

impl Constraint {
    /// An unconditional dependency on `target`.
    pub fn any(target: &str) -> Self {
        Self {
            target_id: normalize_id(target),
            requirement: None,
        }
    }

    /// Parse a dependency string. Returns `None` only for empty or
    /// whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(parse_shaped(trimmed).unwrap_or_else(|| Self::any(trimmed)))
    }

    pub fn comparator(&self) -> Option<Comparator> {
        self.requirement.as_ref().map(|r| r.comparator)
    }

    pub fn version(&self) -> Option<&str> {
        self.requirement.as_ref().map(|r| r.version.as_str())
    }

    /// Whether a mod at `candidate` version fulfils this constraint.
    /// Constraints without a version gate accept anything, including no version.
    pub fn is_satisfied_by(&self, candidate: Option<&str>) -> bool {
        match &self.requirement {
            Some(requirement) => requirement.is_satisfied_by(candidate),
            None => true,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.requirement {
            Some(requirement) => write!(f, "{}{}", self.target_id, requirement),
            None => f.write_str(&self.target_id),
        }
    }
}

/// Match `<id>\s*[<op>]\s*[<version>]` against an already trimmed string.
fn parse_shaped(input: &str) -> Option<Constraint> {
    let id_end = input
        .find(|c: char| c.is_whitespace() || OPERATOR_CHARS.contains(&c))
        .unwrap_or(input.len());
    let (id, rest) = input.split_at(id_end);
    if id.is_empty() {
        return None;
    }

    let rest = rest.trim_start();
    let (comparator, rest) = match Comparator::split_prefix(rest) {
        Some((op, after)) => (Some(op), after.trim_start()),
        None => (None, rest),
    };

    let version = match rest {
        "" => None,
        v if is_version_shape(v) => Some(v),
        _ => return None,
    };

    let requirement = match (comparator, version) {
        (Some(comparator), Some(version)) => Some(VersionRequirement {
            comparator,
            version: version.to_string(),
        }),
        // Half a version gate is ambiguous; keep only the id.
        _ => None,
    };

    Some(Constraint {
        target_id: normalize_id(id),
        requirement,
    })
}
