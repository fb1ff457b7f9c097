//! Mod version parsing and comparison.
//!
//! Versions are up to four dot-separated non-negative integers
//! (`major.minor.build.revision`). Missing components count as zero, so
//! `1.2` and `1.2.0.0` are equal. Anything else (qualifiers, empty segments,
//! more than four components) does not parse.

use std::cmp::Ordering;
use std::fmt;

const COMPONENTS: usize = 4;

/// A parsed four-component version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModVersion {
    parts: [u64; COMPONENTS],
}

impl ModVersion {
    pub fn new(major: u64, minor: u64, build: u64, revision: u64) -> Self {
        Self {
            parts: [major, minor, build, revision],
        }
    }

    /// Parse a version string. Returns `None` for malformed input.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let mut parts = [0u64; COMPONENTS];
        for (i, segment) in raw.split('.').enumerate() {
            if i >= COMPONENTS || !is_numeric_segment(segment) {
                return None;
            }
            parts[i] = segment.parse().ok()?;
        }
        Some(Self { parts })
    }

    pub fn major(&self) -> u64 {
        self.parts[0]
    }

    pub fn minor(&self) -> u64 {
        self.parts[1]
    }

    pub fn build(&self) -> u64 {
        self.parts[2]
    }

    pub fn revision(&self) -> u64 {
        self.parts[3]
    }
}

impl fmt::Display for ModVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [major, minor, build, revision] = self.parts;
        write!(f, "{major}.{minor}.{build}.{revision}")
    }
}

/// Whether `segment` is a non-empty run of ASCII digits.
pub(crate) fn is_numeric_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `raw` has the shape of a version: dot-separated numeric segments.
pub(crate) fn is_version_shape(raw: &str) -> bool {
    raw.split('.').all(is_numeric_segment)
}

/// One of the six supported version comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    GreaterEq,
    LessEq,
    Greater,
    Less,
    Equal,
    NotEqual,
}

impl Comparator {
    /// Two-character operators come first so `>=` never reads as `>`.
    const BY_PREFIX: [Comparator; 6] = [
        Comparator::GreaterEq,
        Comparator::LessEq,
        Comparator::Equal,
        Comparator::NotEqual,
        Comparator::Greater,
        Comparator::Less,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::GreaterEq => ">=",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Split a leading operator off `input`, returning it and the remainder.
    pub fn split_prefix(input: &str) -> Option<(Self, &str)> {
        Self::BY_PREFIX.iter().find_map(|&op| {
            input
                .strip_prefix(op.symbol())
                .map(|rest| (op, rest))
        })
    }

    /// Whether `found.cmp(&required)` satisfies this operator.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::GreaterEq => ordering != Ordering::Less,
            Self::LessEq => ordering != Ordering::Greater,
            Self::Greater => ordering == Ordering::Greater,
            Self::Less => ordering == Ordering::Less,
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
