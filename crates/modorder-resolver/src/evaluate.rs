//! Checking an existing load order against the dependency graph.

use std::collections::{BTreeSet, HashMap, HashSet};

use modorder_core::id::normalize_id;
use modorder_core::package::PackageDescriptor;

use crate::diagnostic::Diagnostics;
use crate::graph::{self, EdgeKind};
use crate::priority::PriorityTable;
use crate::sort;

/// What is wrong with a user's load order, and what it should be instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderEvaluation {
    /// The user order restricted to discovered ids, without repeats.
    pub enabled_order: Vec<String>,
    /// The recommended order for every discovered id.
    pub sorted_ids: Vec<String>,
    /// Mods placed before one of their hard dependencies.
    pub hard_issues: BTreeSet<String>,
    /// Mods placed against a load-before/load-after hint.
    pub soft_issues: BTreeSet<String>,
    pub diagnostics: Diagnostics,
    pub cycled: BTreeSet<String>,
    pub cycles: Vec<Vec<String>>,
}

impl OrderEvaluation {
    /// Hard violations or hard cycles present.
    pub fn has_hard_issues(&self) -> bool {
        !self.hard_issues.is_empty() || !self.cycled.is_empty()
    }

    pub fn has_soft_issues(&self) -> bool {
        !self.soft_issues.is_empty()
    }

    /// Nothing to report at all.
    pub fn is_clean(&self) -> bool {
        !self.has_hard_issues() && !self.has_soft_issues() && self.diagnostics.is_empty()
    }

    /// Whether the user order already equals the recommendation.
    pub fn matches_recommendation(&self) -> bool {
        self.enabled_order == self.sorted_ids
    }
}

/// Evaluate `user_order` against the dependencies declared by `packages`.
///
/// This is a pure analysis: the recommendation is computed with the user
/// order as tie-break priority, and nothing is modified.
pub fn evaluate<S: AsRef<str>>(packages: &[PackageDescriptor], user_order: &[S]) -> OrderEvaluation {
    let built = graph::build(packages);
    let enabled_order = normalize_order(&built.graph, user_order);

    let priority = PriorityTable::assign(built.graph.ids(), &enabled_order);
    let outcome = sort::sort(&built.graph, &priority);

    let position: HashMap<&str, usize> = enabled_order
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut hard_issues = BTreeSet::new();
    let mut soft_issues = BTreeSet::new();
    for edge in built.graph.edges() {
        let (Some(&from), Some(&to)) = (position.get(edge.from), position.get(edge.to)) else {
            continue;
        };
        if to < from {
            let issues = match edge.kind {
                EdgeKind::Hard => &mut hard_issues,
                EdgeKind::Soft => &mut soft_issues,
            };
            issues.insert(edge.to.to_string());
        }
    }

    tracing::debug!(
        "evaluated order of {} mods: {} hard issues, {} soft issues",
        enabled_order.len(),
        hard_issues.len(),
        soft_issues.len()
    );

    OrderEvaluation {
        sorted_ids: outcome.order,
        hard_issues,
        soft_issues,
        diagnostics: built.diagnostics,
        cycled: outcome.cycled,
        cycles: outcome.cycles,
        enabled_order,
    }
}

/// Normalize ids, drop unknown ones and keep the first of any repeats.
fn normalize_order<S: AsRef<str>>(graph: &graph::LoadGraph, user_order: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    user_order
        .iter()
        .map(|raw| normalize_id(raw.as_ref()))
        .filter(|id| graph.contains(id) && seen.insert(id.clone()))
        .collect()
}
