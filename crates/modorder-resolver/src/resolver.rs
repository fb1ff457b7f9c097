//! Entry point for computing a load order from scratch.

use std::collections::BTreeSet;

use modorder_core::package::PackageDescriptor;

use crate::diagnostic::Diagnostics;
use crate::graph;
use crate::priority::PriorityTable;
use crate::sort;

/// The output of load order resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    /// Descriptors in load order, each discovered mod exactly once, with
    /// `id` set to the normalized (or placeholder) id.
    pub order: Vec<PackageDescriptor>,
    /// The normalized ids of `order`, in the same sequence.
    pub ids: Vec<String>,
    /// Missing or unsatisfied hard dependencies and duplicate declarations.
    pub diagnostics: Diagnostics,
    /// Ids that could not be ordered because of a hard dependency cycle.
    pub cycled: BTreeSet<String>,
    /// The hard cycles themselves, each sorted by id.
    pub cycles: Vec<Vec<String>>,
}

impl ResolutionResult {
    pub fn has_cycles(&self) -> bool {
        !self.cycled.is_empty()
    }

    /// Position of an id in the resolved order.
    pub fn position(&self, id: &str) -> Option<usize> {
        let id = modorder_core::id::normalize_id(id);
        self.ids.iter().position(|x| *x == id)
    }
}

/// Compute a dependency-respecting load order.
///
/// `prior_order_hint` (possibly empty) only breaks ties between mods the
/// dependency graph leaves unordered.
pub fn resolve<S: AsRef<str>>(
    packages: &[PackageDescriptor],
    prior_order_hint: &[S],
) -> ResolutionResult {
    let built = graph::build(packages);
    let priority = PriorityTable::assign(built.graph.ids(), prior_order_hint);
    let outcome = sort::sort(&built.graph, &priority);

    let order = outcome
        .order
        .iter()
        .filter_map(|id| {
            let idx = built.graph.find(id)?;
            let mut descriptor = built.descriptor(packages, idx)?.clone();
            descriptor.id = id.clone();
            Some(descriptor)
        })
        .collect();

    tracing::debug!(
        "resolved {} mods ({} diagnostics, {} cycled)",
        outcome.order.len(),
        built.diagnostics.len(),
        outcome.cycled.len()
    );

    ResolutionResult {
        order,
        ids: outcome.order,
        diagnostics: built.diagnostics,
        cycled: outcome.cycled,
        cycles: outcome.cycles,
    }
}
