//! Priority-ordered topological sort with cycle resolution.
//!
//! Kahn's algorithm where the ready set is always drained smallest
//! `(rank, id)` first. When a cycle leaves nodes unreached, the soft hints
//! among those nodes are dropped and the sort is retried on hard edges
//! only; whatever is still unreached sits on a hard cycle and is appended
//! in priority order.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::{EdgeKind, LoadGraph};
use crate::priority::PriorityTable;

/// Which edges a sorting pass honours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeFilter {
    All,
    HardOnly,
}

impl EdgeFilter {
    fn admits(self, kind: EdgeKind) -> bool {
        match self {
            Self::All => true,
            Self::HardOnly => kind == EdgeKind::Hard,
        }
    }
}

/// Output of [`sort`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// Every id exactly once.
    pub order: Vec<String>,
    /// Ids that could not be placed even on hard edges alone.
    pub cycled: BTreeSet<String>,
    /// Hard-edge cycles among the cycled ids, each sorted by id.
    pub cycles: Vec<Vec<String>>,
}

impl SortOutcome {
    pub fn has_cycles(&self) -> bool {
        !self.cycled.is_empty()
    }
}

/// Sort every node of `graph`, breaking ties with `priority`.
pub fn sort(graph: &LoadGraph, priority: &PriorityTable) -> SortOutcome {
    let all: Vec<NodeIndex> = graph.node_indices().collect();
    let mut placed = vec![false; graph.node_count()];

    let mut order = kahn(graph, &all, EdgeFilter::All, priority);
    for idx in &order {
        placed[idx.index()] = true;
    }

    let mut residual = Vec::new();
    if order.len() < all.len() {
        let unreached: Vec<NodeIndex> = unplaced(&all, &placed);
        tracing::warn!(
            "{} mods are caught in an ordering cycle, retrying without load-before/load-after hints",
            unreached.len()
        );

        let relaxed = kahn(graph, &unreached, EdgeFilter::HardOnly, priority);
        for idx in &relaxed {
            placed[idx.index()] = true;
        }
        order.extend(relaxed);

        residual = unplaced(&unreached, &placed);
        if !residual.is_empty() {
            residual.sort_by(|a, b| {
                priority
                    .sort_key(graph.id(*a))
                    .cmp(&priority.sort_key(graph.id(*b)))
            });
            tracing::warn!(
                "{} mods are part of a hard dependency cycle, falling back to priority order",
                residual.len()
            );
            order.extend(residual.iter().copied());
        }
    }

    SortOutcome {
        order: order.iter().map(|&idx| graph.id(idx).to_string()).collect(),
        cycled: residual.iter().map(|&idx| graph.id(idx).to_string()).collect(),
        cycles: hard_cycles(graph, &residual),
    }
}

fn unplaced(nodes: &[NodeIndex], placed: &[bool]) -> Vec<NodeIndex> {
    nodes
        .iter()
        .copied()
        .filter(|idx| !placed[idx.index()])
        .collect()
}

/// Kahn's algorithm restricted to `nodes` and the edges `filter` admits.
///
/// Returns the nodes it could order; nodes on a cycle are left out.
fn kahn(
    graph: &LoadGraph,
    nodes: &[NodeIndex],
    filter: EdgeFilter,
    priority: &PriorityTable,
) -> Vec<NodeIndex> {
    let mut scope = vec![false; graph.node_count()];
    for idx in nodes {
        scope[idx.index()] = true;
    }
    let in_scope = &scope;

    let scoped_targets = move |u: NodeIndex| {
        graph
            .outgoing(u)
            .filter(move |&(v, kind)| in_scope[v.index()] && filter.admits(kind))
            .map(|(v, _)| v)
    };

    let mut indegree = vec![0usize; graph.node_count()];
    for &u in nodes {
        for v in scoped_targets(u) {
            indegree[v.index()] += 1;
        }
    }

    let entry = move |idx: NodeIndex| {
        let id = graph.id(idx);
        Reverse((priority.rank(id), id, idx))
    };
    let mut ready: BinaryHeap<_> = nodes
        .iter()
        .copied()
        .filter(|idx| indegree[idx.index()] == 0)
        .map(entry)
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    let mut iterations = 0usize;
    while let Some(Reverse((_, _, u))) = ready.pop() {
        iterations += 1;
        if iterations > nodes.len() {
            tracing::error!("topological sort exceeded {} iterations, stopping", nodes.len());
            break;
        }
        order.push(u);

        let mut targets: Vec<NodeIndex> = scoped_targets(u).collect();
        targets.sort_by(|a, b| graph.id(*a).cmp(graph.id(*b)));
        for v in targets {
            let remaining = &mut indegree[v.index()];
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                ready.push(entry(v));
            }
        }
    }

    tracing::debug!(
        "sort pass ({:?}) ordered {} of {} mods",
        filter,
        order.len(),
        nodes.len()
    );
    order
}

/// Strongly connected components of size > 1 among `nodes` on hard edges.
fn hard_cycles(graph: &LoadGraph, nodes: &[NodeIndex]) -> Vec<Vec<String>> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut sub: DiGraph<NodeIndex, ()> = DiGraph::with_capacity(nodes.len(), 0);
    let mut local = vec![None; graph.node_count()];
    for &idx in nodes {
        local[idx.index()] = Some(sub.add_node(idx));
    }
    for &u in nodes {
        for (v, kind) in graph.outgoing(u) {
            if let (Some(from), Some(to), EdgeKind::Hard) = (local[u.index()], local[v.index()], kind)
            {
                sub.add_edge(from, to, ());
            }
        }
    }

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&sub)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut ids: Vec<String> = component
                .into_iter()
                .map(|local_idx| graph.id(sub[local_idx]).to_string())
                .collect();
            ids.sort();
            ids
        })
        .collect();
    cycles.sort();
    cycles
}
