//! Load graph construction.
//!
//! Every discovered mod becomes one node; an edge `from -> to` means `from`
//! must load before `to`. Nodes live in a petgraph arena and are looked up
//! by normalized id once, so sorting works on dense indices only.

use std::collections::{HashMap, HashSet};
use std::fmt;

use modorder_core::metadata::PLACEHOLDER_PREFIX;
use modorder_core::package::PackageDescriptor;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::constraint::Constraint;
use crate::diagnostic::{Diagnostic, Diagnostics};

/// Whether an edge is a correctness requirement or only an ordering hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// From `dependsOn`.
    Hard,
    /// From `loadBefore` / `loadAfter`.
    Soft,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hard => "hard",
            Self::Soft => "soft",
        })
    }
}

/// A borrowed view of one edge, by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub kind: EdgeKind,
}

/// Directed "loads before" graph over normalized mod ids.
#[derive(Debug, Clone, Default)]
pub struct LoadGraph {
    graph: DiGraph<String, EdgeKind>,
    index: HashMap<String, NodeIndex>,
}

impl LoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or retrieve a node. If the id already exists, returns the existing index.
    pub fn add_node(&mut self, id: String) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.index.insert(id, idx);
        idx
    }

    /// Add an edge `from -> to`.
    ///
    /// Self-edges are ignored, and so is any second edge between the same
    /// ordered pair: the first kind inserted is kept. Returns whether an
    /// edge was added.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) -> bool {
        if from == to || self.graph.edges(from).any(|e| e.target() == to) {
            return false;
        }
        self.graph.add_edge(from, to, kind);
        true
    }

    /// Look up a node by normalized id.
    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The id stored at a node.
    pub fn id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// All node indices, in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// All ids, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// Outgoing edges of a node as `(target, kind)`.
    pub fn outgoing(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, EdgeKind)> + '_ {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), *e.weight()))
    }

    /// Number of edges pointing at a node.
    pub fn indegree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// The kind of the edge `from -> to`, if there is one.
    pub fn edge_kind(&self, from: &str, to: &str) -> Option<EdgeKind> {
        let (from, to) = (self.find(from)?, self.find(to)?);
        self.graph.find_edge(from, to).map(|e| self.graph[e])
    }

    /// Every edge, by id.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.graph.edge_references().map(|e| Edge {
            from: &self.graph[e.source()],
            to: &self.graph[e.target()],
            kind: *e.weight(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

/// The result of building a graph from descriptors.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    pub graph: LoadGraph,
    pub diagnostics: Diagnostics,
    /// For each node (by `NodeIndex::index()`), the position of the
    /// descriptor it was built from.
    pub sources: Vec<usize>,
}

impl BuiltGraph {
    /// The descriptor a node was built from.
    pub fn descriptor<'p>(
        &self,
        packages: &'p [PackageDescriptor],
        idx: NodeIndex,
    ) -> Option<&'p PackageDescriptor> {
        self.sources.get(idx.index()).and_then(|&pos| packages.get(pos))
    }
}

/// Build the load graph for a set of mods.
///
/// Hard edges are inserted for all mods before any soft edge, so a hard
/// dependency always wins over a soft hint naming the same ordered pair.
pub fn build(packages: &[PackageDescriptor]) -> BuiltGraph {
    let mut graph = LoadGraph::new();
    let mut diagnostics = Diagnostics::new();
    let mut sources = Vec::with_capacity(packages.len());
    let mut members: Vec<(NodeIndex, &PackageDescriptor)> = Vec::with_capacity(packages.len());

    let taken: HashSet<String> = packages.iter().map(PackageDescriptor::key).collect();
    let mut next_placeholder = 1usize;

    for (pos, package) in packages.iter().enumerate() {
        let mut key = package.key();
        if key.is_empty() {
            key = loop {
                let candidate = format!("{PLACEHOLDER_PREFIX}{next_placeholder}");
                next_placeholder += 1;
                if !taken.contains(&candidate) {
                    break candidate;
                }
            };
        }
        if graph.contains(&key) {
            tracing::warn!("mod '{key}' is declared more than once, ignoring later declaration");
            diagnostics.add(Diagnostic::DuplicatePackage { id: key });
            continue;
        }
        let node = graph.add_node(key);
        sources.push(pos);
        members.push((node, package));
    }

    for &(node, package) in &members {
        for raw in &package.depends_on {
            let Some(constraint) = Constraint::parse(raw) else {
                continue;
            };
            let package_id = graph.id(node).to_string();
            let Some(target) = graph.find(&constraint.target_id) else {
                diagnostics.add(Diagnostic::MissingDependency {
                    package: package_id,
                    dependency: constraint.target_id,
                });
                continue;
            };
            if target == node {
                continue;
            }
            let found = members[target.index()].1.version.as_deref();
            if !constraint.is_satisfied_by(found) {
                if let Some(requirement) = constraint.requirement {
                    diagnostics.add(Diagnostic::VersionMismatch {
                        package: package_id,
                        dependency: constraint.target_id,
                        requirement,
                        found: found.map(str::to_string),
                    });
                }
                continue;
            }
            graph.add_edge(target, node, EdgeKind::Hard);
        }
    }

    for &(node, package) in &members {
        for raw in &package.load_before {
            if let Some(target) = soft_target(&graph, &members, raw) {
                graph.add_edge(node, target, EdgeKind::Soft);
            }
        }
        for raw in &package.load_after {
            if let Some(target) = soft_target(&graph, &members, raw) {
                graph.add_edge(target, node, EdgeKind::Soft);
            }
        }
    }

    tracing::debug!(
        "built load graph: {} mods, {} edges, {} diagnostics",
        graph.node_count(),
        graph.edge_count(),
        diagnostics.len()
    );

    BuiltGraph {
        graph,
        diagnostics,
        sources,
    }
}

/// Resolve a soft hint to a node: the target must exist and satisfy any
/// version gate. Unknown or unsatisfied hints are dropped silently.
fn soft_target(
    graph: &LoadGraph,
    members: &[(NodeIndex, &PackageDescriptor)],
    raw: &str,
) -> Option<NodeIndex> {
    let constraint = Constraint::parse(raw)?;
    let target = graph.find(&constraint.target_id)?;
    let found = members[target.index()].1.version.as_deref();
    constraint.is_satisfied_by(found).then_some(target)
}
