//! Extracted TBox graph: vertices, axiom edges, and the dedup policy.

pub mod joiner;
pub mod summary;

pub use joiner::TreeJoiner;
pub use summary::GraphSummary;

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::forest::Forest;
use crate::types::SymbolKind;

/// A vertex in the extracted graph.
#[derive(Debug, Clone)]
pub struct TboxVertex {
    /// Kind of the underlying symbol.
    pub kind: SymbolKind,
    /// Final, possibly decorated display name.
    pub name: String,
    /// Whether the name carries the negation decoration.
    pub negated: bool,
}

/// Extracted graph for one symbol kind.
///
/// Wraps a petgraph `DiGraph`. Vertex identity is the display name when
/// name-dedup is on (two nodes that decorate to the same name collapse to
/// one vertex, which can lower realized counts below the requested size);
/// with dedup off every forest node keeps its own vertex. Edges are
/// deduplicated by endpoint pair in either mode and iterate in discovery
/// order.
#[derive(Debug)]
pub struct TboxGraph {
    kind: SymbolKind,
    inner: DiGraph<TboxVertex, ()>,
    dedup_vertices: bool,
    by_name: HashMap<String, NodeIndex>,
    seen_edges: HashSet<(NodeIndex, NodeIndex)>,
}

impl TboxGraph {
    /// Empty graph for the given kind and dedup policy.
    pub fn new(kind: SymbolKind, dedup_vertices: bool) -> Self {
        Self {
            kind,
            inner: DiGraph::new(),
            dedup_vertices,
            by_name: HashMap::new(),
            seen_edges: HashSet::new(),
        }
    }

    /// Kind of every vertex in this graph.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Access the underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<TboxVertex, ()> {
        &self.inner
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Number of axiom edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    fn intern(&mut self, vertex: TboxVertex) -> NodeIndex {
        if self.dedup_vertices {
            if let Some(&ix) = self.by_name.get(&vertex.name) {
                return ix;
            }
            let name = vertex.name.clone();
            let ix = self.inner.add_node(vertex);
            self.by_name.insert(name, ix);
            ix
        } else {
            self.inner.add_node(vertex)
        }
    }

    /// Add a directed edge between existing vertices. Duplicate endpoint
    /// pairs are ignored; returns whether the edge was added.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex) -> bool {
        if !self.seen_edges.insert((source, target)) {
            return false;
        }
        self.inner.add_edge(source, target, ());
        true
    }

    /// Flatten `forest` into the graph: one vertex per node and one edge
    /// per parent-child relation, in bookkeeping order. Unattached nodes
    /// contribute a vertex with no incident edge.
    ///
    /// Returns one entry per forest node (the tree's vertex instances, as
    /// the joiner samples them), so a collapsed vertex appears once per
    /// underlying node.
    pub fn absorb_forest(&mut self, forest: &Forest) -> Vec<NodeIndex> {
        let mut mapped = Vec::with_capacity(forest.len());
        for (_, node) in forest.nodes() {
            mapped.push(self.intern(TboxVertex {
                kind: node.kind,
                name: node.display_name.clone(),
                negated: node.negated,
            }));
        }
        for (id, node) in forest.nodes() {
            for &child in &node.children {
                self.add_edge(mapped[id.0], mapped[child.0]);
            }
        }
        mapped
    }

    /// Display names of all vertices, in first-seen order.
    pub fn vertex_names(&self) -> Vec<String> {
        self.inner
            .node_indices()
            .map(|ix| self.inner[ix].name.clone())
            .collect()
    }

    /// Edges as (source name, target name) pairs, in discovery order.
    pub fn edge_names(&self) -> Vec<(String, String)> {
        self.inner
            .edge_references()
            .map(|e| {
                (
                    self.inner[e.source()].name.clone(),
                    self.inner[e.target()].name.clone(),
                )
            })
            .collect()
    }
}
