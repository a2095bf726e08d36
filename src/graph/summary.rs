//! Summary counters for an extracted graph.

use petgraph::Direction;

use crate::graph::TboxGraph;

/// Counts for health-checking a generated graph and naming its output.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphSummary {
    /// Total vertices.
    pub vertices: usize,
    /// Total axiom edges.
    pub edges: usize,
    /// Vertices with no incoming edge.
    pub roots: usize,
    /// Vertices carrying the negation decoration.
    pub conflicts: usize,
    /// Average (undirected) degree.
    pub avg_degree: f32,
}

impl GraphSummary {
    /// Compute the counters for the given graph.
    pub fn compute(graph: &TboxGraph) -> Self {
        let inner = graph.inner();
        let vertices = inner.node_count();
        let edges = inner.edge_count();
        let roots = inner.externals(Direction::Incoming).count();
        let conflicts = inner
            .node_indices()
            .filter(|&ix| inner[ix].negated)
            .count();
        let avg_degree = if vertices > 0 {
            (2 * edges) as f32 / vertices as f32
        } else {
            0.0
        };

        Self {
            vertices,
            edges,
            roots,
            conflicts,
            avg_degree,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::Forest;
    use crate::types::SymbolKind;

    #[test]
    fn test_counts_roots_and_conflicts() {
        let mut forest = Forest::new(SymbolKind::Concept);
        let a = forest.push_node(SymbolKind::Concept, "a".into(), false);
        let b = forest.push_node(SymbolKind::Concept, "NOT b".into(), true);
        forest.attach(a, b).unwrap();
        forest.push_node(SymbolKind::Concept, "c".into(), false);

        let mut graph = TboxGraph::new(SymbolKind::Concept, true);
        graph.absorb_forest(&forest);
        let summary = GraphSummary::compute(&graph);

        assert_eq!(summary.vertices, 3);
        assert_eq!(summary.edges, 1);
        assert_eq!(summary.roots, 2);
        assert_eq!(summary.conflicts, 1);
    }

    #[test]
    fn test_empty_graph_summary() {
        let graph = TboxGraph::new(SymbolKind::Role, true);
        let summary = GraphSummary::compute(&graph);
        assert_eq!(summary.vertices, 0);
        assert_eq!(summary.avg_degree, 0.0);
    }
}
