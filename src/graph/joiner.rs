//! Randomized cross-tree joining.

use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::graph::TboxGraph;

/// Adds extra directed edges between the trees of one graph.
///
/// Edges only ever run from an earlier-indexed tree to a later-indexed one,
/// so the combined graph stays acyclic as long as tree vertex sets are
/// name-disjoint.
#[derive(Debug, Clone, Copy)]
pub struct TreeJoiner {
    joining_probability: f64,
}

impl TreeJoiner {
    /// New joiner with the given per-pair probability.
    pub fn new(joining_probability: f64) -> Self {
        Self {
            joining_probability,
        }
    }

    /// For every ordered tree pair (i, j) with i < j, draw one uniform
    /// vertex from each side and, with the configured probability, add the
    /// edge. Pairs with an empty side are skipped; duplicates of edges
    /// already in the graph are not re-added. Returns the number of edges
    /// actually added.
    pub fn join(
        &self,
        rng: &mut StdRng,
        graph: &mut TboxGraph,
        trees: &[Vec<NodeIndex>],
    ) -> usize {
        let mut added = 0;

        for i in 0..trees.len().saturating_sub(1) {
            for j in (i + 1)..trees.len() {
                let (source, target) = match (trees[i].choose(rng), trees[j].choose(rng)) {
                    (Some(&s), Some(&t)) => (s, t),
                    _ => continue,
                };
                if rng.gen_bool(self.joining_probability) && graph.add_edge(source, target) {
                    added += 1;
                }
            }
        }

        debug!(kind = %graph.kind(), added, trees = trees.len(), "cross-tree joining done");
        added
    }
}
