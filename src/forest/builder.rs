//! Incremental random forest construction under branching and depth bounds.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::errors::Result;
use crate::forest::decorate::NameDecorator;
use crate::forest::node::{Forest, NodeId};
use crate::types::SymbolKind;

/// Structural bounds for one builder invocation.
#[derive(Debug, Clone, Copy)]
pub struct BuildParams {
    /// Number of nodes to produce.
    pub size: usize,
    /// Maximum children per node.
    pub branching_factor: usize,
    /// Maximum depth a parent may sit at while still accepting children.
    pub max_depth: u32,
    /// Probability that a fresh node attempts to find a parent.
    pub edge_probability: f64,
    /// Bound on parent-candidate samples before a node is left unattached.
    pub attach_retry_cap: usize,
}

/// Counters describing the builds performed by one [`ForestBuilder`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildStats {
    /// Nodes produced.
    pub placed: usize,
    /// Nodes attached under a parent.
    pub attached: usize,
    /// Nodes left unattached because the retry cap was exhausted.
    pub retry_exhausted: usize,
}

/// Builds forests of a single kind, one [`Forest`] per call.
pub struct ForestBuilder<'a> {
    kind: SymbolKind,
    params: BuildParams,
    decorator: &'a dyn NameDecorator,
    stats: BuildStats,
}

impl fmt::Debug for ForestBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForestBuilder")
            .field("kind", &self.kind)
            .field("params", &self.params)
            .field("decorator", &"<NameDecorator>")
            .field("stats", &self.stats)
            .finish()
    }
}

impl<'a> ForestBuilder<'a> {
    /// New builder for the given kind, bounds, and decoration hook.
    pub fn new(kind: SymbolKind, params: BuildParams, decorator: &'a dyn NameDecorator) -> Self {
        Self {
            kind,
            params,
            decorator,
            stats: BuildStats::default(),
        }
    }

    /// Counters accumulated across all builds so far.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Build one forest of `params.size` nodes drawn from `pool`.
    ///
    /// Per-node randomness is consumed in a fixed order: name draw,
    /// decoration draws, edge-probability draw, parent-candidate draws.
    /// An empty pool or a zero size yields an empty forest.
    pub fn build(&mut self, rng: &mut StdRng, pool: &[String]) -> Result<Forest> {
        let mut forest = Forest::new(self.kind);
        if pool.is_empty() || self.params.size == 0 {
            return Ok(forest);
        }

        while forest.len() < self.params.size {
            let base = match pool.choose(rng) {
                Some(name) => name,
                None => break,
            };

            let any_placed = !forest.is_empty();
            let decorated = self.decorator.decorate(rng, base, any_placed);

            if !any_placed {
                // The first node becomes the tree root; no attachment attempt.
                forest.push_node(self.kind, decorated.text, decorated.negated);
                self.stats.placed += 1;
                continue;
            }

            let child = forest.push_node(self.kind, decorated.text, decorated.negated);
            self.stats.placed += 1;

            if rng.gen_bool(self.params.edge_probability) {
                match self.sample_parent(rng, &forest, child) {
                    Some(parent) => {
                        forest.attach(parent, child)?;
                        self.stats.attached += 1;
                    }
                    None => {
                        // Bounded replacement for the reference's unbounded
                        // search: the node stays an extra root.
                        self.stats.retry_exhausted += 1;
                        warn!(
                            kind = %self.kind,
                            node = child.0,
                            cap = self.params.attach_retry_cap,
                            "no eligible parent within retry cap, leaving node unattached"
                        );
                    }
                }
            }
        }

        Ok(forest)
    }

    /// Sample existing nodes uniformly until one passes every attach check,
    /// up to the retry cap. The candidate pool excludes `child` itself,
    /// which is always the newest node.
    fn sample_parent(&self, rng: &mut StdRng, forest: &Forest, child: NodeId) -> Option<NodeId> {
        if child.0 == 0 {
            return None;
        }
        let child_name = &forest.node(child).display_name;

        for _ in 0..self.params.attach_retry_cap {
            let candidate = NodeId(rng.gen_range(0..child.0));
            if forest.can_attach(
                candidate,
                child_name,
                self.params.branching_factor,
                self.params.max_depth,
            ) {
                return Some(candidate);
            }
        }
        None
    }
}
