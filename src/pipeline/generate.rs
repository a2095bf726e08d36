//! Orchestrates: symbol corpus -> role graph -> concept graph.

use rand::rngs::StdRng;
use tracing::debug;

use crate::config::{TbgenConfig, TreeParams};
use crate::errors::Result;
use crate::forest::{
    BuildParams, BuildStats, ConceptDecorator, ForestBuilder, IdentityDecorator, NameDecorator,
};
use crate::graph::{GraphSummary, TboxGraph, TreeJoiner};
use crate::symbols::SymbolCorpus;
use crate::types::SymbolKind;

/// A fully generated fixture: both graphs plus their counters.
#[derive(Debug)]
pub struct TboxFixture {
    /// Role hierarchy graph, trees joined.
    pub roles: TboxGraph,
    /// Concept hierarchy graph, trees joined.
    pub concepts: TboxGraph,
    /// Role graph counters.
    pub role_summary: GraphSummary,
    /// Concept graph counters.
    pub concept_summary: GraphSummary,
    /// Role build counters (attachments, retry fallbacks).
    pub role_stats: BuildStats,
    /// Concept build counters.
    pub concept_stats: BuildStats,
}

/// High-level pipeline: symbol corpus in, joined role/concept graphs out.
///
/// Randomness is consumed in a fixed, documented order: role trees in
/// index order, role cross-tree joins, concept trees, concept cross-tree
/// joins. A fixed seed therefore reproduces a fixture exactly.
#[derive(Debug)]
pub struct FixturePipeline<'a> {
    config: &'a TbgenConfig,
    symbols: &'a SymbolCorpus,
}

impl<'a> FixturePipeline<'a> {
    /// New pipeline over the given configuration and symbol pool.
    pub fn new(config: &'a TbgenConfig, symbols: &'a SymbolCorpus) -> Self {
        Self { config, symbols }
    }

    /// Run the full generation flow.
    pub fn run(&self, rng: &mut StdRng) -> Result<TboxFixture> {
        self.config.validate()?;

        let (roles, role_stats) = self.build_side(
            rng,
            SymbolKind::Role,
            self.symbols.roles(),
            &self.config.role,
            &IdentityDecorator,
        )?;

        // Concept decoration references the joined role graph's vertices.
        let role_names = roles.vertex_names();
        let decorator = ConceptDecorator::new(
            self.config.concept.exists_probability,
            self.config.concept.conflict_probability,
            &role_names,
        );
        let (concepts, concept_stats) = self.build_side(
            rng,
            SymbolKind::Concept,
            self.symbols.concepts(),
            &self.config.concept.tree,
            &decorator,
        )?;

        let role_summary = GraphSummary::compute(&roles);
        let concept_summary = GraphSummary::compute(&concepts);
        debug!(
            role_vertices = role_summary.vertices,
            role_edges = role_summary.edges,
            concept_vertices = concept_summary.vertices,
            concept_edges = concept_summary.edges,
            conflicts = concept_summary.conflicts,
            "fixture generated"
        );

        Ok(TboxFixture {
            roles,
            concepts,
            role_summary,
            concept_summary,
            role_stats,
            concept_stats,
        })
    }

    /// Build, absorb, and join all trees of one kind.
    fn build_side(
        &self,
        rng: &mut StdRng,
        kind: SymbolKind,
        pool: &[String],
        tree: &TreeParams,
        decorator: &dyn NameDecorator,
    ) -> Result<(TboxGraph, BuildStats)> {
        let mut graph = TboxGraph::new(kind, self.config.dedup_vertices);

        let per_tree = if tree.number_of_trees == 0 {
            0
        } else {
            tree.size / tree.number_of_trees
        };
        let params = BuildParams {
            size: per_tree,
            branching_factor: tree.branching_factor,
            max_depth: tree.max_depth,
            edge_probability: tree.edge_probability,
            attach_retry_cap: self.config.attach_retry_cap,
        };

        let mut builder = ForestBuilder::new(kind, params, decorator);
        let mut trees = Vec::with_capacity(tree.number_of_trees);
        for _ in 0..tree.number_of_trees {
            let forest = builder.build(rng, pool)?;
            trees.push(graph.absorb_forest(&forest));
        }

        TreeJoiner::new(tree.joining_probability).join(rng, &mut graph, &trees);

        Ok((graph, builder.stats()))
    }
}
