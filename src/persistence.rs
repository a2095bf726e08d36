//! Fixture persistence: symbol/TBox text formats, run metadata, dot export.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use petgraph::dot::{Config as DotConfig, Dot};
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::config::TbgenConfig;
use crate::errors::Result;
use crate::graph::TboxGraph;
use crate::pipeline::TboxFixture;
use crate::symbols::SymbolCorpus;
use crate::types::{
    SymbolKind, BEGIN_SYMBOL, BEGIN_TBOX, END_SYMBOL, END_TBOX, EXISTS_PREFIX, NOT_PREFIX,
};

/// Metadata written beside each fixture so a run can be reproduced.
#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureMetadata {
    /// Crate version that produced the fixture.
    pub version: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Seed the run was started with.
    pub seed: u64,
    /// Configuration used.
    pub config: TbgenConfig,
}

impl FixtureMetadata {
    /// Metadata for a run with the given configuration and seed.
    pub fn new(config: &TbgenConfig, seed: u64) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            seed,
            config: config.clone(),
        }
    }
}

/// Write a symbol corpus in the `BEGINSYMBOL` block format.
pub fn write_symbols(path: &Path, corpus: &SymbolCorpus) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", BEGIN_SYMBOL)?;
    for name in corpus.roles() {
        writeln!(w, "{} : {}", SymbolKind::Role, name)?;
    }
    for name in corpus.concepts() {
        writeln!(w, "{} : {}", SymbolKind::Concept, name)?;
    }
    writeln!(w, "{}", END_SYMBOL)?;
    Ok(())
}

/// Directory name encoding total node count, configured depth, conflict
/// count, and iteration index, so batch sweeps never overwrite prior runs.
pub fn fixture_dir_name(config: &TbgenConfig, fixture: &TboxFixture, iteration: usize) -> String {
    let nodes = fixture.role_summary.vertices + fixture.concept_summary.vertices;
    let depth = config.role.max_depth.max(config.concept.tree.max_depth);
    format!(
        "Onto_n{}_d{}_c{}_i{}",
        nodes, depth, fixture.concept_summary.conflicts, iteration
    )
}

/// Write one fixture into its derived directory below `root`.
///
/// Produces `tbox.txt`, `metadata.json`, and optionally `graph.dot`.
/// Returns the directory written.
pub fn write_fixture(
    root: &Path,
    config: &TbgenConfig,
    fixture: &TboxFixture,
    iteration: usize,
    seed: u64,
    with_dot: bool,
) -> Result<PathBuf> {
    let dir = root.join(fixture_dir_name(config, fixture, iteration));
    fs::create_dir_all(&dir)?;

    write_tbox(&dir.join("tbox.txt"), fixture)?;

    let meta_file = File::create(dir.join("metadata.json"))?;
    serde_json::to_writer_pretty(meta_file, &FixtureMetadata::new(config, seed))?;

    if with_dot {
        write_dot(&dir.join("graph.dot"), fixture)?;
    }

    Ok(dir)
}

/// Write the combined symbol + axiom file for a fixture.
///
/// The symbol block lists role vertices first, then concept vertices with
/// decorations stripped (first-seen order, deduplicated after cleaning).
/// The axiom block holds `<lhs> < <rhs>` lines, role axioms before concept
/// axioms, each side in edge-discovery order; the direction is exactly the
/// parent-to-child relation established during construction.
pub fn write_tbox(path: &Path, fixture: &TboxFixture) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{}", BEGIN_SYMBOL)?;
    let mut seen = HashSet::new();
    for name in fixture.roles.vertex_names() {
        if seen.insert(name.clone()) {
            writeln!(w, "{} : {}", SymbolKind::Role, name)?;
        }
    }
    seen.clear();
    for name in fixture.concepts.vertex_names() {
        let cleaned = clean_concept_name(&name);
        if seen.insert(cleaned.to_string()) {
            writeln!(w, "{} : {}", SymbolKind::Concept, cleaned)?;
        }
    }
    writeln!(w, "{}", END_SYMBOL)?;
    writeln!(w)?;

    writeln!(w, "{}", BEGIN_TBOX)?;
    for (lhs, rhs) in fixture.roles.edge_names() {
        writeln!(w, "{} < {}", lhs, rhs)?;
    }
    for (lhs, rhs) in fixture.concepts.edge_names() {
        writeln!(w, "{} < {}", lhs, rhs)?;
    }
    writeln!(w, "{}", END_TBOX)?;
    writeln!(w)?;
    Ok(())
}

/// Write a graphviz rendering of both graphs into one digraph.
pub fn write_dot(path: &Path, fixture: &TboxFixture) -> Result<()> {
    let mut combined: DiGraph<String, String> = DiGraph::new();
    append_graph(&mut combined, &fixture.roles);
    append_graph(&mut combined, &fixture.concepts);

    let mut file = File::create(path)?;
    write!(
        file,
        "{}",
        Dot::with_config(&combined, &[DotConfig::EdgeNoLabel])
    )?;
    Ok(())
}

fn append_graph(combined: &mut DiGraph<String, String>, graph: &TboxGraph) {
    let inner = graph.inner();
    let mapped: Vec<_> = inner
        .node_indices()
        .map(|ix| combined.add_node(inner[ix].name.clone()))
        .collect();
    for edge in inner.edge_references() {
        combined.add_edge(
            mapped[edge.source().index()],
            mapped[edge.target().index()],
            String::new(),
        );
    }
}

/// Strip the decorations off a concept display name for the symbol block.
/// `NOT` may wrap an existential, so it comes off first.
fn clean_concept_name(name: &str) -> &str {
    let name = name.strip_prefix(NOT_PREFIX).unwrap_or(name);
    name.strip_prefix(EXISTS_PREFIX).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_concept_name_strips_decorations() {
        assert_eq!(clean_concept_name("Engine"), "Engine");
        assert_eq!(clean_concept_name("NOT Engine"), "Engine");
        assert_eq!(clean_concept_name("EXISTS hasPart"), "hasPart");
        assert_eq!(clean_concept_name("NOT EXISTS hasPart"), "hasPart");
    }

    #[test]
    fn test_dir_name_encodes_counts() {
        use crate::forest::BuildStats;
        use crate::graph::GraphSummary;

        let config = TbgenConfig::default();
        let fixture = TboxFixture {
            roles: TboxGraph::new(SymbolKind::Role, true),
            concepts: TboxGraph::new(SymbolKind::Concept, true),
            role_summary: GraphSummary {
                vertices: 4,
                ..GraphSummary::default()
            },
            concept_summary: GraphSummary {
                vertices: 12,
                conflicts: 3,
                ..GraphSummary::default()
            },
            role_stats: BuildStats::default(),
            concept_stats: BuildStats::default(),
        };

        // default depths: role 3, concept 4
        assert_eq!(fixture_dir_name(&config, &fixture, 2), "Onto_n16_d4_c3_i2");
    }
}
