#![forbid(unsafe_code)]
#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

//! # tbgen-core
//!
//! Benchmark fixture synthesis for a description-logic ontology reasoner:
//! - random symbol corpora (concept and role names)
//! - constrained random hierarchies (branching, depth, duplicate-edge bounds)
//! - existential-role and negation decoration for conflict injection
//! - acyclic cross-tree joining and text-format serialization
//!
//! The generator makes no claim about the semantic content of the produced
//! axioms; its contract is structural. Generation is deterministic for a
//! fixed seed: a single `StdRng` is threaded through every step in a
//! documented order.

pub mod config;
pub mod errors;
pub mod forest;
pub mod graph;
pub mod persistence;
pub mod pipeline;
pub mod symbols;
pub mod types;

pub use config::TbgenConfig;
pub use errors::{Result, TbgenError};
pub use forest::{Forest, ForestBuilder};
pub use graph::TboxGraph;
pub use pipeline::{FixturePipeline, SweepRunner, TboxFixture};
pub use symbols::SymbolCorpus;
pub use types::{Symbol, SymbolKind};
