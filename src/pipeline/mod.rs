//! High-level pipelines: fixture generation and parameter sweeps.

pub mod generate;
pub mod sweep;

pub use generate::{FixturePipeline, TboxFixture};
pub use sweep::SweepRunner;
