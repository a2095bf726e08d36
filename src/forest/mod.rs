//! Hierarchy construction: node arena, name decorators, and the builder.

pub mod builder;
pub mod decorate;
pub mod node;

pub use builder::{BuildParams, BuildStats, ForestBuilder};
pub use decorate::{ConceptDecorator, DecoratedName, IdentityDecorator, NameDecorator};
pub use node::{Forest, Node, NodeId};
