//! Arena-backed node model for the hierarchies being built.

use crate::errors::{Result, TbgenError};
use crate::types::SymbolKind;

/// Index of a node inside its [`Forest`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// One occurrence of a symbol inside a hierarchy being built.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind of the node; equals the kind of every ancestor and descendant.
    pub kind: SymbolKind,
    /// Symbol name, possibly carrying `EXISTS`/`NOT` decorations. Decoration
    /// happens once, at creation time.
    pub display_name: String,
    /// Whether the negation decoration was applied at creation time.
    pub negated: bool,
    /// Ordered children, as arena indices.
    pub children: Vec<NodeId>,
    /// Parent, once this node has been attached.
    pub parent: Option<NodeId>,
    /// Parent depth + 1; 0 while detached.
    pub depth: u32,
    /// True only for the first node of the arena. Advisory.
    pub is_root: bool,
}

/// Bookkeeping arena for one builder invocation.
///
/// Every node produced by the builder lives here, attached or not. Nodes
/// that never found a parent are extra roots, hence "forest" rather than
/// "tree". Children are stored as index lists, so a node is owned by the
/// arena and referenced from at most one parent.
#[derive(Debug)]
pub struct Forest {
    kind: SymbolKind,
    nodes: Vec<Node>,
}

impl Forest {
    /// Empty forest for nodes of the given kind.
    pub fn new(kind: SymbolKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
        }
    }

    /// Kind this forest was created for.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Number of nodes produced so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been produced yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `id`. Panics on a foreign id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes with their ids, in production order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Add a detached node and return its id. The first node of the arena
    /// is marked as the tree root.
    pub fn push_node(&mut self, kind: SymbolKind, display_name: String, negated: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            display_name,
            negated,
            children: Vec::new(),
            parent: None,
            depth: 0,
            is_root: id.0 == 0,
        });
        id
    }

    /// Whether `parent` can accept a child named `child_name` under the
    /// given bounds: branching bound, depth bound, no duplicate child name,
    /// and not negated (negated nodes are terminal by policy; role nodes
    /// are never negated, so the check is vacuous for them).
    pub fn can_attach(
        &self,
        parent: NodeId,
        child_name: &str,
        branching_factor: usize,
        max_depth: u32,
    ) -> bool {
        let p = &self.nodes[parent.0];
        p.children.len() < branching_factor
            && p.depth < max_depth
            && !p.negated
            && !p
                .children
                .iter()
                .any(|&c| self.nodes[c.0].display_name == child_name)
    }

    /// Attach `child` under `parent`, setting the child's depth.
    ///
    /// Fails when the kinds differ. A node may be attached at most once;
    /// the builder only ever attaches freshly produced nodes.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_kind = self.nodes[parent.0].kind;
        let child_kind = self.nodes[child.0].kind;
        if parent_kind != child_kind {
            return Err(TbgenError::HeterogeneousAttach {
                parent_kind,
                parent: self.nodes[parent.0].display_name.clone(),
                child_kind,
                child: self.nodes[child.0].display_name.clone(),
                index: child.0,
            });
        }
        debug_assert!(
            self.nodes[child.0].parent.is_none(),
            "a node may be attached at most once"
        );

        let depth = self.nodes[parent.0].depth + 1;
        self.nodes[child.0].parent = Some(parent);
        self.nodes[child.0].depth = depth;
        self.nodes[parent.0].children.push(child);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest_with(names: &[&str]) -> (Forest, Vec<NodeId>) {
        let mut forest = Forest::new(SymbolKind::Concept);
        let ids = names
            .iter()
            .map(|n| forest.push_node(SymbolKind::Concept, n.to_string(), false))
            .collect();
        (forest, ids)
    }

    #[test]
    fn test_attach_sets_depth_and_parent() {
        let (mut forest, ids) = forest_with(&["a", "b", "c"]);
        forest.attach(ids[0], ids[1]).unwrap();
        forest.attach(ids[1], ids[2]).unwrap();

        assert_eq!(forest.node(ids[1]).depth, 1);
        assert_eq!(forest.node(ids[2]).depth, 2);
        assert_eq!(forest.node(ids[2]).parent, Some(ids[1]));
        assert_eq!(forest.node(ids[0]).children, vec![ids[1]]);
    }

    #[test]
    fn test_first_node_is_root() {
        let (forest, ids) = forest_with(&["a", "b"]);
        assert!(forest.node(ids[0]).is_root);
        assert!(!forest.node(ids[1]).is_root);
    }

    #[test]
    fn test_heterogeneous_attach_is_rejected() {
        let mut forest = Forest::new(SymbolKind::Concept);
        let parent = forest.push_node(SymbolKind::Concept, "c".into(), false);
        let child = forest.push_node(SymbolKind::Role, "r".into(), false);

        let err = forest.attach(parent, child).unwrap_err();
        assert!(matches!(err, TbgenError::HeterogeneousAttach { index: 1, .. }));
        assert!(forest.node(parent).children.is_empty());
    }

    #[test]
    fn test_can_attach_enforces_branching_bound() {
        let (mut forest, ids) = forest_with(&["p", "a", "b"]);
        forest.attach(ids[0], ids[1]).unwrap();
        assert!(!forest.can_attach(ids[0], "b", 1, 10));
        assert!(forest.can_attach(ids[0], "b", 2, 10));
    }

    #[test]
    fn test_can_attach_enforces_depth_bound() {
        let (mut forest, ids) = forest_with(&["p", "a", "b"]);
        forest.attach(ids[0], ids[1]).unwrap();
        // ids[1] sits at depth 1; with max_depth 1 it cannot take children.
        assert!(!forest.can_attach(ids[1], "b", 10, 1));
        assert!(forest.can_attach(ids[1], "b", 10, 2));
    }

    #[test]
    fn test_can_attach_rejects_duplicate_child_name() {
        let (mut forest, ids) = forest_with(&["p", "x", "x"]);
        forest.attach(ids[0], ids[1]).unwrap();
        assert!(!forest.can_attach(ids[0], "x", 10, 10));
        assert!(forest.can_attach(ids[0], "y", 10, 10));
    }

    #[test]
    fn test_negated_parent_is_terminal() {
        let mut forest = Forest::new(SymbolKind::Concept);
        let p = forest.push_node(SymbolKind::Concept, "NOT x".into(), true);
        assert!(!forest.can_attach(p, "y", 10, 10));
    }
}
