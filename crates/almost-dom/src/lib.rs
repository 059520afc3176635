//! Node tree for almost-HTML documents.
//!
//! This crate provides an arena-based, read-only tree of tagged and text
//! nodes, plus the traversal and query layer that runs over it.
//!
//! # Design
//!
//! The tree stores every node in one contiguous vector and addresses nodes
//! through [`NodeId`] indices. Relationships only point downward: a node
//! owns the ordered list of its children and has no parent pointer, since
//! every query walks from a node towards its descendants.
//!
//! A [`DomTree`] cannot be modified once built. Construction happens through
//! a [`DomTreeBuilder`], which is consumed by [`DomTreeBuilder::finish`].

use std::collections::HashMap;

use serde::Serialize;

/// Query operations over a finished tree.
pub mod query;
/// Debug rendering of nodes and trees.
pub mod render;
/// Pre-order and breadth-first traversal iterators.
pub mod traverse;

pub use traverse::{TraversalOrder, Traverse};

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// Name given to every text node.
pub const TEXT_NODE_NAME: &str = "#text";

/// Name of the synthetic node at the top of every tree.
pub const ROOT_NODE_NAME: &str = "#root";

/// A type-safe index into a [`DomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The `#root` node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// One markup element or one run of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Tag name, or [`TEXT_NODE_NAME`] / [`ROOT_NODE_NAME`] for the sentinels.
    pub name: String,

    /// The exact source text the node was built from.
    ///
    /// For elements this is the interior of the opening tag (`a href=x` for
    /// `<a href=x>`); for text nodes it is the literal text.
    pub raw: String,

    /// Attributes of the opening tag. When a key repeats, the last one wins.
    pub attributes: AttributesMap,

    /// Children in document order.
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create an element node with no children.
    #[must_use]
    pub fn element(
        name: impl Into<String>,
        raw: impl Into<String>,
        attributes: AttributesMap,
    ) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Create a `#text` node holding `raw`.
    #[must_use]
    pub fn text(raw: impl Into<String>) -> Self {
        Self::element(TEXT_NODE_NAME, raw, AttributesMap::new())
    }

    /// Create the synthetic `#root` node.
    #[must_use]
    pub fn root() -> Self {
        Self::element(ROOT_NODE_NAME, String::new(), AttributesMap::new())
    }

    /// Whether this is a `#text` node.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.name == TEXT_NODE_NAME
    }

    /// Returns the attribute value if the key is present.
    ///
    /// A boolean attribute such as `disabled` in `<input disabled>` is present
    /// with an empty value, which is distinct from `None`.
    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns the tokens of the `class` attribute, split on single spaces.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.get_attribute("class")
            .map(|list| list.split(' ').collect())
            .unwrap_or_default()
    }
}

/// Arena-based, read-only node tree.
///
/// The `#root` node is always at [`NodeId::ROOT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a finished tree, which holds at least the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get all children of a node. Unknown IDs have no children.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Get the tag name of a node.
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }
}

/// Incremental constructor for a [`DomTree`].
///
/// Nodes can only be appended; once [`finish`](Self::finish) is called the
/// resulting tree is frozen.
#[derive(Debug, Clone)]
pub struct DomTreeBuilder {
    nodes: Vec<Node>,
}

impl DomTreeBuilder {
    /// Create a builder holding only the `#root` node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
        }
    }

    /// Allocate `node` and append it as the last child of `parent`.
    ///
    /// Returns `None` and allocates nothing if `parent` is not in this
    /// builder.
    pub fn append_child(&mut self, parent: NodeId, node: Node) -> Option<NodeId> {
        let id = NodeId(self.nodes.len());
        self.nodes.get_mut(parent.0)?.children.push(id);
        self.nodes.push(node);
        Some(id)
    }

    /// Get a node appended so far.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Freeze the tree.
    #[must_use]
    pub fn finish(self) -> DomTree {
        DomTree { nodes: self.nodes }
    }
}

impl Default for DomTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
