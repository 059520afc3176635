use std::collections::VecDeque;
use std::iter::Skip;

use crate::{DomTree, NodeId};

/// Order in which [`Traverse`] visits a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// Pre-order depth-first: a node, then each child subtree left to right.
    #[default]
    DepthFirst,
    /// Level by level, left to right within a level.
    BreadthFirst,
}

/// Iterator over a subtree, starting with the subtree's own root.
///
/// Uses an explicit work queue, so arbitrarily deep trees do not grow the
/// call stack.
#[derive(Debug, Clone)]
pub struct Traverse<'a> {
    tree: &'a DomTree,
    order: TraversalOrder,
    pending: VecDeque<NodeId>,
}

impl<'a> Traverse<'a> {
    /// Start a traversal at `start`. An unknown ID yields nothing.
    #[must_use]
    pub fn new(tree: &'a DomTree, start: NodeId, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        if tree.get(start).is_some() {
            pending.push_back(start);
        }
        Self {
            tree,
            order,
            pending,
        }
    }
}

impl Iterator for Traverse<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.pending.pop_front()?;
        let children = self.tree.children(id);
        match self.order {
            TraversalOrder::DepthFirst => {
                for &child in children.iter().rev() {
                    self.pending.push_front(child);
                }
            }
            TraversalOrder::BreadthFirst => self.pending.extend(children.iter().copied()),
        }
        Some(id)
    }
}

impl DomTree {
    /// Visit `id` and everything below it in the given order.
    #[must_use]
    pub fn traverse(&self, id: NodeId, order: TraversalOrder) -> Traverse<'_> {
        Traverse::new(self, id, order)
    }

    /// Visit everything below `id` in pre-order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Skip<Traverse<'_>> {
        self.traverse(id, TraversalOrder::DepthFirst).skip(1)
    }
}
