use std::collections::HashSet;

use crate::{DomTree, Node, NodeId, TraversalOrder};

impl Node {
    /// Whether this node is a `tag` element carrying every class in `classes`.
    ///
    /// With no classes requested the tag name alone decides, even when the
    /// node has no `class` attribute.
    #[must_use]
    pub fn has_tag_and_classes(&self, tag: &str, classes: &[&str]) -> bool {
        if self.name != tag {
            return false;
        }
        let own: HashSet<&str> = self.classes().into_iter().collect();
        classes.iter().all(|class| own.contains(class))
    }
}

impl DomTree {
    /// Returns the value of `key` on node `id`, if both exist.
    #[must_use]
    pub fn get_attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.get(id)?.get_attribute(key)
    }

    /// All descendants of `id` whose name is one of `tags`, in pre-order.
    #[must_use]
    pub fn get_elements_by_tags(&self, id: NodeId, tags: &[&str]) -> Vec<NodeId> {
        let wanted: HashSet<&str> = tags.iter().copied().collect();
        self.collect_descendants(id, |node| wanted.contains(node.name.as_str()))
    }

    /// All descendants of `id` named `tag` whose `class` attribute contains
    /// every entry of `classes`, in pre-order.
    #[must_use]
    pub fn get_elements_by_tag_and_class(
        &self,
        id: NodeId,
        tag: &str,
        classes: &[&str],
    ) -> Vec<NodeId> {
        self.collect_descendants(id, |node| node.has_tag_and_classes(tag, classes))
    }

    /// First descendant of `id` named `tag`, in pre-order.
    #[must_use]
    pub fn first_element_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(id)
            .find(|&candidate| self.name(candidate) == Some(tag))
    }

    /// Concatenated source text of `id` and its descendants, in pre-order.
    ///
    /// This reuses each node's `raw` text instead of serializing attributes,
    /// so text runs come back verbatim.
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        self.traverse(id, TraversalOrder::DepthFirst)
            .filter_map(|n| self.get(n))
            .map(|node| node.raw.as_str())
            .collect()
    }

    /// Concatenated text of every non-empty `#text` node under `id`.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.traverse(id, TraversalOrder::DepthFirst)
            .filter_map(|n| self.get(n))
            .filter(|node| node.is_text() && !node.raw.is_empty())
            .map(|node| node.raw.as_str())
            .collect()
    }

    fn collect_descendants(&self, id: NodeId, keep: impl Fn(&Node) -> bool) -> Vec<NodeId> {
        self.descendants(id)
            .filter(|&n| self.get(n).is_some_and(&keep))
            .collect()
    }
}
