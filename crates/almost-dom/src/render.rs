use std::fmt;

use crate::{DomTree, Node, NodeId};

/// Renders as `Node { "name" ["key"="value", ...] "raw"}`, with attributes
/// sorted so output is stable across runs.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attributes: Vec<String> = self
            .attributes
            .iter()
            .map(|(key, value)| format!("{key:?}={value:?}"))
            .collect();
        attributes.sort();
        write!(
            f,
            "Node {{ {:?} [{}] {:?}}}",
            self.name,
            attributes.join(", "),
            self.raw
        )
    }
}

/// One line per node, indented two spaces per level.
impl fmt::Display for DomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(NodeId, usize)> = vec![(NodeId::ROOT, 0)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            writeln!(f, "{}{node}", "  ".repeat(depth))?;
            stack.extend(node.children.iter().rev().map(|&child| (child, depth + 1)));
        }
        Ok(())
    }
}
