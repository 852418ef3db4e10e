//! Random-access index over a DOM document snapshot.

use std::collections::HashMap;

use pagetarget_protocols::{DomDocument, DomNode};

/// One indexed node: the snapshot node plus its traversal-derived parent.
#[derive(Debug, Clone)]
pub struct IndexedNode<'a> {
    /// The snapshot node.
    pub node: &'a DomNode,
    /// Parent node id; `None` for the document root.
    pub parent_id: Option<i64>,
}

/// Flat node-id index over a nested DOM document tree.
///
/// Ancestor and sibling-position lookups would otherwise re-walk the tree
/// on every query; the index makes them map lookups. Rebuilt fresh per
/// synthesis call, never cached across snapshots.
#[derive(Debug)]
pub struct DomTreeIndex<'a> {
    nodes: HashMap<i64, IndexedNode<'a>>,
}

impl<'a> DomTreeIndex<'a> {
    /// Build an index covering every node in the document, root included.
    ///
    /// Explicit-stack depth-first walk; snapshot depth is unbounded, so
    /// recursion is not safe here. Children are pushed in reverse so the
    /// walk visits root, then children left to right.
    pub fn build(document: &'a DomDocument) -> Self {
        let mut nodes = HashMap::new();
        let mut stack: Vec<(&'a DomNode, Option<i64>)> = vec![(&document.root, None)];

        while let Some((node, parent_id)) = stack.pop() {
            nodes.insert(node.node_id, IndexedNode { node, parent_id });
            if let Some(children) = &node.children {
                for child in children.iter().rev() {
                    stack.push((child, Some(node.node_id)));
                }
            }
        }

        Self { nodes }
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the index holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn get(&self, node_id: i64) -> Option<&IndexedNode<'a>> {
        self.nodes.get(&node_id)
    }

    /// Parent entry of `node_id`; `None` at the root or for unknown ids.
    pub fn parent_of(&self, node_id: i64) -> Option<&IndexedNode<'a>> {
        let parent_id = self.nodes.get(&node_id)?.parent_id?;
        self.nodes.get(&parent_id)
    }

    /// Children of `parent` that are elements.
    ///
    /// `nodeType` 1 is an element; unset is treated as one. Text and
    /// comment nodes do not count toward `:nth-child` positions.
    pub fn element_children(parent: &DomNode) -> Vec<&DomNode> {
        parent
            .children
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|child| matches!(child.node_type, Some(1) | None))
            .collect()
    }

    /// 1-based position of `node_id` among `parent`'s element children,
    /// matching CSS `:nth-child()` numbering. `None` when absent.
    pub fn nth_child_index(parent: &DomNode, node_id: i64) -> Option<usize> {
        Self::element_children(parent)
            .iter()
            .position(|child| child.node_id == node_id)
            .map(|position| position + 1)
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
