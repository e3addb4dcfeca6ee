use crate::ast::{Condition, Node, NodeId};
use crate::session::NodeIds;

/// Find a node anywhere in the tree by id.
///
/// Depth-first, in document order: a group is checked before its children.
pub fn find_node(items: &[Node], id: NodeId) -> Option<&Node> {
    for node in items {
        if node.id() == id {
            return Some(node);
        }
        if let Node::Group(group) = node {
            if let Some(found) = find_node(&group.children, id) {
                return Some(found);
            }
        }
    }
    None
}

pub fn find_node_mut(items: &mut [Node], id: NodeId) -> Option<&mut Node> {
    for node in items.iter_mut() {
        if node.id() == id {
            return Some(node);
        }
        if let Node::Group(group) = node {
            if let Some(found) = find_node_mut(&mut group.children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Detach the node with `id` from its parent list and return it.
///
/// Removing a group takes its whole subtree with it.
pub fn remove_node(items: &mut Vec<Node>, id: NodeId) -> Option<Node> {
    if let Some(index) = items.iter().position(|node| node.id() == id) {
        return Some(items.remove(index));
    }

    items.iter_mut().find_map(|node| match node {
        Node::Group(group) => remove_node(&mut group.children, id),
        Node::Condition(_) => None,
    })
}

/// Swap the node with `id` for `replacement`, returning the old node.
pub fn replace_node(items: &mut [Node], id: NodeId, replacement: Node) -> Option<Node> {
    let slot = find_node_mut(items, id)?;
    Some(std::mem::replace(slot, replacement))
}

/// Every condition in the tree, depth-first.
pub fn flatten_conditions(items: &[Node]) -> Vec<&Condition> {
    let mut conditions = Vec::new();
    collect_conditions(items, &mut conditions);
    conditions
}

fn collect_conditions<'a>(items: &'a [Node], out: &mut Vec<&'a Condition>) {
    for node in items {
        match node {
            Node::Condition(condition) => out.push(condition),
            Node::Group(group) => collect_conditions(&group.children, out),
        }
    }
}

/// Largest id in the tree, or `0` for an empty tree.
pub fn max_node_id(items: &[Node]) -> NodeId {
    items
        .iter()
        .map(|node| match node {
            Node::Condition(c) => c.id,
            Node::Group(g) => g.id.max(max_node_id(&g.children)),
        })
        .max()
        .unwrap_or(0)
}

/// Give every node a fresh id from `ids`, depth-first in document order.
pub fn renumber_nodes(items: &mut [Node], ids: &mut NodeIds) {
    for node in items.iter_mut() {
        match node {
            Node::Condition(c) => c.id = ids.next_id(),
            Node::Group(g) => {
                g.id = ids.next_id();
                renumber_nodes(&mut g.children, ids);
            }
        }
    }
}
