use serde::{Deserialize, Serialize};

use crate::ast::{Connector, Operator};

/// Identifier stamped on every node by its [`crate::Session`].
pub type NodeId = u64;

/// Leaf filter predicate over a single field.
///
/// Values are held in display form (see [`crate::value`]). Which of the value
/// slots are meaningful depends on the operator:
///
/// - `IS NULL` / `IS NOT NULL` - none
/// - `BETWEEN` - `value` and `value2`
/// - `IN` / `NOT IN` - `values`
/// - everything else - `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: NodeId,
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub value2: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Condition {
    pub fn new(id: NodeId, field: impl Into<String>, operator: Operator) -> Self {
        Condition {
            id,
            field: field.into(),
            operator,
            value: String::new(),
            value2: String::new(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_range(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.value = low.into();
        self.value2 = high.into();
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Vec::new();
        for value in values {
            self.push_value(value);
        }
        self
    }

    /// Append to the IN list. Returns `false` if the value was already present.
    pub fn push_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Drop any value slot the current operator does not use.
    pub fn clear_unused_values(&mut self) {
        if self.operator.is_null_check() {
            self.value.clear();
            self.value2.clear();
            self.values.clear();
            return;
        }
        if self.operator != Operator::Between {
            self.value2.clear();
        }
        if self.operator.is_list() {
            self.value.clear();
        } else {
            self.values.clear();
        }
    }
}

/// AND/OR-connected collection of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: NodeId,
    pub connector: Connector,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(id: NodeId, connector: Connector) -> Self {
        Group {
            id,
            connector,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

/// Filter tree node.
///
/// A group exclusively owns its children, so the tree can never share
/// subtrees or contain cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Condition(Condition),
    Group(Group),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Condition(c) => c.id,
            Node::Group(g) => g.id,
        }
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Node::Condition(c) => Some(c),
            Node::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            Node::Condition(_) => None,
        }
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}
