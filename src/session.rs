//! Editing session: owns the node id counter and the current query.
//!
//! Every node a session creates, whether through the factories below or by
//! importing text, gets an id from the session's own counter. Two sessions
//! never share ids state.

use crate::ast::{Condition, Connector, Group, Node, NodeId, Operator, QueryState};
use crate::fields;
use crate::lexer::Lexer;
use crate::output;
use crate::parser::{ParseError, Parser};
use crate::tree;

/// Largest id a counter may be seeded after.
const MAX_SEED: NodeId = NodeId::MAX / 2;

/// Monotonically increasing source of [`NodeId`]s.
#[derive(Debug, Clone)]
pub struct NodeIds {
    next: NodeId,
}

impl NodeIds {
    pub fn new() -> Self {
        NodeIds { next: 1 }
    }

    /// A counter whose first id is greater than `id`.
    ///
    /// Returns `None` when `id` sits in the upper half of the id range, where
    /// the counter could run out.
    pub fn starting_after(id: NodeId) -> Option<Self> {
        if id > MAX_SEED {
            return None;
        }
        Some(NodeIds { next: id + 1 })
    }

    pub fn next_id(&mut self) -> NodeId {
        let id = self.next;
        // Counters start at most halfway up the range
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for NodeIds {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    ids: NodeIds,
    state: QueryState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a state built elsewhere (for example deserialized from JSON).
    ///
    /// Ids are kept unless they reach into the upper half of the id range.
    /// Then every node is renumbered from 1 in document order.
    pub fn with_state(mut state: QueryState) -> Self {
        let max_id = tree::max_node_id(&state.items);
        let ids = match NodeIds::starting_after(max_id) {
            Some(ids) => ids,
            None => {
                tracing::debug!(max_id, "Renumbering adopted query ids");
                let mut ids = NodeIds::new();
                tree::renumber_nodes(&mut state.items, &mut ids);
                ids
            }
        };
        Session { ids, state }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut QueryState {
        &mut self.state
    }

    pub fn into_state(self) -> QueryState {
        self.state
    }

    /// New empty condition on `field`, using the field type's first operator.
    pub fn new_condition(&mut self, field: &str) -> Condition {
        let operator = fields::field_type(field).default_operator();
        Condition::new(self.ids.next_id(), fields::canonical_name(field), operator)
    }

    pub fn new_group(&mut self, connector: Connector) -> Group {
        Group::new(self.ids.next_id(), connector)
    }

    /// Parse `text` and replace the current state with the result.
    ///
    /// On error the current state is left exactly as it was.
    pub fn import(&mut self, text: &str) -> Result<(), ParseError> {
        let parsed = Parser::new(Lexer::new(text), &mut self.ids).parse_query();
        match parsed {
            Ok(state) => {
                tracing::debug!(items = state.items.len(), "Query imported");
                self.state = state;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Query import rejected");
                Err(e)
            }
        }
    }

    /// Canonical text for the current state.
    pub fn export(&self) -> String {
        output::to_sql(&self.state)
    }

    /// Reassign a condition's operator, clearing the value slots it no longer
    /// uses. Returns `false` when `id` is not a condition in this state.
    pub fn set_operator(&mut self, id: NodeId, operator: Operator) -> bool {
        match tree::find_node_mut(&mut self.state.items, id) {
            Some(Node::Condition(condition)) => {
                condition.operator = operator;
                condition.clear_unused_values();
                true
            }
            _ => false,
        }
    }

    /// Detach a node from wherever it sits in the tree.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        tree::remove_node(&mut self.state.items, id)
    }
}
