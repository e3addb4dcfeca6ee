//! Canonical text generation for [`QueryState`] values.
//!
//! This module turns a structured query back into the SQL-subset text the
//! execution layer understands. Generation is a pure fold over the tree and
//! never fails.
//!
//! # Layout
//!
//! Clauses are placed one per line, and only the clauses that carry
//! information are emitted:
//!
//! ```text
//! SELECT <columns> FROM MediaSegments
//! WHERE <filter>          -- only when there is a filter
//! ORDER BY <field> <dir>  -- only when a sort field is set
//! LIMIT <n>               -- only when the limit is non-zero
//! ```
//!
//! # Examples
//!
//! ```
//! use segql::{Condition, Node, Operator, QueryState};
//! use segql::output::to_sql;
//!
//! let mut state = QueryState::default();
//! state.selected_columns = ["ItemId", "ItemName"].iter().map(|s| s.to_string()).collect();
//! state.items.push(Node::Condition(
//!     Condition::new(1, "ItemName", Operator::Like).with_value("Pilot"),
//! ));
//! state.limit = 10;
//!
//! assert_eq!(
//!     to_sql(&state),
//!     "SELECT ItemId, ItemName FROM MediaSegments\nWHERE ItemName LIKE '%Pilot%'\nLIMIT 10"
//! );
//! ```

use crate::ast::{Condition, Connector, Node, Operator, QueryState};
use crate::fields::{self, FieldType};
use crate::value::format_literal;

/// Rendered form of an `IN` list with no values.
const TAUTOLOGY: &str = "1=1";

pub struct SqlPrinter<'a> {
    state: &'a QueryState,
}

impl<'a> SqlPrinter<'a> {
    pub fn new(state: &'a QueryState) -> Self {
        SqlPrinter { state }
    }

    pub fn print(&self) -> String {
        let mut lines = vec![format!(
            "SELECT {} FROM {}",
            self.print_columns(),
            fields::TABLE_NAME
        )];

        if let Some(filter) = self.print_nodes(&self.state.items, self.state.root_connector) {
            lines.push(format!("WHERE {}", filter));
        }

        if !self.state.order_by_field.is_empty() {
            lines.push(format!(
                "ORDER BY {} {}",
                self.state.order_by_field,
                self.state.order_by_dir.as_str()
            ));
        }

        if self.state.limit > 0 {
            lines.push(format!("LIMIT {}", self.state.limit));
        }

        lines.join("\n")
    }

    /// Column list, or `*` when every column is shown in registry order.
    pub fn print_columns(&self) -> String {
        let selected = &self.state.selected_columns;
        let default_order = fields::default_column_order();

        let selects_everything = default_order.iter().all(|name| selected.contains(name))
            && self.state.column_order == default_order;
        if selected.is_empty() || selects_everything {
            return "*".to_string();
        }

        let mut columns: Vec<&str> = self
            .state
            .column_order
            .iter()
            .filter(|name| selected.contains(*name))
            .map(String::as_str)
            .collect();

        // Selected columns missing from the order still have to be returned
        for name in selected {
            if !columns.contains(&name.as_str()) {
                columns.push(name.as_str());
            }
        }

        // Rows with time columns are edited by id, so the id must come along
        let shows_ticks = columns
            .iter()
            .any(|name| fields::field_type(name) == FieldType::Ticks);
        if shows_ticks && !columns.contains(&fields::ID_FIELD) {
            columns.insert(0, fields::ID_FIELD);
        }

        columns.join(", ")
    }

    fn print_nodes(&self, nodes: &[Node], connector: Connector) -> Option<String> {
        let parts: Vec<String> = nodes.iter().filter_map(|n| self.print_node(n)).collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join(&format!(" {} ", connector.as_str())))
    }

    fn print_node(&self, node: &Node) -> Option<String> {
        match node {
            Node::Condition(condition) => Some(self.print_condition(condition)),
            Node::Group(group) => self
                .print_nodes(&group.children, group.connector)
                .map(|inner| format!("({})", inner)),
        }
    }

    pub fn print_condition(&self, condition: &Condition) -> String {
        let field = &condition.field;
        let field_type = fields::field_type(field);
        let literal = |value: &str| format_literal(value, field_type, condition.operator);

        match condition.operator {
            Operator::IsNull | Operator::IsNotNull => {
                format!("{} {}", field, condition.operator.as_str())
            }
            Operator::In | Operator::NotIn => {
                if condition.values.is_empty() {
                    return TAUTOLOGY.to_string();
                }
                let values: Vec<String> = condition.values.iter().map(|v| literal(v.as_str())).collect();
                format!(
                    "{} {} ({})",
                    field,
                    condition.operator.as_str(),
                    values.join(", ")
                )
            }
            Operator::Between => format!(
                "{} BETWEEN {} AND {}",
                field,
                literal(condition.value.as_str()),
                literal(condition.value2.as_str())
            ),
            op => format!("{} {} {}", field, op.as_str(), literal(condition.value.as_str())),
        }
    }
}

/// Generates the canonical text for a query.
///
/// # Examples
///
/// ```
/// use segql::QueryState;
/// use segql::output::to_sql;
///
/// assert_eq!(to_sql(&QueryState::default()), "SELECT * FROM MediaSegments");
/// ```
pub fn to_sql(state: &QueryState) -> String {
    SqlPrinter::new(state).print()
}
