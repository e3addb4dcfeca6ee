use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ast::{Connector, Node, SortDirection};
use crate::fields;

/// Complete structured query.
///
/// This is the value a renderer draws from and writes back to. It is produced
/// by parsing text ([`crate::parser::Parser`]) and consumed by the generator
/// ([`crate::output`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    /// Display order of all known columns
    #[serde(default = "fields::default_column_order")]
    pub column_order: Vec<String>,

    /// Columns to return; empty means every column
    #[serde(default)]
    pub selected_columns: BTreeSet<String>,

    /// Connector joining the top-level `items`
    #[serde(default)]
    pub root_connector: Connector,

    /// Top-level filter nodes
    #[serde(default)]
    pub items: Vec<Node>,

    /// Sort column; empty means unordered
    #[serde(default)]
    pub order_by_field: String,

    #[serde(default)]
    pub order_by_dir: SortDirection,

    /// Row limit; zero means unlimited
    #[serde(default)]
    pub limit: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            column_order: fields::default_column_order(),
            selected_columns: BTreeSet::new(),
            root_connector: Connector::And,
            items: Vec::new(),
            order_by_field: String::new(),
            order_by_dir: SortDirection::Asc,
            limit: 0,
        }
    }
}
