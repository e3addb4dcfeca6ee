use serde::{Deserialize, Serialize};

/// Condition operators.
///
/// Serialized with their SQL spelling so a renderer can show them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    // Comparison
    /// Equal (`=`)
    #[serde(rename = "=")]
    Eq,
    /// Not equal (`!=`)
    #[serde(rename = "!=")]
    NotEq,
    /// Less than (`<`)
    #[serde(rename = "<")]
    Lt,
    /// Greater than (`>`)
    #[serde(rename = ">")]
    Gt,
    /// Less than or equal (`<=`)
    #[serde(rename = "<=")]
    LtEq,
    /// Greater than or equal (`>=`)
    #[serde(rename = ">=")]
    GtEq,

    // Pattern
    /// Substring match, value is wrapped in `%...%` on output
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,

    // Set membership
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,

    // Range
    /// Inclusive range, uses both `value` and `value2`
    #[serde(rename = "BETWEEN")]
    Between,

    // Null checks
    #[serde(rename = "IS NULL")]
    IsNull,
    #[serde(rename = "IS NOT NULL")]
    IsNotNull,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::LtEq => "<=",
            Operator::GtEq => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }

    pub fn is_null_check(&self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Operator::Like | Operator::NotLike)
    }
}

/// Logical connector joining sibling nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}
