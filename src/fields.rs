//! Static registry of the columns exposed by the `MediaSegments` relation.
//!
//! Registry order is the default column order used by `SELECT *` and by a
//! fresh [`crate::QueryState`].

use serde::Serialize;

use crate::ast::Operator;

/// Name of the single relation every query targets.
pub const TABLE_NAME: &str = "MediaSegments";

/// Column that identifies a record. Always selected alongside tick columns.
pub const ID_FIELD: &str = "ItemId";

/// Value type of a field, which decides both its legal operators and how its
/// literals are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free text, quoted
    Text,
    /// Base-10 integer
    Integer,
    /// Media position in 100 ns ticks, displayed as `HH:MM:SS.mmm`
    Ticks,
    /// `1` or `0`
    Boolean,
    /// Text drawn from a known set of values (autocomplete-backed)
    Enumerable,
}

const TEXT_OPERATORS: &[Operator] = &[
    Operator::Eq,
    Operator::NotEq,
    Operator::Like,
    Operator::NotLike,
    Operator::IsNull,
    Operator::IsNotNull,
];

const ENUMERABLE_OPERATORS: &[Operator] = &[
    Operator::Eq,
    Operator::NotEq,
    Operator::In,
    Operator::NotIn,
    Operator::Like,
    Operator::NotLike,
    Operator::IsNull,
    Operator::IsNotNull,
];

const NUMERIC_OPERATORS: &[Operator] = &[
    Operator::Eq,
    Operator::NotEq,
    Operator::Lt,
    Operator::Gt,
    Operator::LtEq,
    Operator::GtEq,
    Operator::Between,
    Operator::IsNull,
    Operator::IsNotNull,
];

const BOOLEAN_OPERATORS: &[Operator] = &[Operator::Eq];

impl FieldType {
    /// Legal operators, in the order a picker should list them.
    pub fn operators(&self) -> &'static [Operator] {
        match self {
            FieldType::Text => TEXT_OPERATORS,
            FieldType::Enumerable => ENUMERABLE_OPERATORS,
            FieldType::Integer | FieldType::Ticks => NUMERIC_OPERATORS,
            FieldType::Boolean => BOOLEAN_OPERATORS,
        }
    }

    pub fn allows(&self, operator: Operator) -> bool {
        self.operators().contains(&operator)
    }

    pub fn default_operator(&self) -> Operator {
        self.operators()[0]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Ticks => "ticks",
            FieldType::Boolean => "boolean",
            FieldType::Enumerable => "enumerable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

const fn field(name: &'static str, label: &'static str, field_type: FieldType) -> FieldDefinition {
    FieldDefinition {
        name,
        label,
        field_type,
    }
}

pub const FIELDS: &[FieldDefinition] = &[
    field("ItemId", "Item ID", FieldType::Text),
    field("ItemName", "Item Name", FieldType::Text),
    field("SeriesName", "Series", FieldType::Enumerable),
    field("SeasonNumber", "Season", FieldType::Integer),
    field("EpisodeNumber", "Episode", FieldType::Integer),
    field("ItemType", "Item Type", FieldType::Enumerable),
    field("IntroStartTicks", "Intro Start", FieldType::Ticks),
    field("IntroEndTicks", "Intro End", FieldType::Ticks),
    field("CreditsStartTicks", "Credits Start", FieldType::Ticks),
    field("CreditsEndTicks", "Credits End", FieldType::Ticks),
    field("HasIntro", "Has Intro", FieldType::Boolean),
    field("HasCredits", "Has Credits", FieldType::Boolean),
];

/// Look up a field by name, ignoring ASCII case.
pub fn find_field(name: &str) -> Option<&'static FieldDefinition> {
    FIELDS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Type of a field; names outside the registry are treated as text.
pub fn field_type(name: &str) -> FieldType {
    find_field(name)
        .map(|f| f.field_type)
        .unwrap_or(FieldType::Text)
}

/// Registry spelling of a field name, or the input unchanged when unknown.
pub fn canonical_name(name: &str) -> String {
    find_field(name)
        .map(|f| f.name.to_string())
        .unwrap_or_else(|| name.to_string())
}

pub fn default_column_order() -> Vec<String> {
    FIELDS.iter().map(|f| f.name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_field_ignores_case() {
        let def = find_field("introstartticks").unwrap();
        assert_eq!(def.name, "IntroStartTicks");
        assert_eq!(def.field_type, FieldType::Ticks);
    }

    #[test]
    fn test_unknown_field_is_text() {
        assert!(find_field("Nope").is_none());
        assert_eq!(field_type("Nope"), FieldType::Text);
        assert_eq!(canonical_name("Nope"), "Nope");
    }

    #[test]
    fn test_operator_sets() {
        assert_eq!(FieldType::Boolean.operators(), &[Operator::Eq]);
        assert!(FieldType::Enumerable.allows(Operator::In));
        assert!(!FieldType::Text.allows(Operator::In));
        assert!(FieldType::Ticks.allows(Operator::Between));
        assert!(!FieldType::Integer.allows(Operator::Like));
    }

    #[test]
    fn test_default_order_starts_with_id() {
        let order = default_column_order();
        assert_eq!(order.len(), FIELDS.len());
        assert_eq!(order[0], ID_FIELD);
    }
}
