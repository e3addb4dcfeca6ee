// tests/parser_tests.rs

use segql::ast::{Condition, Connector, Node, Operator, QueryState, SortDirection};
use segql::fields;
use segql::lexer::Lexer;
use segql::parser::{parse, ParseError, Parser};
use segql::session::NodeIds;

fn parse_where(filter: &str) -> QueryState {
    parse(&format!("SELECT * FROM MediaSegments WHERE {}", filter))
        .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", filter, e))
}

fn condition(node: &Node) -> &Condition {
    match node {
        Node::Condition(c) => c,
        Node::Group(g) => panic!("Expected condition, got group {:?}", g),
    }
}

fn field_of(node: &Node) -> &str {
    &condition(node).field
}

// ============================================================================
// Statement Structure
// ============================================================================

#[test]
fn test_select_star() {
    let state = parse("SELECT * FROM MediaSegments").unwrap();
    assert!(state.selected_columns.is_empty());
    assert_eq!(state.column_order, fields::default_column_order());
    assert!(state.items.is_empty());
    assert_eq!(state.root_connector, Connector::And);
    assert_eq!(state.limit, 0);
    assert!(state.order_by_field.is_empty());
}

#[test]
fn test_column_list() {
    let state = parse("SELECT ItemName, ItemId FROM MediaSegments").unwrap();
    assert_eq!(state.selected_columns.len(), 2);
    assert!(state.selected_columns.contains("ItemId"));
    assert!(state.selected_columns.contains("ItemName"));
    assert_eq!(&state.column_order[..2], &["ItemName".to_string(), "ItemId".to_string()]);
    assert_eq!(state.column_order.len(), fields::FIELDS.len());
}

#[test]
fn test_column_names_canonicalized() {
    let state = parse("select itemname from MediaSegments").unwrap();
    assert!(state.selected_columns.contains("ItemName"));
}

#[test]
fn test_order_by_and_limit() {
    let state = parse("SELECT * FROM MediaSegments ORDER BY episodenumber DESC LIMIT 25").unwrap();
    assert_eq!(state.order_by_field, "EpisodeNumber");
    assert_eq!(state.order_by_dir, SortDirection::Desc);
    assert_eq!(state.limit, 25);
}

#[test]
fn test_order_by_defaults_to_asc() {
    let state = parse("SELECT * FROM MediaSegments ORDER BY ItemName").unwrap();
    assert_eq!(state.order_by_dir, SortDirection::Asc);
}

#[test]
fn test_negative_limit_clamped() {
    let state = parse("SELECT * FROM MediaSegments LIMIT -3").unwrap();
    assert_eq!(state.limit, 0);
}

#[test]
fn test_other_table_name_accepted() {
    assert!(parse("SELECT * FROM Segments").is_ok());
}

// ============================================================================
// Precedence and Flattening
// ============================================================================

#[test]
fn test_flat_and() {
    let state = parse_where("SeasonNumber = 1 AND EpisodeNumber = 2");
    assert_eq!(state.root_connector, Connector::And);
    assert_eq!(state.items.len(), 2);
    assert_eq!(field_of(&state.items[0]), "SeasonNumber");
    assert_eq!(field_of(&state.items[1]), "EpisodeNumber");
}

#[test]
fn test_hoisted_or() {
    let state = parse_where("SeasonNumber = 1 OR EpisodeNumber = 2");
    assert_eq!(state.root_connector, Connector::Or);
    assert_eq!(state.items.len(), 2);
    assert!(matches!(state.items[0], Node::Condition(_)));
    assert!(matches!(state.items[1], Node::Condition(_)));
}

#[test]
fn test_and_binds_tighter_than_or() {
    let state = parse_where(
        "SeasonNumber = 1 AND EpisodeNumber = 2 OR SeasonNumber = 3 AND EpisodeNumber = 4",
    );
    assert_eq!(state.root_connector, Connector::Or);
    assert_eq!(state.items.len(), 2);

    for (item, season) in state.items.iter().zip(["1", "3"]) {
        match item {
            Node::Group(group) => {
                assert_eq!(group.connector, Connector::And);
                assert_eq!(group.children.len(), 2);
                assert_eq!(condition(&group.children[0]).value, season);
            }
            _ => panic!("Expected AND group, got {:?}", item),
        }
    }
}

#[test]
fn test_mixed_chain_lengths() {
    let state = parse_where("HasIntro = 1 OR SeasonNumber = 1 AND EpisodeNumber = 1");
    assert_eq!(state.root_connector, Connector::Or);
    assert!(matches!(state.items[0], Node::Condition(_)));
    assert!(matches!(&state.items[1], Node::Group(g) if g.children.len() == 2));
}

#[test]
fn test_parenthesized_group() {
    let state = parse_where("(SeasonNumber = 1 AND EpisodeNumber = 2) OR HasIntro = 1");
    assert_eq!(state.root_connector, Connector::Or);
    assert_eq!(state.items.len(), 2);
    match &state.items[0] {
        Node::Group(group) => {
            assert_eq!(group.connector, Connector::And);
            assert_eq!(group.children.len(), 2);
        }
        other => panic!("Expected group, got {:?}", other),
    }
    assert_eq!(field_of(&state.items[1]), "HasIntro");
}

#[test]
fn test_single_term_parens_still_group() {
    let state = parse_where("(HasIntro = 1)");
    assert_eq!(state.root_connector, Connector::And);
    assert_eq!(state.items.len(), 1);
    match &state.items[0] {
        Node::Group(group) => assert_eq!(group.children.len(), 1),
        other => panic!("Expected group, got {:?}", other),
    }
}

#[test]
fn test_parenthesized_or_inside_and() {
    let state = parse_where("HasIntro = 1 AND (SeasonNumber = 1 OR SeasonNumber = 2)");
    assert_eq!(state.root_connector, Connector::And);
    match &state.items[1] {
        Node::Group(group) => {
            assert_eq!(group.connector, Connector::Or);
            assert_eq!(group.children.len(), 2);
        }
        other => panic!("Expected group, got {:?}", other),
    }
}

#[test]
fn test_nested_parens_resolve_recursively() {
    let state = parse_where("((ItemName = 'a' AND ItemName = 'b' OR ItemName = 'c'))");
    let outer = state.items[0].as_group().unwrap();
    assert_eq!(outer.children.len(), 1);
    let inner = outer.children[0].as_group().unwrap();
    assert_eq!(inner.connector, Connector::Or);
    assert!(matches!(&inner.children[0], Node::Group(g) if g.connector == Connector::And));
    assert!(matches!(inner.children[1], Node::Condition(_)));
}

#[test]
fn test_keywords_any_case() {
    let state = parse("select * from MediaSegments where HasIntro = 1 or HasCredits = 1").unwrap();
    assert_eq!(state.root_connector, Connector::Or);
    assert_eq!(state.items.len(), 2);
}

// ============================================================================
// Condition Forms
// ============================================================================

#[test]
fn test_is_null() {
    let state = parse_where("SeriesName IS NULL AND ItemName IS NOT NULL");
    let first = condition(&state.items[0]);
    assert_eq!(first.operator, Operator::IsNull);
    assert!(first.value.is_empty() && first.value2.is_empty() && first.values.is_empty());
    assert_eq!(condition(&state.items[1]).operator, Operator::IsNotNull);
}

#[test]
fn test_in_list() {
    let state = parse_where("SeriesName IN ('Lost', 'Fringe', 42, Dark)");
    let c = condition(&state.items[0]);
    assert_eq!(c.operator, Operator::In);
    assert_eq!(c.values, vec!["Lost", "Fringe", "42", "Dark"]);
}

#[test]
fn test_not_in_list_drops_duplicates() {
    let state = parse_where("SeriesName NOT IN ('Lost', 'Lost', 'Fringe')");
    let c = condition(&state.items[0]);
    assert_eq!(c.operator, Operator::NotIn);
    assert_eq!(c.values, vec!["Lost", "Fringe"]);
}

#[test]
fn test_like_strips_wildcards() {
    let state = parse_where("ItemName LIKE '%Pilot%' AND ItemName NOT LIKE 'Recap%'");
    let like = condition(&state.items[0]);
    assert_eq!(like.operator, Operator::Like);
    assert_eq!(like.value, "Pilot");
    let not_like = condition(&state.items[1]);
    assert_eq!(not_like.operator, Operator::NotLike);
    assert_eq!(not_like.value, "Recap");
}

#[test]
fn test_like_only_wildcard_is_empty() {
    let state = parse_where("ItemName LIKE '%' AND ItemName LIKE ''");
    assert_eq!(condition(&state.items[0]).value, "");
    assert_eq!(condition(&state.items[1]).value, "");
}

#[test]
fn test_like_strips_single_wildcard_only() {
    let state = parse_where("ItemName LIKE '%%50%%'");
    assert_eq!(condition(&state.items[0]).value, "%50%");
}

#[test]
fn test_between() {
    let state = parse_where("SeasonNumber BETWEEN 2 AND 4 AND HasIntro = 1");
    assert_eq!(state.items.len(), 2);
    let c = condition(&state.items[0]);
    assert_eq!(c.operator, Operator::Between);
    assert_eq!(c.value, "2");
    assert_eq!(c.value2, "4");
}

#[test]
fn test_binary_operators() {
    let cases = [
        ("=", Operator::Eq),
        ("!=", Operator::NotEq),
        ("<", Operator::Lt),
        (">", Operator::Gt),
        ("<=", Operator::LtEq),
        (">=", Operator::GtEq),
    ];
    for (text, expected) in cases {
        let state = parse_where(&format!("EpisodeNumber {} 3", text));
        let c = condition(&state.items[0]);
        assert_eq!(c.operator, expected, "Failed for operator {}", text);
        assert_eq!(c.value, "3");
    }
}

#[test]
fn test_string_value_unescaped() {
    let state = parse_where("ItemName = 'O''Brien'");
    assert_eq!(condition(&state.items[0]).value, "O'Brien");
}

#[test]
fn test_field_names_canonicalized() {
    let state = parse_where("itemname = 'x'");
    assert_eq!(field_of(&state.items[0]), "ItemName");
}

#[test]
fn test_unknown_field_kept() {
    let state = parse_where("Mystery = 'x'");
    assert_eq!(field_of(&state.items[0]), "Mystery");
}

// ============================================================================
// Typed Imports
// ============================================================================

#[test]
fn test_ticks_imported_as_display() {
    let state = parse_where("IntroStartTicks > 37234560000");
    assert_eq!(condition(&state.items[0]).value, "01:02:03.456");
}

#[test]
fn test_ticks_between_imported_as_display() {
    let state = parse_where("CreditsStartTicks BETWEEN 0 AND 600000000");
    let c = condition(&state.items[0]);
    assert_eq!(c.value, "--:--:--.---");
    assert_eq!(c.value2, "00:01:00.000");
}

#[test]
fn test_ticks_string_left_alone() {
    let state = parse_where("IntroEndTicks = '00:00:10.000'");
    assert_eq!(condition(&state.items[0]).value, "00:00:10.000");
}

#[test]
fn test_integer_fields_not_converted() {
    let state = parse_where("SeasonNumber = 37234560000");
    assert_eq!(condition(&state.items[0]).value, "37234560000");
}

#[test]
fn test_boolean_words() {
    let state = parse_where("HasIntro = TRUE AND HasCredits = false");
    assert_eq!(condition(&state.items[0]).value, "1");
    assert_eq!(condition(&state.items[1]).value, "0");
}

// ============================================================================
// Tautologies
// ============================================================================

#[test]
fn test_tautology_alone_yields_no_items() {
    let state = parse_where("1=1");
    assert!(state.items.is_empty());
}

#[test]
fn test_tautology_in_chain_dropped() {
    let state = parse_where("HasIntro = 1 AND 1=1");
    assert_eq!(state.root_connector, Connector::And);
    assert_eq!(state.items.len(), 1);
    assert_eq!(field_of(&state.items[0]), "HasIntro");
}

#[test]
fn test_tautology_group_dropped() {
    let state = parse_where("(1=1) AND HasIntro = 1");
    assert_eq!(state.items.len(), 1);
    assert!(matches!(state.items[0], Node::Condition(_)));
}

#[test]
fn test_tautology_in_or_matches_everything() {
    let state = parse_where("HasIntro = 1 OR 1=1");
    assert!(state.items.is_empty());

    let state = parse_where("1=1 OR HasIntro = 1 AND HasCredits = 1");
    assert!(state.items.is_empty());
}

#[test]
fn test_tautology_in_nested_or_drops_group() {
    let state = parse_where("SeasonNumber = 2 AND (HasIntro = 1 OR 1=1)");
    assert_eq!(state.root_connector, Connector::And);
    assert_eq!(state.items.len(), 1);
    assert_eq!(field_of(&state.items[0]), "SeasonNumber");
}

#[test]
fn test_tautology_and_chain_inside_or_kept_narrow() {
    let state = parse_where("HasIntro = 1 AND 1=1 OR HasCredits = 1");
    assert_eq!(state.root_connector, Connector::Or);
    assert_eq!(state.items.len(), 2);
    assert_eq!(field_of(&state.items[0]), "HasIntro");
    assert_eq!(field_of(&state.items[1]), "HasCredits");
}

#[test]
fn test_literal_contradiction_rejected() {
    let result = parse("SELECT * FROM MediaSegments WHERE 1=0");
    assert!(matches!(result, Err(ParseError::LiteralComparison { .. })));
}

// ============================================================================
// Node Ids
// ============================================================================

#[test]
fn test_ids_unique() {
    let state = parse_where("(A = 'a' AND B = 'b') OR C = 'c' AND D = 'd'");
    let mut ids = Vec::new();
    fn collect(nodes: &[Node], ids: &mut Vec<u64>) {
        for node in nodes {
            ids.push(node.id());
            if let Node::Group(g) = node {
                collect(&g.children, ids);
            }
        }
    }
    collect(&state.items, &mut ids);
    let count = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), count);
    assert_eq!(count, 6);
}

#[test]
fn test_parser_uses_given_counter() {
    let mut ids = NodeIds::starting_after(100).unwrap();
    let state = Parser::new(Lexer::new("SELECT * FROM MediaSegments WHERE HasIntro = 1"), &mut ids)
        .parse_query()
        .unwrap();
    assert_eq!(state.items[0].id(), 101);
    assert_eq!(ids.next_id(), 102);
}

#[test]
fn test_counter_refuses_seed_near_end_of_range() {
    assert!(NodeIds::starting_after(u64::MAX).is_none());
    assert!(NodeIds::starting_after(u64::MAX / 2 + 1).is_none());
    assert_eq!(NodeIds::starting_after(u64::MAX / 2).unwrap().next_id(), u64::MAX / 2 + 1);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_errors() {
    let bad = [
        "",
        "FROM MediaSegments",
        "SELECT FROM MediaSegments",
        "SELECT * MediaSegments",
        "SELECT * FROM",
        "SELECT * FROM MediaSegments WHERE",
        "SELECT * FROM MediaSegments WHERE ItemName",
        "SELECT * FROM MediaSegments WHERE ItemName = ",
        "SELECT * FROM MediaSegments WHERE (ItemName = 'a'",
        "SELECT * FROM MediaSegments WHERE ItemName IS 'a'",
        "SELECT * FROM MediaSegments WHERE ItemName NOT = 'a'",
        "SELECT * FROM MediaSegments WHERE SeriesName IN ()",
        "SELECT * FROM MediaSegments WHERE SeasonNumber BETWEEN 1 4",
        "SELECT * FROM MediaSegments ORDER ItemName",
        "SELECT * FROM MediaSegments LIMIT ten",
        "SELECT * FROM MediaSegments LIMIT 5 extra",
        "SELECT * FROM MediaSegments WHERE HasIntro = 1 AND",
    ];
    for text in bad {
        assert!(parse(text).is_err(), "Expected failure for {:?}", text);
    }
}

#[test]
fn test_error_eof_variant() {
    let err = parse("SELECT * FROM").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEof {
            expected: "table name".to_string()
        }
    );
    assert_eq!(err.to_string(), "Expected table name, found end of input");
}

#[test]
fn test_error_token_variant() {
    let err = parse("SELECT * FROM MediaSegments WHERE ItemName IS 'a'").unwrap_err();
    match err {
        ParseError::UnexpectedToken { expected, found, .. } => {
            assert_eq!(expected, "NULL");
            assert_eq!(found, "'a'");
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}
