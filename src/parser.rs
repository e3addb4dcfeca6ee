use std::collections::BTreeSet;

use thiserror::Error;

use crate::{
    ast::{Condition, Connector, Group, Keyword, Node, Operator, QueryState, SortDirection, Token},
    fields::{self, FieldType},
    lexer::Lexer,
    session::NodeIds,
    value,
};

/// Failure to match the grammar. No partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found} (token {position})")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("Expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    #[error("Unsupported literal comparison {left} {op} {right}")]
    LiteralComparison {
        left: String,
        op: &'static str,
        right: String,
    },
}

/// A value position in a condition, before field-specific conversion.
enum Literal {
    Number(String),
    Text(String),
    Word(String),
}

impl Literal {
    fn into_raw(self) -> String {
        match self {
            Literal::Number(s) | Literal::Text(s) | Literal::Word(s) => s,
        }
    }

    /// Convert to the display form stored in the model.
    fn into_display(self, field_type: FieldType) -> String {
        match (self, field_type) {
            (Literal::Number(n), FieldType::Ticks) => {
                value::ticks_to_time(value::parse_int_lenient(&n))
            }
            (Literal::Word(w), FieldType::Boolean) if w.eq_ignore_ascii_case("true") => {
                "1".to_string()
            }
            (Literal::Word(w), FieldType::Boolean) if w.eq_ignore_ascii_case("false") => {
                "0".to_string()
            }
            (literal, _) => literal.into_raw(),
        }
    }
}

pub struct Parser<'a> {
    lexer: Lexer,
    current_token: Token,
    position: usize,
    ids: &'a mut NodeIds,
}

impl<'a> Parser<'a> {
    /// Create a parser that stamps new nodes with ids from `ids`.
    pub fn new(mut lexer: Lexer, ids: &'a mut NodeIds) -> Self {
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            position: 0,
            ids,
        }
    }

    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
        self.position += 1;
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match &self.current_token {
            Token::Eof => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
            token => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
                position: self.position,
            },
        }
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current_token.is_keyword(keyword)
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if !self.check_keyword(keyword) {
            return Err(self.unexpected(keyword.as_str()));
        }
        self.advance();
        Ok(())
    }

    fn expect(&mut self, expected: Token, description: &str) -> Result<(), ParseError> {
        if self.current_token != expected {
            return Err(self.unexpected(description));
        }
        self.advance();
        Ok(())
    }

    fn expect_identifier(&mut self, description: &str) -> Result<String, ParseError> {
        match &self.current_token {
            Token::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(description)),
        }
    }

    /// Parse a complete query into a fresh state
    pub fn parse_query(&mut self) -> Result<QueryState, ParseError> {
        let mut state = QueryState::default();

        self.expect_keyword(Keyword::Select)?;
        self.parse_columns(&mut state)?;

        self.expect_keyword(Keyword::From)?;
        let table = self.expect_identifier("table name")?;
        if table != fields::TABLE_NAME {
            tracing::debug!(table = %table, "Ignoring table name, queries always target {}", fields::TABLE_NAME);
        }

        if self.check_keyword(Keyword::Where) {
            self.advance();
            let (connector, items) = self.parse_or()?;
            state.root_connector = connector;
            state.items = items;
        }

        if self.check_keyword(Keyword::Order) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            state.order_by_field = fields::canonical_name(&self.expect_identifier("field name")?);

            if self.check_keyword(Keyword::Asc) {
                self.advance();
            } else if self.check_keyword(Keyword::Desc) {
                self.advance();
                state.order_by_dir = SortDirection::Desc;
            }
        }

        if self.check_keyword(Keyword::Limit) {
            self.advance();
            match &self.current_token {
                Token::Number(n) => {
                    state.limit = value::parse_int_lenient(n).max(0) as u64;
                    self.advance();
                }
                _ => return Err(self.unexpected("row limit")),
            }
        }

        self.expect(Token::Eof, "end of query")?;

        tracing::trace!(tokens = self.position, "Parsed query");
        Ok(state)
    }

    fn parse_columns(&mut self, state: &mut QueryState) -> Result<(), ParseError> {
        if self.current_token == Token::Star {
            self.advance();
            return Ok(());
        }

        let mut listed: Vec<String> = Vec::new();
        loop {
            let name = fields::canonical_name(&self.expect_identifier("column name")?);
            if !listed.contains(&name) {
                listed.push(name);
            }

            if self.current_token == Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        let mut order = listed.clone();
        for name in fields::default_column_order() {
            if !order.contains(&name) {
                order.push(name);
            }
        }

        state.column_order = order;
        state.selected_columns = listed.into_iter().collect::<BTreeSet<_>>();
        Ok(())
    }

    /// `andExpr ('OR' andExpr)*`, resolved to a connector and its nodes.
    ///
    /// One chain keeps its terms flat under AND. Several chains are joined
    /// under OR, and each multi-term chain is wrapped in an AND group.
    ///
    /// A chain left empty by tautologies is always true, and so is any OR it
    /// takes part in. That case yields no nodes at all.
    fn parse_or(&mut self) -> Result<(Connector, Vec<Node>), ParseError> {
        let mut chains = vec![self.parse_and()?];

        while self.check_keyword(Keyword::Or) {
            self.advance();
            chains.push(self.parse_and()?);
        }

        if chains.iter().any(Vec::is_empty) {
            return Ok((Connector::And, Vec::new()));
        }

        if chains.len() == 1 {
            return Ok((Connector::And, chains.pop().unwrap_or_default()));
        }

        let mut items = Vec::with_capacity(chains.len());
        for mut chain in chains {
            if chain.len() == 1 {
                items.push(chain.remove(0));
            } else {
                let group = Group::new(self.ids.next_id(), Connector::And).with_children(chain);
                items.push(Node::Group(group));
            }
        }

        Ok((Connector::Or, items))
    }

    fn parse_and(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut terms = Vec::new();
        terms.extend(self.parse_term()?);

        while self.check_keyword(Keyword::And) {
            self.advance();
            terms.extend(self.parse_term()?);
        }

        Ok(terms)
    }

    /// A parenthesized expression, a condition, or the `n = n` tautology
    /// (which yields no node).
    fn parse_term(&mut self) -> Result<Option<Node>, ParseError> {
        match &self.current_token {
            Token::LParen => {
                self.advance();
                let (connector, children) = self.parse_or()?;
                self.expect(Token::RParen, "')'")?;

                if children.is_empty() {
                    return Ok(None);
                }
                let group = Group::new(self.ids.next_id(), connector).with_children(children);
                Ok(Some(Node::Group(group)))
            }
            Token::Number(_) => {
                self.parse_tautology()?;
                Ok(None)
            }
            Token::Identifier(_) => {
                let field = self.expect_identifier("field name")?;
                Ok(Some(Node::Condition(self.parse_condition(field)?)))
            }
            _ => Err(self.unexpected("condition")),
        }
    }

    fn parse_tautology(&mut self) -> Result<(), ParseError> {
        let left = self.parse_literal()?.into_raw();

        let op = match &self.current_token {
            Token::Op(op) => *op,
            _ => return Err(self.unexpected("comparison operator")),
        };
        self.advance();

        let right = self.parse_literal()?.into_raw();

        if op == Operator::Eq && left == right {
            Ok(())
        } else {
            Err(ParseError::LiteralComparison {
                left,
                op: op.as_str(),
                right,
            })
        }
    }

    fn parse_condition(&mut self, field: String) -> Result<Condition, ParseError> {
        let field_type = fields::field_type(&field);
        let field = fields::canonical_name(&field);

        if self.check_keyword(Keyword::Is) {
            self.advance();
            let operator = if self.check_keyword(Keyword::Not) {
                self.advance();
                Operator::IsNotNull
            } else {
                Operator::IsNull
            };
            self.expect_keyword(Keyword::Null)?;
            return Ok(Condition::new(self.ids.next_id(), field, operator));
        }

        let negated = self.check_keyword(Keyword::Not);
        if negated {
            self.advance();
        }

        if self.check_keyword(Keyword::In) {
            self.advance();
            let operator = if negated { Operator::NotIn } else { Operator::In };
            let values = self.parse_value_list(field_type)?;
            return Ok(Condition::new(self.ids.next_id(), field, operator).with_values(values));
        }

        if self.check_keyword(Keyword::Like) {
            self.advance();
            let operator = if negated {
                Operator::NotLike
            } else {
                Operator::Like
            };
            let pattern = self.parse_literal()?.into_raw();
            let value = value::strip_wildcards(&pattern);
            return Ok(Condition::new(self.ids.next_id(), field, operator).with_value(value));
        }

        if negated {
            return Err(self.unexpected("IN or LIKE after NOT"));
        }

        if self.check_keyword(Keyword::Between) {
            self.advance();
            let low = self.parse_literal()?.into_display(field_type);
            self.expect_keyword(Keyword::And)?;
            let high = self.parse_literal()?.into_display(field_type);
            return Ok(Condition::new(self.ids.next_id(), field, Operator::Between)
                .with_range(low, high));
        }

        match &self.current_token {
            Token::Op(op) => {
                let operator = *op;
                self.advance();
                let value = self.parse_literal()?.into_display(field_type);
                Ok(Condition::new(self.ids.next_id(), field, operator).with_value(value))
            }
            _ => Err(self.unexpected("operator")),
        }
    }

    fn parse_value_list(&mut self, field_type: FieldType) -> Result<Vec<String>, ParseError> {
        self.expect(Token::LParen, "'('")?;

        let mut values = vec![self.parse_literal()?.into_display(field_type)];
        while self.current_token == Token::Comma {
            self.advance();
            values.push(self.parse_literal()?.into_display(field_type));
        }

        self.expect(Token::RParen, "')'")?;
        Ok(values)
    }

    fn parse_literal(&mut self) -> Result<Literal, ParseError> {
        let literal = match &self.current_token {
            Token::Number(n) => Literal::Number(n.clone()),
            Token::String(s) => Literal::Text(s.clone()),
            Token::Identifier(w) => Literal::Word(w.clone()),
            _ => return Err(self.unexpected("value")),
        };
        self.advance();
        Ok(literal)
    }
}

/// Parse `text` with a throwaway id counter.
///
/// Prefer [`crate::Session::import`] when the result will be edited further,
/// so that later nodes do not reuse ids.
pub fn parse(text: &str) -> Result<QueryState, ParseError> {
    let mut ids = NodeIds::new();
    Parser::new(Lexer::new(text), &mut ids).parse_query()
}
