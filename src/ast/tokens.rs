use crate::ast::Operator;

/// Reserved words of the query language.
///
/// Keywords are matched case-insensitively and always normalized to their
/// uppercase spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Select,
    From,
    Where,
    And,
    Or,
    Not,
    Is,
    Null,
    Between,
    Like,
    In,
    Order,
    By,
    Asc,
    Desc,
    Limit,
}

impl Keyword {
    /// Classify a word, returning `None` for anything that is not reserved.
    pub fn from_word(word: &str) -> Option<Self> {
        let keyword = match word.to_ascii_uppercase().as_str() {
            "SELECT" => Keyword::Select,
            "FROM" => Keyword::From,
            "WHERE" => Keyword::Where,
            "AND" => Keyword::And,
            "OR" => Keyword::Or,
            "NOT" => Keyword::Not,
            "IS" => Keyword::Is,
            "NULL" => Keyword::Null,
            "BETWEEN" => Keyword::Between,
            "LIKE" => Keyword::Like,
            "IN" => Keyword::In,
            "ORDER" => Keyword::Order,
            "BY" => Keyword::By,
            "ASC" => Keyword::Asc,
            "DESC" => Keyword::Desc,
            "LIMIT" => Keyword::Limit,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Select => "SELECT",
            Keyword::From => "FROM",
            Keyword::Where => "WHERE",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Not => "NOT",
            Keyword::Is => "IS",
            Keyword::Null => "NULL",
            Keyword::Between => "BETWEEN",
            Keyword::Like => "LIKE",
            Keyword::In => "IN",
            Keyword::Order => "ORDER",
            Keyword::By => "BY",
            Keyword::Asc => "ASC",
            Keyword::Desc => "DESC",
            Keyword::Limit => "LIMIT",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Reserved word, already uppercased
    ///
    /// # Examples
    /// ```text
    /// SELECT
    /// where      // Keyword(Where)
    /// Not        // Keyword(Not)
    /// ```
    Keyword(Keyword),

    /// Field, table or bare-word value
    ///
    /// Must start with a letter or underscore, followed by letters, digits, or
    /// underscores. The original spelling is kept.
    ///
    /// # Examples
    /// ```text
    /// ItemName
    /// MediaSegments
    /// _internal
    /// ```
    Identifier(String),

    /// Numeric literal, kept as written
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -10
    /// 3.5
    /// ```
    Number(String),

    /// Single-quoted string literal with `''` unescaped
    ///
    /// # Examples
    /// ```text
    /// 'Pilot'
    /// 'O''Brien'   // String("O'Brien")
    /// ```
    String(String),

    /// Comparison operator
    ///
    /// Only ever one of `=`, `!=`, `<`, `>`, `<=`, `>=`.
    Op(Operator),

    // Delimiters
    /// Left parenthesis for grouping or value lists
    LParen,

    /// Right parenthesis
    RParen,

    /// Comma separating columns or list values
    Comma,

    /// Star in `SELECT *`
    Star,

    /// End of input
    Eof,
}

impl Token {
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(k) => write!(f, "{}", k.as_str()),
            Token::Identifier(s) | Token::Number(s) => write!(f, "{}", s),
            Token::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Token::Op(op) => write!(f, "{}", op.as_str()),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Comma => write!(f, ","),
            Token::Star => write!(f, "*"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
