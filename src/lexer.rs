use crate::ast::{Keyword, Operator, Token};

/// Hand-written tokenizer for the query language.
///
/// The lexer never fails: characters it does not recognize are skipped, and
/// an unterminated string literal runs to the end of the input.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self) -> String {
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                if self.peek_char(1) == Some('\'') {
                    result.push('\'');
                    self.advance();
                    self.advance();
                } else {
                    self.advance();
                    return result;
                }
            } else {
                result.push(ch);
                self.advance();
            }
        }

        // Unterminated: keep what we have
        result
    }

    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut seen_dot = false;

        if self.current_char() == Some('-') {
            number.push('-');
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Number(number)
    }

    fn operator(&mut self, op: Operator, width: usize) -> Token {
        self.position += width;
        Token::Op(op)
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let Some(ch) = self.current_char() else {
                return Token::Eof;
            };

            // Two-character operators win over their one-character prefixes
            match (ch, self.peek_char(1)) {
                ('!', Some('=')) => return self.operator(Operator::NotEq, 2),
                ('<', Some('=')) => return self.operator(Operator::LtEq, 2),
                ('>', Some('=')) => return self.operator(Operator::GtEq, 2),
                _ => {}
            }

            match ch {
                '=' => return self.operator(Operator::Eq, 1),
                '<' => return self.operator(Operator::Lt, 1),
                '>' => return self.operator(Operator::Gt, 1),
                '(' => {
                    self.advance();
                    return Token::LParen;
                }
                ')' => {
                    self.advance();
                    return Token::RParen;
                }
                ',' => {
                    self.advance();
                    return Token::Comma;
                }
                '*' => {
                    self.advance();
                    return Token::Star;
                }
                '\'' => return Token::String(self.read_string()),
                '-' if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => {
                    return self.read_number();
                }
                c if c.is_ascii_digit() => return self.read_number(),
                c if c.is_ascii_alphabetic() || c == '_' => {
                    let word = self.read_identifier();
                    return match Keyword::from_word(&word) {
                        Some(keyword) => Token::Keyword(keyword),
                        None => Token::Identifier(word),
                    };
                }
                // Anything else is dropped
                _ => self.advance(),
            }
        }
    }
}

/// Tokenize a whole query, without the trailing [`Token::Eof`].
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }
    tokens
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("select Where and OR not");
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Select));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Where));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::And));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Or));
    assert_eq!(lexer.next_token(), Token::Keyword(Keyword::Not));
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn test_condition() {
    let mut lexer = Lexer::new("(SeasonNumber >= 2)");
    assert_eq!(lexer.next_token(), Token::LParen);
    assert_eq!(lexer.next_token(), Token::Identifier("SeasonNumber".to_string()));
    assert_eq!(lexer.next_token(), Token::Op(Operator::GtEq));
    assert_eq!(lexer.next_token(), Token::Number("2".to_string()));
    assert_eq!(lexer.next_token(), Token::RParen);
}
