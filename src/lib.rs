pub mod ast;
pub mod cli;
pub mod fields;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod session;
pub mod tree;
pub mod value;

pub use ast::{Condition, Connector, Group, Keyword, Node, NodeId, Operator, QueryState, SortDirection, Token};
pub use fields::{FieldDefinition, FieldType, FIELDS};
pub use lexer::{Lexer, tokenize};
pub use output::to_sql;
pub use parser::{parse, ParseError, Parser};
pub use session::{NodeIds, Session};
