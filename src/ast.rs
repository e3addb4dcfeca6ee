//! # Segment Query Language - Abstract Syntax Tree
//!
//! This module defines the structured model behind the segment query language,
//! a small SQL subset that always targets the single virtual relation
//! `MediaSegments`.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Condition operators, connectors and sort direction
//! - **[node]** - Filter tree nodes (conditions and groups)
//! - **[query]** - The complete [`QueryState`] a renderer reads and writes
//!
//! ## Quick Start
//!
//! ```text
//! SELECT ItemId, ItemName FROM MediaSegments
//! WHERE SeriesName IN ('Lost', 'Fringe') AND (IntroStartTicks > 0 OR HasIntro = 1)
//! ORDER BY ItemName ASC
//! LIMIT 50
//! ```
//!
//! ## Core Concepts
//!
//! ### The Filter Tree
//!
//! A query's WHERE clause is held as a list of [`Node`]s directly under an
//! implicit root connector. Every node is either a leaf [`Condition`] or a
//! [`Group`] that owns its children outright:
//!
//! ```text
//! root (OR)
//! ├── Group (AND)
//! │   ├── Condition  SeasonNumber = 1
//! │   └── Condition  EpisodeNumber < 3
//! └── Condition      HasIntro = 1
//! ```
//!
//! There are no parent links, so lookups and removals are plain depth-first
//! walks (see [`crate::tree`]).
//!
//! ### Node Identity
//!
//! Every node carries a [`NodeId`] handed out by a [`crate::Session`]. Ids
//! only ever increase within a session and are unique within a `QueryState`.
//!
//! ### Display-Form Values
//!
//! Condition values are always stored in the form a user would type them.
//! Time positions in particular are kept as `HH:MM:SS.mmm` strings and only
//! turned into raw ticks when text is generated.
pub mod tokens;
pub mod operators;
pub mod node;
pub mod query;

pub use tokens::{Keyword, Token};
pub use operators::{Connector, Operator, SortDirection};
pub use node::{Condition, Group, Node, NodeId};
pub use query::QueryState;
