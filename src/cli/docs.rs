//! Documentation content for segql CLI

use super::CliError;
use crate::fields::FIELDS;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Filters,
    Values,
    Fields,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "filters" | "filter" | "where" | "operators" | "ops" => Some(Self::Filters),
            "values" | "value" | "literals" | "ticks" => Some(Self::Values),
            "fields" | "field" | "columns" => Some(Self::Fields),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SEGQL DOCUMENTATION

segql translates between media segment filters and a small SQL subset that
always reads from the MediaSegments relation.

DOCUMENTATION CATEGORIES

  syntax            Statement layout: SELECT, FROM, WHERE, ORDER BY, LIMIT
  filters           Conditions, AND/OR precedence and parentheses
  values            Literal formats, including time ticks
  fields            Known columns, their types and legal operators

QUICK REFERENCE

  SELECT * FROM MediaSegments
  WHERE SeriesName IN ('Lost') AND IntroStartTicks > 0
  ORDER BY ItemName DESC
  LIMIT 20

Run 'segql doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<String, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC.to_string()),
        Some(DocCategory::Filters) => Ok(FILTERS_DOC.to_string()),
        Some(DocCategory::Values) => Ok(VALUES_DOC.to_string()),
        Some(DocCategory::Fields) => Ok(render_fields()),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

/// Field table built from the registry
pub fn render_fields() -> String {
    let mut out = String::from("FIELDS\n\n");
    for field in FIELDS {
        let operators: Vec<&str> = field
            .field_type
            .operators()
            .iter()
            .map(|op| op.as_str())
            .collect();
        out.push_str(&format!(
            "  {:<18} {:<14} {:<11} {}\n",
            field.name,
            field.label,
            field.field_type.as_str(),
            operators.join(", ")
        ));
    }
    out
}

const SYNTAX_DOC: &str = r#"SYNTAX - Statement Layout

  SELECT columns FROM MediaSegments [WHERE filter] [ORDER BY field [ASC|DESC]] [LIMIT n]

COLUMNS
  *                       Every column in default order
  ItemId, ItemName        Explicit list, returned in the order given

    Selecting any time column (for example IntroStartTicks) always brings
    ItemId along, placed first.

KEYWORDS
  Keywords are case-insensitive: select, Select and SELECT are the same.
  Field names are matched against the known fields ignoring case.

ORDER BY / LIMIT
  ORDER BY EpisodeNumber DESC
  LIMIT 10

    ASC is the default direction. LIMIT 0 means no limit.
"#;

const FILTERS_DOC: &str = r#"FILTERS - WHERE Clause

CONDITIONS
  field = value           also !=, <, >, <=, >=
  field LIKE 'text'       substring match (NOT LIKE negates)
  field IN ('a', 'b')     membership (NOT IN negates)
  field BETWEEN a AND b   inclusive range
  field IS NULL           also IS NOT NULL

PRECEDENCE
  AND binds tighter than OR:

    A AND B OR C AND D    means    (A AND B) OR (C AND D)

  Parentheses always form their own group:

    (A OR B) AND C

EMPTY LISTS
  An IN list with no values is written as 1=1 and matches everything.
  Reading 1=1 back drops it from an AND; an OR containing it matches
  everything, so the whole OR is dropped.
"#;

const VALUES_DOC: &str = r#"VALUES - Literal Formats

TEXT
  'Pilot'                 Single quotes; write '' for a quote inside: 'O''Brien'

LIKE
  ItemName LIKE '%Pilot%' Wildcards are added on output and removed on input

INTEGER
  SeasonNumber = 2        Non-numeric input is treated as 0

TICKS
  Time positions are stored as ticks (1 tick = 100 ns) and shown as HH:MM:SS.mmm

    00:01:30.500  <->  905000000

  An unset position shows as --:--:--.--- and is written as 0.

BOOLEAN
  HasIntro = 1            1 is true, anything else is 0
"#;
