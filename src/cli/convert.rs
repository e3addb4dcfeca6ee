//! Query text <-> JSON `QueryState` conversion

use crate::{QueryState, Session, FIELDS};
use super::CliError;

/// Parse query text and serialize the resulting state as JSON
pub fn query_to_json(query: &str, pretty: bool) -> Result<String, CliError> {
    let mut session = Session::new();
    session.import(query)?;

    let state = session.state();
    let json = if pretty {
        serde_json::to_string_pretty(state)?
    } else {
        serde_json::to_string(state)?
    };
    Ok(json)
}

/// Deserialize a JSON state and generate its canonical query text
pub fn json_to_query(json: &str) -> Result<String, CliError> {
    let state: QueryState = serde_json::from_str(json)?;
    Ok(Session::with_state(state).export())
}

/// Serialize the field registry, for renderers that build pickers from it
pub fn fields_to_json(pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(FIELDS)?
    } else {
        serde_json::to_string(FIELDS)?
    };
    Ok(json)
}
