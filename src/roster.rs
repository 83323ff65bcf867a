//! Roster loading and structural validation.
//!
//! Reads the employee-list JSON from disk, checks it against the roster
//! schema, and decodes it into domain records. Validation is shape-only:
//! duplicate ids, dangling manager references, and cyclic management chains
//! are not checked here or anywhere downstream.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use jsonschema::Validator;
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::Employee;
use crate::errors::{RosterError, RosterResult};

/// Structural schema for the roster document: an array of employee objects
/// with exactly the four known fields.
static ROSTER_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": ["first_name", "id", "manager", "salary"],
            "additionalProperties": false,
            "properties": {
                "first_name": {"type": "string"},
                "id": {"type": "number"},
                "manager": {"type": ["number", "null"]},
                "salary": {"type": "number"},
            }
        }
    })
});

static ROSTER_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    jsonschema::validator_for(&ROSTER_SCHEMA).expect("embedded roster schema must compile")
});

/// Read a roster file into a JSON document.
pub fn read_roster(path: &Path) -> RosterResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Surface-level validation of the roster document.
///
/// Returns the sorted list of schema violation messages; an empty list
/// means the document is valid.
pub fn validate_roster(roster: &Value) -> Vec<String> {
    let mut messages: Vec<String> = ROSTER_VALIDATOR
        .iter_errors(roster)
        .map(|error| error.to_string())
        .collect();

    // Sort for consistent output
    messages.sort();
    debug!("schema validation produced {} error(s)", messages.len());
    messages
}

/// Decode an already-validated roster document into employee records.
pub fn decode_roster(roster: Value) -> RosterResult<Vec<Employee>> {
    serde_json::from_value(roster).map_err(RosterError::Decode)
}
