//! Action scripts: JSON Lines files of planner actions.
//!
//! ```text
//! # stock the pantry
//! {"type": "ADD_INGREDIENT", "payload": {"id": "1", "name": "Egg", "category": "Dairy", "quantity": 12}}
//! {"type": "REMOVE_INGREDIENT", "payload": {"id": "1"}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. An object whose
//! `type` is not a planner action decodes to [`ScriptEntry::Ignored`] and
//! leaves the state untouched when run.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::ui::planner::PlannerIntent;
use crate::ui::provider::GlobalDispatch;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read action script: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: not valid JSON: {source}")]
    InvalidJson {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {line}: action has no string \"type\" field")]
    MissingType { line: usize },

    #[error("Line {line}: invalid payload for {kind}: {source}")]
    InvalidPayload {
        line: usize,
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One decoded script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEntry {
    Intent(PlannerIntent),
    /// An action kind the planner does not know.
    Ignored { kind: String },
}

/// A decoded entry and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub entry: ScriptEntry,
}

/// Counts reported after a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub changed: usize,
    pub ignored: usize,
}

/// Decode a single action object.
pub fn decode_action(value: Value, line: usize) -> Result<ScriptEntry, ScriptError> {
    let Some(kind) = value.get("type").and_then(Value::as_str).map(str::to_owned) else {
        return Err(ScriptError::MissingType { line });
    };

    if !PlannerIntent::is_known_kind(&kind) {
        return Ok(ScriptEntry::Ignored { kind });
    }

    serde_json::from_value(value)
        .map(ScriptEntry::Intent)
        .map_err(|source| ScriptError::InvalidPayload { line, kind, source })
}

/// Decode a whole script.
pub fn parse_script(input: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut lines = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let value: Value = serde_json::from_str(trimmed)
            .map_err(|source| ScriptError::InvalidJson { line, source })?;
        let entry = decode_action(value, line)?;
        lines.push(ScriptLine { line, entry });
    }
    Ok(lines)
}

/// Read and decode a script from any reader (a file or stdin).
pub fn read_script(mut reader: impl std::io::Read) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|source| ScriptError::Read { source })?;
    parse_script(&input)
}

/// Dispatch every entry in order.
pub fn run_script(dispatch: &GlobalDispatch, lines: Vec<ScriptLine>) -> RunSummary {
    let mut summary = RunSummary::default();
    for ScriptLine { line, entry } in lines {
        match entry {
            ScriptEntry::Intent(intent) => {
                summary.applied += 1;
                if dispatch.dispatch(intent) {
                    summary.changed += 1;
                }
            }
            ScriptEntry::Ignored { kind } => {
                debug!(line, kind = %kind, "unknown action type, state unchanged");
                summary.ignored += 1;
            }
        }
    }
    info!(
        applied = summary.applied,
        changed = summary.changed,
        ignored = summary.ignored,
        "script finished"
    );
    summary
}
