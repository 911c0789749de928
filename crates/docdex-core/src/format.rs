//! Canonical JSON table format.
//!
//! ```text
//! [ [key, [displayName, [[anchorPath, signatureLabel, owningScopeName], ...]]], ... ]
//! ```
//!
//! Reading goes through [`serde_json::Value`] rather than straight into
//! [`Record`](crate::table::Record) so that a structurally incomplete record
//! is reported as [`IndexError::MalformedEntry`] with its position instead of
//! a bare serde error.

use crate::error::{Defect, IndexError};
use crate::table::SearchIndexTable;
use crate::types::{Entry, Target};
use serde_json::Value;

/// Parse a canonical JSON table.
pub fn from_json_str(text: &str) -> crate::Result<SearchIndexTable> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Build a table from an already-parsed JSON array of records.
pub fn from_value(value: &Value) -> crate::Result<SearchIndexTable> {
    let records = value.as_array().ok_or_else(|| IndexError::Syntax {
        line: 1,
        column: 1,
        message: "expected a top-level array of records".to_string(),
    })?;

    let entries = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            entry_from_record(record).map_err(|d| IndexError::malformed(index, d))
        })
        .collect::<crate::Result<Vec<_>>>()?;
    SearchIndexTable::load(entries)
}

fn entry_from_record(record: &Value) -> Result<Entry, Defect> {
    let fields = record.as_array().ok_or(Defect::NotARecord)?;
    let key = non_empty_str(fields.first()).ok_or(Defect::MissingKey)?;
    let body = fields.get(1).and_then(Value::as_array).ok_or(Defect::MissingDisplayName)?;
    let display_name = non_empty_str(body.first()).ok_or(Defect::MissingDisplayName)?;
    let raw_targets = body.get(1).and_then(Value::as_array).ok_or(Defect::NoTargets)?;

    let targets = raw_targets
        .iter()
        .enumerate()
        .map(|(i, t)| target_from_triple(t).ok_or(Defect::BadTarget(i)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Entry::new(key, display_name, targets))
}

fn target_from_triple(value: &Value) -> Option<Target> {
    match value.as_array()?.as_slice() {
        [Value::String(anchor), Value::String(signature), Value::String(scope)] => {
            Some(Target::new(anchor.as_str(), signature.as_str(), scope.as_str()))
        }
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Serialise a table into the canonical JSON form.
pub fn to_json_string(table: &SearchIndexTable, pretty: bool) -> crate::Result<String> {
    let records = table.to_records();
    let text = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    Ok(text)
}
