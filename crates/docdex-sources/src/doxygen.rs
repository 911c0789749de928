//! Doxygen `searchData` bucket files.
//!
//! Each file under a generated `html/search/` directory binds one array:
//!
//! ```text
//! var searchData=
//! [
//!   ['getgps',['getGPS',['../class_x.html#ab6f…',1,'Adafruit_FONA::getGPS(uint8_t arg, …)'],
//!                       ['../class_x.html#ac4f…',1,'Adafruit_FONA::getGPS(float *lat, …)']]],
//!   ['getimei',['getIMEI',['../class_x.html#abbd…',1,'Adafruit_FONA']]],
//! ];
//! ```
//!
//! Unlike the canonical format, targets follow the display name directly
//! (`[name, target, target, …]`) and each target is `[anchor, flag, label]`.
//! The label is either the owning scope alone, or a qualified signature
//! `scope::name(args)` when the generator needs to tell overloads apart.
//!
//! Generator output survives parse → render → parse unchanged, and so does
//! any table whose signatures are either the display name or the display
//! name followed by an argument list. Other signatures have no label form
//! the generator would read back: `scope::other` is taken for a bare scope.

use crate::js;
use docdex_core::{Defect, Entry, IndexError, Result, SearchIndexTable, Target};
use serde_json::Value;
use std::fmt::Write;

/// Parse one bucket file.
pub fn parse_search_data(text: &str) -> Result<SearchIndexTable> {
    let value = js::parse_literal(text)?;
    let records = value.as_array().ok_or_else(|| IndexError::Syntax {
        line: 1,
        column: 1,
        message: "searchData is not an array".to_string(),
    })?;

    let entries = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            entry_from_record(record).map_err(|d| IndexError::malformed(index, d))
        })
        .collect::<Result<Vec<_>>>()?;
    SearchIndexTable::load(entries)
}

fn entry_from_record(record: &Value) -> std::result::Result<Entry, Defect> {
    let fields = record.as_array().ok_or(Defect::NotARecord)?;
    let key = fields
        .first()
        .and_then(Value::as_str)
        .filter(|k| !k.is_empty())
        .ok_or(Defect::MissingKey)?;
    let body = fields.get(1).and_then(Value::as_array).ok_or(Defect::MissingDisplayName)?;
    let (name, raw_targets) = body.split_first().ok_or(Defect::MissingDisplayName)?;
    let display_name = name
        .as_str()
        .filter(|n| !n.is_empty())
        .ok_or(Defect::MissingDisplayName)?;

    let targets = raw_targets
        .iter()
        .enumerate()
        .map(|(i, t)| target_from_triple(t, display_name).ok_or(Defect::BadTarget(i)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Entry::new(key, display_name, targets))
}

fn target_from_triple(value: &Value, display_name: &str) -> Option<Target> {
    match value.as_array()?.as_slice() {
        [Value::String(anchor), flag, Value::String(label)] if flag.is_i64() || flag.is_u64() => {
            let (signature, scope) = split_label(label, display_name);
            Some(Target::new(anchor.as_str(), signature, scope))
        }
        _ => None,
    }
}

/// Split a target label into `(signature, scope)`.
///
/// A label is qualified when the name before its argument list is
/// `display_name`, and it either carries `::` or an argument list:
/// `Adafruit_FONA::getGPS(float *lat)` → `("getGPS(float *lat)", "Adafruit_FONA")`.
/// Any other label is the bare owning scope and the signature is the
/// display name.
pub fn split_label(label: &str, display_name: &str) -> (String, String) {
    let head = label.find('(').map_or(label, |paren| &label[..paren]);
    let (scope, name) = head.rsplit_once("::").unwrap_or(("", head));
    let qualified = name == display_name && (head.contains("::") || head.len() < label.len());

    if !qualified {
        return (display_name.to_string(), label.to_string());
    }
    let signature = if scope.is_empty() && !head.contains("::") {
        label
    } else {
        &label[scope.len() + 2..]
    };
    (signature.to_string(), scope.to_string())
}

/// Inverse of [`split_label`].
///
/// A target named after the entry renders as its bare scope, unless that
/// scope would itself read back as a qualified label (`fona::Modem` under
/// `Modem`); those keep the `scope::signature` form.
pub fn render_label(target: &Target, display_name: &str) -> String {
    if target.signature == display_name && !reads_as_qualified(&target.scope, display_name) {
        target.scope.clone()
    } else if target.scope.is_empty() {
        target.signature.clone()
    } else {
        format!("{}::{}", target.scope, target.signature)
    }
}

fn reads_as_qualified(label: &str, display_name: &str) -> bool {
    let (signature, scope) = split_label(label, display_name);
    signature != display_name || scope != label
}

/// Render a table as a bucket file, in the generator's layout.
pub fn render_search_data(table: &SearchIndexTable) -> String {
    let mut out = String::from("var searchData=\n[\n");
    for entry in table {
        let _ = write!(out, "  [{},[{}", quote(&entry.key), quote(&entry.display_name));
        for target in &entry.targets {
            let label = render_label(target, &entry.display_name);
            let _ = write!(out, ",[{},1,{}]", quote(&target.anchor), quote(&label));
        }
        out.push_str("]],\n");
    }
    out.push_str("];\n");
    out
}

/// Encode a symbol name the way the generator builds its keys: lowercase
/// ASCII letters and digits pass through, every other byte becomes `_xx`.
///
/// `Adafruit_FONA` → `adafruit_5ffona`.
pub fn search_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() {
            key.push(byte.to_ascii_lowercase() as char);
        } else {
            let _ = write!(key, "_{byte:02x}");
        }
    }
    key
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
