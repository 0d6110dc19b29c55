//! On-disk form of an association list.
//!
//! A flat TOML document, one `key = "value"` record per line, records in list
//! order. Values are always written as single-line TOML basic strings and
//! `toml_edit` quotes keys that need it. Parsing goes through `toml_edit`.
//!
//! Reading is lenient about value types (integers, floats and booleans are
//! coerced to their string encodings) and strict about shape: tables, arrays,
//! duplicate keys, oversized lines and too many records are all
//! [`PrefsError::MalformedFile`].

use std::path::Path;

use crate::alist::AList;
use crate::error::PrefsError;
use crate::value::SettingValue;

/// Bounds on a settings buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_records: usize,
    /// In bytes, excluding the line terminator.
    pub max_line_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_records: 64,
            max_line_len: 1024,
        }
    }
}

fn malformed(path: &Path, reason: impl Into<String>) -> PrefsError {
    PrefsError::MalformedFile {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Reject keys the line format cannot carry.
pub fn validate_key(key: &str) -> Result<(), PrefsError> {
    let reason = if key.is_empty() {
        "key is empty"
    } else if key.contains('=') {
        "key contains the '=' delimiter"
    } else if key.contains(['\n', '\r']) {
        "key contains a line break"
    } else {
        return Ok(());
    };
    Err(PrefsError::InvalidKey {
        key: key.into(),
        reason: reason.into(),
    })
}

/// Check line lengths and record count of a serialized buffer.
///
/// `path` is only used to label the error.
pub fn check_bounds(
    content: &str,
    records: usize,
    limits: &Limits,
    path: &Path,
) -> Result<(), PrefsError> {
    if let Some((i, line)) = content
        .lines()
        .enumerate()
        .find(|(_, line)| line.len() > limits.max_line_len)
    {
        return Err(malformed(
            path,
            format!(
                "line {} is {} bytes, limit is {}",
                i + 1,
                line.len(),
                limits.max_line_len
            ),
        ));
    }
    if records > limits.max_records {
        return Err(malformed(
            path,
            format!("{records} records, limit is {}", limits.max_records),
        ));
    }
    Ok(())
}

/// Parse a settings buffer into a list.
pub fn parse(content: &str, limits: &Limits, path: &Path) -> Result<AList, PrefsError> {
    check_bounds(content, 0, limits, path)?;

    let doc: toml_edit::DocumentMut = content
        .parse()
        .map_err(|e: toml_edit::TomlError| malformed(path, e.to_string()))?;

    let mut list = AList::new();
    for (key, item) in doc.iter() {
        if list.len() == limits.max_records {
            return Err(malformed(
                path,
                format!("more than {} records", limits.max_records),
            ));
        }
        validate_key(key).map_err(|e| malformed(path, e.to_string()))?;
        let value = scalar_text(item)
            .ok_or_else(|| malformed(path, format!("'{key}' is not a single value")))?;
        list.insert(key, value)?;
    }
    Ok(list)
}

fn scalar_text(item: &toml_edit::Item) -> Option<String> {
    use toml_edit::Value;

    match item.as_value()? {
        Value::String(s) => Some(s.value().clone()),
        Value::Integer(i) => Some(i.value().to_string()),
        Value::Float(f) => Some(f.value().to_string()),
        Value::Boolean(b) => Some(SettingValue::Bool(*b.value()).encode()),
        Value::Datetime(d) => Some(d.value().to_string()),
        Value::Array(_) | Value::InlineTable(_) => None,
    }
}

/// Serialize a list, one record per line, in list order.
pub fn render(list: &AList) -> Result<String, PrefsError> {
    let mut out = String::new();
    for entry in list {
        validate_key(&entry.key)?;
        let key = toml_edit::Key::new(entry.key.as_str());
        out.push_str(&key.display_repr());
        out.push_str(" = ");
        out.push_str(&basic_string(&entry.value));
        out.push('\n');
    }
    Ok(out)
}

/// Single-line TOML basic string. `toml_edit` would pick a multi-line form
/// for values containing newlines, which breaks one record per line.
fn basic_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
