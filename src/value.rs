//! Typed setting values and their string encoding.
//!
//! On disk and in the association list every value is a string. At the store
//! boundary values are converted explicitly:
//!
//! | Value            | Encoded as       |
//! |------------------|------------------|
//! | `Text(s)`        | `s` verbatim     |
//! | `Bool(true)`     | `"1"`            |
//! | `Bool(false)`    | `""`             |
//! | `Int(n)`         | decimal `n`      |
//!
//! Decoding a boolean follows the sentinel contract: the empty string is
//! false, anything else is true.

use std::fmt;

use crate::error::PrefsError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Text(String),
    Bool(bool),
    Int(i64),
}

impl SettingValue {
    /// String form stored in the list and written to the file.
    pub fn encode(&self) -> String {
        match self {
            SettingValue::Text(s) => s.clone(),
            SettingValue::Bool(true) => "1".into(),
            SettingValue::Bool(false) => String::new(),
            SettingValue::Int(n) => n.to_string(),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Text(s.into())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Text(s)
    }
}

impl From<&String> for SettingValue {
    fn from(s: &String) -> Self {
        SettingValue::Text(s.clone())
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<i64> for SettingValue {
    fn from(n: i64) -> Self {
        SettingValue::Int(n)
    }
}

impl From<i32> for SettingValue {
    fn from(n: i32) -> Self {
        SettingValue::Int(n.into())
    }
}

impl From<u32> for SettingValue {
    fn from(n: u32) -> Self {
        SettingValue::Int(n.into())
    }
}

/// Boolean reading of a raw value: empty is false, anything else is true.
pub fn truthy(raw: &str) -> bool {
    !raw.is_empty()
}

/// Integer reading of a raw value. Surrounding whitespace is ignored.
pub fn parse_int(key: &str, raw: &str) -> Result<i64, PrefsError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| PrefsError::InvalidValue {
            key: key.into(),
            reason: format!("'{raw}' is not an integer ({e})"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_encoding_uses_empty_sentinel() {
        assert_eq!(SettingValue::Bool(true).encode(), "1");
        assert_eq!(SettingValue::Bool(false).encode(), "");
    }

    #[test]
    fn text_is_verbatim() {
        assert_eq!(SettingValue::from("Monospace 14").encode(), "Monospace 14");
    }

    #[test]
    fn int_encoding() {
        assert_eq!(SettingValue::from(-12i64).encode(), "-12");
        assert_eq!(SettingValue::from(792u32).to_string(), "792");
    }

    #[test]
    fn truthy_follows_sentinel_contract() {
        assert!(!truthy(""));
        assert!(truthy("1"));
        // Any non-empty value is set, including "0".
        assert!(truthy("0"));
    }

    #[test]
    fn encoded_bool_reads_back() {
        assert!(truthy(&SettingValue::Bool(true).encode()));
        assert!(!truthy(&SettingValue::Bool(false).encode()));
    }

    #[test]
    fn parse_int_accepts_padding() {
        assert_eq!(parse_int("tabwidth", " 4 ").unwrap(), 4);
    }

    #[test]
    fn parse_int_rejects_text() {
        let err = parse_int("tabwidth", "four").unwrap_err();
        match err {
            PrefsError::InvalidValue { key, reason } => {
                assert_eq!(key, "tabwidth");
                assert!(reason.contains("four"));
            }
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }
}
