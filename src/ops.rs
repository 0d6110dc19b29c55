//! Settings operations behind `prefs list|get|set|reset`, and the
//! `PrefsResult` enum that callers use to display results.

use std::fmt;
use std::path::PathBuf;

use crate::error::PrefsError;
use crate::store::SettingsStore;
use crate::types::SettingsAction;

/// Result of a settings operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum PrefsResult {
    /// A key's current value.
    KeyValue { key: String, value: String },
    /// Confirmation that a value was persisted.
    ValueSet { key: String, value: String },
    /// Every entry, in file order.
    Listing { entries: Vec<(String, String)> },
    /// Confirmation that factory settings were written to `path`.
    Reset { path: PathBuf },
}

impl fmt::Display for PrefsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            PrefsResult::ValueSet { key, value } => write!(f, "Set {key} = {value}"),
            PrefsResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
            PrefsResult::Reset { path } => {
                write!(f, "Settings reset to defaults in {}", path.display())
            }
        }
    }
}

/// Run `action` against an open store.
pub fn apply(store: &mut SettingsStore, action: &SettingsAction) -> Result<PrefsResult, PrefsError> {
    match action {
        SettingsAction::List => Ok(PrefsResult::Listing {
            entries: store.dump(),
        }),
        SettingsAction::Get { key } => Ok(PrefsResult::KeyValue {
            key: key.clone(),
            value: store.get(key)?.to_string(),
        }),
        SettingsAction::Set { key, value } => {
            store.set(key, value)?;
            Ok(PrefsResult::ValueSet {
                key: key.clone(),
                value: value.clone(),
            })
        }
        SettingsAction::Reset => {
            store.set_default()?;
            Ok(PrefsResult::Reset {
                path: store.path().to_path_buf(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{TEST_DEFAULTS, open_store};
    use tempfile::TempDir;

    #[test]
    fn list_returns_all_entries_in_order() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_store(&dir.path().join("p.toml"));
        match apply(&mut store, &SettingsAction::List).unwrap() {
            PrefsResult::Listing { entries } => {
                assert_eq!(entries.len(), TEST_DEFAULTS.len());
                assert_eq!(entries[0], ("statusbar".to_string(), "1".to_string()));
            }
            other => panic!("Expected Listing, got {other:?}"),
        }
    }

    #[test]
    fn get_returns_value() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_store(&dir.path().join("p.toml"));
        let result = apply(
            &mut store,
            &SettingsAction::Get {
                key: "font".into(),
            },
        )
        .unwrap();
        assert_eq!(
            result,
            PrefsResult::KeyValue {
                key: "font".into(),
                value: "Monospace 14".into()
            }
        );
    }

    #[test]
    fn get_missing_key_errors() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = open_store(&dir.path().join("p.toml"));
        let result = apply(&mut store, &SettingsAction::Get { key: "nope".into() });
        assert!(matches!(result, Err(PrefsError::KeyNotFound(_))));
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.toml");
        let (mut store, _) = open_store(&path);
        let result = apply(
            &mut store,
            &SettingsAction::Set {
                key: "tabwidth".into(),
                value: "2".into(),
            },
        )
        .unwrap();
        assert!(matches!(result, PrefsResult::ValueSet { .. }));
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("tabwidth = \"2\""));
    }

    #[test]
    fn reset_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("p.toml");
        let (mut store, _) = open_store(&path);
        store.set("font", "Sans").unwrap();
        let result = apply(&mut store, &SettingsAction::Reset).unwrap();
        assert_eq!(result, PrefsResult::Reset { path: path.clone() });
        assert_eq!(store.get("font").unwrap(), "Monospace 14");
    }

    #[test]
    fn listing_display_format() {
        let result = PrefsResult::Listing {
            entries: vec![
                ("statusbar".into(), "1".into()),
                ("spelling".into(), "".into()),
            ],
        };
        assert_eq!(format!("{result}"), "statusbar = 1\nspelling = ");
    }

    #[test]
    fn value_set_display_format() {
        let result = PrefsResult::ValueSet {
            key: "font".into(),
            value: "Sans".into(),
        };
        assert_eq!(result.to_string(), "Set font = Sans");
    }
}
