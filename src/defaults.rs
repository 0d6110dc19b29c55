//! Compiled-in fallback values.
//!
//! A [`DefaultTable`] is read-only once built. The store only uses it to seed
//! keys missing from the file and to restore factory settings.
//!
//! Tables come from a static slice ([`from_static`](DefaultTable::from_static),
//! [`editor`](DefaultTable::editor)) or from a typed settings struct
//! ([`from_config`](DefaultTable::from_config)), in which case the struct's
//! `#[config(default = ...)]` attributes are the defaults and its field order is
//! the table order.

use confique::Config;
use serde::Serialize;

use crate::alist::AList;
use crate::error::PrefsError;
use crate::flatten;

/// Built-in defaults for the editor application.
pub static EDITOR_DEFAULTS: &[(&str, &str)] = &[
    ("mainwindow_x", "0"),
    ("mainwindow_y", "0"),
    ("mainwindow_w", "792"),
    ("mainwindow_h", "558"),
    ("mainwindow_max", ""),
    ("toolbar", "1"),
    ("statusbar", "1"),
    ("rightpane", "1"),
    ("font", "Monospace 14"),
    ("tabwidth", "4"),
    ("spaces_instof_tabs", ""),
    ("autoindentation", "1"),
    ("line_numbers", "1"),
    ("highlighting", "1"),
    ("textwrapping", "1"),
    ("wordwrapping", "1"),
    ("style_scheme", "classic"),
    ("spelling", ""),
    ("spell_language", "None"),
    ("autosaving", ""),
    ("autosave_timer", "10"),
    ("compile_status", "1"),
    ("compile_scheme", "on_idle"),
    ("compile_timer", "1"),
    ("typesetter", "pdflatex"),
    ("extra_flags", "-interaction=nonstopmode"),
    ("snippets", "1"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTable {
    list: AList,
}

impl DefaultTable {
    /// Build from a static slice. A repeated key keeps its first value.
    pub fn from_static(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            list: pairs.iter().copied().collect(),
        }
    }

    /// The editor's built-in table, [`EDITOR_DEFAULTS`].
    pub fn editor() -> Self {
        Self::from_static(EDITOR_DEFAULTS)
    }

    /// Derive the table from a confique settings struct.
    ///
    /// Every field must be loadable from defaults alone: a required field
    /// without `#[config(default = ...)]` is a [`PrefsError::ConfigError`].
    /// `Option` fields without a default become empty (unset) values.
    pub fn from_config<C: Config + Serialize>() -> Result<Self, PrefsError> {
        let config = C::builder().load()?;
        let pairs = flatten::flatten(&config)?;
        Ok(Self {
            list: pairs
                .into_iter()
                .map(|(key, value)| (key, value.encode()))
                .collect(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.list.find(key).map(|e| e.value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.list.contains(key)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// `(key, default)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.list.iter().map(|e| (e.key.as_str(), e.value.as_str()))
    }

    /// A fresh, independently owned list holding every default.
    pub fn to_alist(&self) -> AList {
        self.list.clone()
    }
}

impl Default for DefaultTable {
    fn default() -> Self {
        Self::editor()
    }
}
