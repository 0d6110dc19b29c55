//! File-backed settings catalogue.
//!
//! The file is the source of truth. The store keeps the parsed entries in
//! memory for reads and rewrites the whole file after every mutation, so the
//! two never disagree for longer than one call. There is no write-ahead log
//! and no locking: one running instance owns the file, and the last `set`
//! wins. Rewriting everything on each change caps the practical size at a few
//! dozen records.
//!
//! # Startup merge
//!
//! [`init`](SettingsStore::init) loads the file, then appends every key of the
//! [`DefaultTable`] the file lacks, in table order, and saves immediately. A
//! file written by an older release therefore gains new settings on first
//! start, and keys unknown to the table are kept as they are.
//!
//! # Failure policy
//!
//! - Missing file: treated as empty.
//! - Unreadable or malformed file: treated as empty, reported as a warning.
//! - File that loads but overflows the limits once defaults are merged:
//!   treated like a malformed file.
//! - Failed write: returned to the caller. A failed `set`, `set_default` or
//!   `reload` leaves the in-memory entries as they were before the call.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::alist::AList;
use crate::codec::{self, Limits};
use crate::defaults::DefaultTable;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::PrefsError;
use crate::file;
use crate::persist;
use crate::value::{self, SettingValue};

pub struct SettingsStore {
    path: PathBuf,
    entries: AList,
    defaults: DefaultTable,
    diagnostics: Box<dyn Diagnostics>,
    limits: Limits,
}

impl SettingsStore {
    /// Open the settings file at `path` with the editor's built-in defaults,
    /// reporting through `tracing`. Use [`Prefs::builder`](crate::Prefs::builder)
    /// for anything else.
    pub fn init(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        Self::open(
            path.into(),
            DefaultTable::editor(),
            Box::new(TracingDiagnostics),
            Limits::default(),
        )
    }

    pub(crate) fn open(
        path: PathBuf,
        defaults: DefaultTable,
        diagnostics: Box<dyn Diagnostics>,
        limits: Limits,
    ) -> Result<Self, PrefsError> {
        let mut store = Self {
            path,
            entries: AList::new(),
            defaults,
            diagnostics,
            limits,
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read the file, merge missing defaults, and write the result back.
    ///
    /// A file that loads but would break the limits once the defaults are
    /// merged in is treated like a malformed one: the store starts over from
    /// the default table.
    pub fn reload(&mut self) -> Result<(), PrefsError> {
        let mut entries = self.load();
        self.merge_defaults(&mut entries)?;
        if let Err(e) = self.check(&entries) {
            self.diagnostics.warn(&format!("{e}; falling back to defaults"));
            entries = self.defaults.to_alist();
        }
        self.commit(entries)
    }

    /// Replace every entry with the default table and save.
    pub fn set_default(&mut self) -> Result<(), PrefsError> {
        let entries = self.defaults.to_alist();
        self.commit(entries)?;
        self.diagnostics.info(&format!(
            "settings in {} restored to defaults",
            self.path.display()
        ));
        Ok(())
    }

    /// Current raw value of `key`.
    ///
    /// Falls back to the default table when the key is not in the entries.
    /// Fails only when neither has it.
    pub fn get(&self, key: &str) -> Result<&str, PrefsError> {
        if let Some(entry) = self.entries.find(key) {
            return Ok(entry.value.as_str());
        }
        self.defaults
            .get(key)
            .ok_or_else(|| PrefsError::KeyNotFound(key.into()))
    }

    /// Boolean reading of `key`: empty is false, anything else is true.
    pub fn get_bool(&self, key: &str) -> Result<bool, PrefsError> {
        self.get(key).map(value::truthy)
    }

    pub fn get_int(&self, key: &str) -> Result<i64, PrefsError> {
        value::parse_int(key, self.get(key)?)
    }

    /// Set `key` and rewrite the file.
    ///
    /// A key not yet present is appended (with a warning). Booleans and
    /// integers are encoded as described in [`SettingValue`].
    pub fn set(&mut self, key: &str, value: impl Into<SettingValue>) -> Result<(), PrefsError> {
        codec::validate_key(key)?;
        let raw = value.into().encode();
        let mut entries = self.entries.clone();
        entries.update(key, raw, self.diagnostics.as_ref())?;
        self.commit(entries)
    }

    /// Restore a single key to its default and save.
    pub fn reset_key(&mut self, key: &str) -> Result<(), PrefsError> {
        let default = self
            .defaults
            .get(key)
            .ok_or_else(|| PrefsError::KeyNotFound(key.into()))?
            .to_string();
        self.set(key, default)
    }

    pub fn entries(&self) -> &AList {
        &self.entries
    }

    /// Ordered `(key, value)` snapshot of every entry.
    pub fn dump(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn defaults(&self) -> &DefaultTable {
        &self.defaults
    }

    /// Parse the backing file. Never fails: anything short of a valid file
    /// yields an empty list.
    pub(crate) fn load(&self) -> AList {
        let content = match file::read_buffer(&self.path) {
            Ok(Some(content)) => content,
            Ok(None) => {
                self.diagnostics.info(&format!(
                    "no settings file at {}, starting from defaults",
                    self.path.display()
                ));
                return AList::new();
            }
            Err(e) => {
                self.diagnostics.warn(&format!("{e}; falling back to defaults"));
                return AList::new();
            }
        };

        match codec::parse(&content, &self.limits, &self.path) {
            Ok(list) => {
                self.diagnostics.info(&format!(
                    "loaded {} settings from {}",
                    list.len(),
                    self.path.display()
                ));
                list
            }
            Err(e) => {
                self.diagnostics.warn(&format!("{e}; falling back to defaults"));
                AList::new()
            }
        }
    }

    /// Append every default whose key is missing from `entries`.
    fn merge_defaults(&self, entries: &mut AList) -> Result<(), PrefsError> {
        for (key, value) in self.defaults.iter() {
            if !entries.contains(key) {
                self.diagnostics
                    .debug(&format!("adding default `{key}' = `{value}'"));
                entries.insert(key, value)?;
            }
        }
        Ok(())
    }

    /// Render `entries` and check the buffer against the limits.
    fn check(&self, entries: &AList) -> Result<String, PrefsError> {
        let content = codec::render(entries)?;
        codec::check_bounds(&content, entries.len(), &self.limits, &self.path)?;
        Ok(content)
    }

    /// Write `entries` and adopt them only once the file holds them.
    fn commit(&mut self, entries: AList) -> Result<(), PrefsError> {
        let content = self.check(&entries)?;
        persist::write_buffer(&self.path, &content)?;
        self.entries = entries;
        Ok(())
    }

    /// Rewrite the whole file from the entries.
    ///
    /// Refuses to write a buffer that would not load back under the
    /// configured limits.
    pub(crate) fn save(&self) -> Result<(), PrefsError> {
        let content = self.check(&self.entries)?;
        persist::write_buffer(&self.path, &content)
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("path", &self.path)
            .field("entries", &self.entries)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
