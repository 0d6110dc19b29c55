//! Insertion-ordered association list of string keys to string values.
//!
//! Used for the settings entries and reused by any other component that needs
//! a small list of named fields. Instances never share entries.
//!
//! Keys are case-sensitive and unique within one list. The list only grows
//! through [`insert`](AList::insert), [`update`](AList::update), and
//! [`find_or_create`](AList::find_or_create).
//!
//! # Lazy creation on an empty list
//!
//! `find_or_create` appends after the existing tail. An empty list has no
//! tail, so the call fails with [`PrefsError::DegenerateList`] instead of
//! inventing a head. Use [`insert`](AList::insert) to seed an empty list.

use crate::diagnostics::Diagnostics;
use crate::error::PrefsError;

/// One key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AList {
    entries: Vec<Entry>,
}

impl AList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// First entry whose key equals `key` exactly.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Append a new entry. Works on an empty list (the entry becomes the head).
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Entry, PrefsError> {
        let key = key.into();
        if self.contains(&key) {
            return Err(PrefsError::DuplicateKey(key));
        }
        self.entries.push(Entry {
            key,
            value: value.into(),
        });
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }

    /// Return the entry for `key`, appending one with an empty value when it
    /// is missing. A synthesized entry is reported as a warning.
    pub fn find_or_create(
        &mut self,
        key: &str,
        diagnostics: &dyn Diagnostics,
    ) -> Result<&mut Entry, PrefsError> {
        if let Some(pos) = self.entries.iter().position(|e| e.key == key) {
            return Ok(&mut self.entries[pos]);
        }
        if self.entries.is_empty() {
            return Err(PrefsError::DegenerateList { key: key.into() });
        }
        diagnostics.warn(&format!("can't find `{key}', creating new field for it..."));
        self.entries.push(Entry {
            key: key.into(),
            value: String::new(),
        });
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }

    /// Set the value for `key`, creating the entry through
    /// [`find_or_create`](Self::find_or_create) when absent.
    pub fn update(
        &mut self,
        key: &str,
        value: impl Into<String>,
        diagnostics: &dyn Diagnostics,
    ) -> Result<(), PrefsError> {
        let entry = self.find_or_create(key, diagnostics)?;
        entry.value = value.into();
        Ok(())
    }

    /// Remove the entry for `key`, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.key == key)?;
        Some(self.entries.remove(pos))
    }
}

impl<'a> IntoIterator for &'a AList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Collects pairs in order. When a key repeats, the first occurrence wins.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = AList::new();
        for (key, value) in iter {
            let key = key.into();
            if !list.contains(&key) {
                list.entries.push(Entry {
                    key,
                    value: value.into(),
                });
            }
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Level;
    use crate::fixtures::test::RecordingDiagnostics;

    fn sample() -> AList {
        [("title", "Notes"), ("author", "someone"), ("tags", "")]
            .into_iter()
            .collect()
    }

    #[test]
    fn find_exact_match() {
        let list = sample();
        assert_eq!(list.find("author").unwrap().value, "someone");
    }

    #[test]
    fn find_is_case_sensitive() {
        let list = sample();
        assert!(list.find("Author").is_none());
    }

    #[test]
    fn find_missing_returns_none() {
        assert!(sample().find("nope").is_none());
        assert!(AList::new().find("nope").is_none());
    }

    #[test]
    fn insert_into_empty_becomes_head() {
        let mut list = AList::new();
        list.insert("first", "1").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().unwrap().key, "first");
    }

    #[test]
    fn insert_rejects_duplicate() {
        let mut list = sample();
        let err = list.insert("title", "Other").unwrap_err();
        assert!(matches!(err, PrefsError::DuplicateKey(k) if k == "title"));
        assert_eq!(list.find("title").unwrap().value, "Notes");
    }

    #[test]
    fn find_or_create_existing_does_not_warn() {
        let diag = RecordingDiagnostics::default();
        let mut list = sample();
        let entry = list.find_or_create("title", &diag).unwrap();
        assert_eq!(entry.value, "Notes");
        assert_eq!(list.len(), 3);
        assert_eq!(diag.count(Level::Warning), 0);
    }

    #[test]
    fn find_or_create_appends_empty_with_one_warning() {
        let diag = RecordingDiagnostics::default();
        let mut list = sample();
        let entry = list.find_or_create("year", &diag).unwrap();
        assert_eq!(entry.value, "");
        assert_eq!(list.len(), 4);
        assert_eq!(list.iter().last().unwrap().key, "year");
        assert_eq!(diag.count(Level::Warning), 1);
        assert!(diag.records()[0].1.contains("year"));
    }

    #[test]
    fn find_or_create_on_empty_list_fails() {
        let diag = RecordingDiagnostics::default();
        let mut list = AList::new();
        let err = list.find_or_create("year", &diag).unwrap_err();
        assert!(matches!(err, PrefsError::DegenerateList { key } if key == "year"));
        assert!(list.is_empty());
        assert!(diag.records().is_empty());
    }

    #[test]
    fn update_existing_keeps_position() {
        let diag = RecordingDiagnostics::default();
        let mut list = sample();
        list.update("author", "someone else", &diag).unwrap();
        let keys: Vec<&str> = list.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["title", "author", "tags"]);
        assert_eq!(list.find("author").unwrap().value, "someone else");
    }

    #[test]
    fn update_missing_creates_with_value() {
        let diag = RecordingDiagnostics::default();
        let mut list = sample();
        list.update("year", "2010", &diag).unwrap();
        assert_eq!(list.find("year").unwrap().value, "2010");
        assert_eq!(diag.count(Level::Warning), 1);
    }

    #[test]
    fn collect_keeps_first_duplicate() {
        let list: AList = [("k", "a"), ("k", "b"), ("j", "c")].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert_eq!(list.find("k").unwrap().value, "a");
    }

    #[test]
    fn remove_entry() {
        let mut list = sample();
        let removed = list.remove("author").unwrap();
        assert_eq!(removed.value, "someone");
        assert!(!list.contains("author"));
        assert!(list.remove("author").is_none());
    }

    #[test]
    fn instances_are_independent() {
        let diag = RecordingDiagnostics::default();
        let mut a = sample();
        let b = a.clone();
        a.update("title", "Changed", &diag).unwrap();
        assert_eq!(b.find("title").unwrap().value, "Notes");
    }
}
