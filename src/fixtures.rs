#[cfg(test)]
pub mod test {
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    use confique::Config;
    use serde::{Deserialize, Serialize};

    use crate::builder::Prefs;
    use crate::defaults::DefaultTable;
    use crate::diagnostics::{Diagnostics, Level};
    use crate::store::SettingsStore;

    /// Captures every report. Clones share the same buffer, so a clone handed
    /// to a store can still be inspected by the test.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingDiagnostics {
        records: Rc<RefCell<Vec<(Level, String)>>>,
    }

    impl RecordingDiagnostics {
        pub fn records(&self) -> Vec<(Level, String)> {
            self.records.borrow().clone()
        }

        pub fn count(&self, level: Level) -> usize {
            self.records
                .borrow()
                .iter()
                .filter(|(l, _)| *l == level)
                .count()
        }

        pub fn clear(&self) {
            self.records.borrow_mut().clear();
        }
    }

    impl Diagnostics for RecordingDiagnostics {
        fn report(&self, level: Level, message: &str) {
            self.records.borrow_mut().push((level, message.to_string()));
        }
    }

    pub static TEST_DEFAULTS: &[(&str, &str)] = &[
        ("statusbar", "1"),
        ("toolbar", "1"),
        ("spelling", ""),
        ("tabwidth", "4"),
        ("font", "Monospace 14"),
    ];

    pub fn test_defaults() -> DefaultTable {
        DefaultTable::from_static(TEST_DEFAULTS)
    }

    /// Open a store at `path` over [`TEST_DEFAULTS`] with a recording sink.
    pub fn open_store(path: &Path) -> (SettingsStore, RecordingDiagnostics) {
        let diag = RecordingDiagnostics::default();
        let store = Prefs::builder()
            .path(path)
            .defaults(test_defaults())
            .diagnostics(diag.clone())
            .init()
            .unwrap();
        (store, diag)
    }

    #[derive(Config, Serialize, Deserialize, Debug, PartialEq)]
    pub struct TestSettings {
        /// Show the status bar.
        #[config(default = true)]
        pub statusbar: bool,

        /// Editor font description.
        #[config(default = "Monospace 14")]
        pub font: String,

        /// Spaces per tab stop.
        #[config(default = 4)]
        pub tabwidth: u32,

        /// Dictionary to use for spell checking.
        pub spell_language: Option<String>,

        /// Compilation settings.
        #[config(nested)]
        pub compile: TestCompileSettings,
    }

    #[derive(Config, Serialize, Deserialize, Debug, PartialEq)]
    pub struct TestCompileSettings {
        /// Typesetter binary.
        #[config(default = "pdflatex")]
        pub typesetter: String,

        /// Recompile automatically while typing.
        #[config(default = false)]
        pub realtime: bool,
    }

    #[test]
    fn test_settings_loads_defaults() {
        let settings = TestSettings::builder().load().unwrap();
        assert!(settings.statusbar);
        assert_eq!(settings.font, "Monospace 14");
        assert_eq!(settings.tabwidth, 4);
        assert_eq!(settings.spell_language, None);
        assert_eq!(settings.compile.typesetter, "pdflatex");
        assert!(!settings.compile.realtime);
    }

    #[test]
    fn recording_clones_share_buffer() {
        let a = RecordingDiagnostics::default();
        let b = a.clone();
        b.warn("shared");
        assert_eq!(a.count(Level::Warning), 1);
        a.clear();
        assert!(b.records().is_empty());
    }
}
