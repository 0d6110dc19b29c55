use std::path::{Path, PathBuf};

use crate::codec::Limits;
use crate::defaults::DefaultTable;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::PrefsError;
use crate::file;
use crate::ops::{self, PrefsResult};
use crate::store::SettingsStore;
use crate::types::{SearchPath, SettingsAction};

/// Entry point for opening a settings store.
pub struct Prefs;

impl Prefs {
    pub fn builder() -> PrefsBuilder {
        PrefsBuilder::new()
    }
}

/// Builder for a [`SettingsStore`].
///
/// Controls where the file lives and what the store is seeded with:
///
/// - **Location**: [`app_name()`](Self::app_name), [`file_name()`](Self::file_name)
///   and [`location()`](Self::location), or a fixed [`path()`](Self::path).
/// - **Defaults**: [`defaults()`](Self::defaults), the editor table unless replaced.
/// - **Reporting**: [`diagnostics()`](Self::diagnostics), `tracing` unless replaced.
pub struct PrefsBuilder {
    app_name: Option<String>,
    file_name: Option<String>,
    location: SearchPath,
    path: Option<PathBuf>,
    defaults: Option<DefaultTable>,
    diagnostics: Option<Box<dyn Diagnostics>>,
    limits: Limits,
}

impl PrefsBuilder {
    fn new() -> Self {
        Self {
            app_name: None,
            file_name: None,
            location: SearchPath::Platform,
            path: None,
            defaults: None,
            diagnostics: None,
            limits: Limits::default(),
        }
    }

    /// Set the application name. This derives sensible defaults:
    /// - `file_name` → `"{app_name}.toml"`
    /// - the platform config directory for `{app_name}` as the location
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    /// Override the settings file name (default: `"{app_name}.toml"`).
    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = Some(name.to_string());
        self
    }

    /// Directory holding the settings file (default: [`SearchPath::Platform`]).
    pub fn location(mut self, location: SearchPath) -> Self {
        self.location = location;
        self
    }

    /// Use exactly this file. Takes precedence over the app name, file name
    /// and location.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the built-in editor defaults.
    pub fn defaults(mut self, defaults: DefaultTable) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Route diagnostics somewhere other than `tracing`.
    pub fn diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Some(Box::new(diagnostics));
        self
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Resolve the effective app name, or error if not set.
    fn effective_app_name(&self) -> Result<&str, PrefsError> {
        self.app_name.as_deref().ok_or(PrefsError::AppNameRequired)
    }

    /// Resolve the effective file name.
    fn effective_file_name(&self) -> Result<String, PrefsError> {
        if let Some(name) = &self.file_name {
            return Ok(name.clone());
        }
        let app = self.effective_app_name()?;
        Ok(format!("{app}.toml"))
    }

    /// Full path of the settings file this builder would open.
    pub fn settings_path(&self) -> Result<PathBuf, PrefsError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let app_name = self.effective_app_name()?;
        let file_name = self.effective_file_name()?;
        file::resolve_settings_path(&self.location, &file_name, app_name)
    }

    /// Open the store: load the file, merge missing defaults, save.
    pub fn init(self) -> Result<SettingsStore, PrefsError> {
        let path = self.settings_path()?;
        SettingsStore::open(
            path,
            self.defaults.unwrap_or_default(),
            self.diagnostics
                .unwrap_or_else(|| Box::new(TracingDiagnostics)),
            self.limits,
        )
    }

    /// Handle a `SettingsAction` and print the result to stdout.
    pub fn handle_and_print(self, action: &SettingsAction) -> Result<(), PrefsError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }

    /// Open the store and handle a `SettingsAction` (list / get / set / reset).
    pub fn handle(self, action: &SettingsAction) -> Result<PrefsResult, PrefsError> {
        let mut store = self.init()?;
        ops::apply(&mut store, action)
    }
}
