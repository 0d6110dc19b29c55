//! Locating the settings file and reading its raw buffer.
//!
//! The location is a single directory described by a [`SearchPath`]; the file
//! name is joined onto it. A missing file is not an error at this layer: it
//! reads as `None` so the store can fall back to defaults.

use std::path::{Path, PathBuf};

use crate::error::PrefsError;
use crate::types::SearchPath;

/// Resolve a [`SearchPath`] to a concrete directory.
///
/// `app_name` is used by `SearchPath::Platform` to construct the platform-specific
/// config directory (e.g. `~/.config/{app_name}/` on Linux).
///
/// Returns `None` if the path cannot be resolved (e.g. no home directory found).
pub fn resolve_search_path(sp: &SearchPath, app_name: &str) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
    }
}

/// Full path of the settings file inside `location`.
pub fn resolve_settings_path(
    location: &SearchPath,
    file_name: &str,
    app_name: &str,
) -> Result<PathBuf, PrefsError> {
    resolve_search_path(location, app_name)
        .map(|dir| dir.join(file_name))
        .ok_or(PrefsError::NoSettingsPath)
}

/// Read the whole file. `Ok(None)` when it does not exist.
pub fn read_buffer(path: &Path) -> Result<Option<String>, PrefsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(PrefsError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
