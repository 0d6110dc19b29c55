//! Writing the settings file.
//!
//! Every save replaces the whole file with a freshly rendered buffer; there
//! are no partial or appending writes. Parent directories are created as
//! needed.

use std::path::Path;

use crate::error::PrefsError;

/// Replace the file at `path` with `content`, creating parent directories.
pub fn write_buffer(path: &Path, content: &str) -> Result<(), PrefsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PrefsError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, content).map_err(|e| PrefsError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}
