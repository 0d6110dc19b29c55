use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Malformed settings file {path}: {reason}")]
    MalformedFile { path: PathBuf, reason: String },

    #[error("I/O error on {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create '{key}' in an empty list: there is no entry to append after")]
    DegenerateList { key: String },

    #[error("Duplicate key '{0}'")]
    DuplicateKey(String),

    #[error("Invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] confique::Error),

    #[error("Cannot flatten settings struct: {0}")]
    Flatten(String),

    #[error("No settings location could be resolved (no home or config directory found)")]
    NoSettingsPath,

    #[error("App name is required: call .app_name() or .path() on the builder")]
    AppNameRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_file_formats_correctly() {
        let err = PrefsError::MalformedFile {
            path: "/home/user/.config/gummi/gummi.toml".into(),
            reason: "line 3 exceeds 1024 bytes".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gummi.toml"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn key_not_found_formats() {
        let err = PrefsError::KeyNotFound("statusbar".into());
        assert!(err.to_string().contains("statusbar"));
    }

    #[test]
    fn degenerate_list_names_key() {
        let err = PrefsError::DegenerateList {
            key: "author".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("author"));
        assert!(msg.contains("empty list"));
    }

    #[test]
    fn app_name_required_formats() {
        let err = PrefsError::AppNameRequired;
        assert!(err.to_string().contains("app_name"));
    }
}
