//! File-backed application settings with compiled-in defaults.
//!
//! Prefstore keeps a flat catalogue of `key = value` settings in one file per
//! application. Every value is stored as text; booleans and integers are
//! encoded on the way in and decoded by the typed getters.
//!
//! ```ignore
//! let mut store = Prefs::builder().app_name("gummi").init()?;
//! if store.get_bool("statusbar")? {
//!     // ...
//! }
//! store.set("tabwidth", 2)?;
//! ```
//!
//! That call finds `gummi.toml` in the platform config directory, fills in
//! every built-in default the file lacks, writes the merged result back, and
//! hands you a store whose reads never touch the disk.
//!
//! # The file
//!
//! One setting per line, in a flat TOML subset:
//!
//! ```text
//! statusbar = "1"
//! spelling = ""
//! font = "Monospace 14"
//! ```
//!
//! Values are always written as single-line strings. On read, bare integers,
//! floats and booleans are accepted and turned into their text form, so a
//! hand-edited `tabwidth = 4` works. Tables and arrays are rejected. Files are
//! bounded by [`Limits`]: 64 records and 1024 bytes per line unless configured
//! otherwise. A file that breaks the format or the bounds is reported as a
//! warning and read as empty, so the defaults take over.
//!
//! # Booleans
//!
//! `true` is stored as `"1"` and `false` as `""`. Any non-empty value reads as
//! true, including `"0"`.
//!
//! # Defaults
//!
//! A [`DefaultTable`] lists every known key with its factory value, in display
//! order. [`DefaultTable::editor`] is the built-in table; build your own with
//! [`DefaultTable::from_static`], or derive one from a confique settings struct
//! with [`DefaultTable::from_config`]. Keys in the file that the table does
//! not know are kept.
//!
//! # Diagnostics
//!
//! The store reports through a [`Diagnostics`] sink chosen at construction.
//! [`TracingDiagnostics`] (the default) forwards to `tracing`; tests and
//! embedders can pass their own.
//!
//! # Clap adapter
//!
//! The core parses no command lines. Applications that use clap can opt into
//! the `cli` module:
//!
//! ```toml
//! prefstore = { version = "...", features = ["clap"] }
//! ```
//!
//! It provides `PrefsArgs`, a derive struct that gives your app `prefs
//! list|get|set|reset`. `PrefsArgs::into_action` yields a [`SettingsAction`]
//! for [`PrefsBuilder::handle`].
//!
//! # Error handling
//!
//! All fallible operations return [`PrefsError`]. See the [`error`] module for
//! the full set.

pub mod error;
pub mod types;

mod alist;
mod builder;
#[cfg(feature = "clap")]
mod cli;
mod codec;
mod defaults;
mod diagnostics;
mod file;
mod flatten;
mod ops;
mod persist;
mod store;
mod value;

#[cfg(test)]
mod fixtures;

pub use alist::{AList, Entry};
pub use builder::{Prefs, PrefsBuilder};
#[cfg(feature = "clap")]
pub use cli::{PrefsArgs, PrefsSubcommand};
pub use codec::Limits;
pub use defaults::{DefaultTable, EDITOR_DEFAULTS};
pub use diagnostics::{Diagnostics, Level, TracingDiagnostics};
pub use error::PrefsError;
pub use flatten::flatten;
pub use ops::PrefsResult;
pub use store::SettingsStore;
pub use types::{SearchPath, SettingsAction};
pub use value::{SettingValue, parse_int, truthy};
