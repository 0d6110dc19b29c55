//! Settings struct for the prefstore demo application.
//!
//! The struct is only used as a source of defaults: its
//! `#[config(default = ...)]` values, flattened in field order, become the
//! demo's [`DefaultTable`](prefstore::DefaultTable). Nested structs produce
//! dotted keys such as `compile.typesetter`.

use confique::Config;
use serde::{Deserialize, Serialize};

/// Root settings for the demo editor.
#[derive(Config, Serialize, Deserialize, Debug)]
pub struct EditorSettings {
    /// Show the status bar.
    #[config(default = true)]
    pub statusbar: bool,

    /// Show the toolbar.
    #[config(default = true)]
    pub toolbar: bool,

    /// Spell checking on or off.
    #[config(default = false)]
    pub spelling: bool,

    #[config(default = 4)]
    pub tabwidth: u32,

    /// Editor font, as a Pango font description.
    #[config(default = "Monospace 14")]
    pub font: String,

    /// Build settings (nested).
    #[config(nested)]
    pub compile: CompileSettings,
}

/// Settings for the document build step.
#[derive(Config, Serialize, Deserialize, Debug)]
pub struct CompileSettings {
    #[config(default = "pdflatex")]
    pub typesetter: String,

    /// Rebuild the preview while typing.
    #[config(default = true)]
    pub realtime: bool,

    /// Seconds of idle time before a realtime rebuild.
    #[config(default = 1)]
    pub timer: u32,
}
