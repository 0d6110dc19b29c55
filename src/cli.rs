//! Clap adapter for prefstore.
//!
//! Compiled only when the opt-in `clap` Cargo feature is enabled.
//! [`PrefsArgs`] embeds into an application's clap derive to give it
//! `prefs list|get|set|reset` subcommands. The only bridge to the core is
//! [`PrefsArgs::into_action()`], which yields a [`SettingsAction`] for
//! [`PrefsBuilder::handle()`](crate::PrefsBuilder::handle).

use clap::{Args, Subcommand};

use crate::types::SettingsAction;

/// Clap-derived args for the `prefs` subcommand group.
///
/// ```ignore
/// #[derive(Subcommand)]
/// enum Commands {
///     Prefs(PrefsArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub action: Option<PrefsSubcommand>,
}

/// Available settings subcommands.
#[derive(Debug, Subcommand)]
pub enum PrefsSubcommand {
    /// Show every stored setting in file order.
    List,
    /// Show the value of one setting.
    Get {
        key: String,
    },
    /// Store a value and rewrite the settings file.
    Set {
        key: String,
        /// Use "" to switch a flag off.
        value: String,
    },
    /// Overwrite every setting with its built-in default.
    Reset,
}

impl PrefsArgs {
    /// Bare `prefs` and explicit `prefs list` both map to
    /// `SettingsAction::List`.
    pub fn into_action(self) -> SettingsAction {
        match self.action {
            None | Some(PrefsSubcommand::List) => SettingsAction::List,
            Some(PrefsSubcommand::Get { key }) => SettingsAction::Get { key },
            Some(PrefsSubcommand::Set { key, value }) => SettingsAction::Set { key, value },
            Some(PrefsSubcommand::Reset) => SettingsAction::Reset,
        }
    }
}
