//! Leveled diagnostics sink.
//!
//! The store never logs through ambient global state. It reports through a
//! [`Diagnostics`] implementation handed to it at construction, so the core can
//! run (and be asserted on) without any logging backend installed. The default
//! implementation, [`TracingDiagnostics`], forwards to the `tracing` macros.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Only interesting while debugging; filtered out by default.
    Debug,
    Info,
    /// Recoverable: something was missing or malformed and a fallback was used.
    Warning,
    Error,
    /// Unrecoverable. The store never reports this itself; callers may.
    Fatal,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Fatal => "Fatal",
        };
        write!(f, "{label}")
    }
}

/// Receiver for the store's diagnostic messages.
pub trait Diagnostics {
    fn report(&self, level: Level, message: &str);

    fn debug(&self, message: &str) {
        self.report(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}

/// Forwards every report to the matching `tracing` macro.
///
/// `Fatal` has no `tracing` counterpart and is emitted as an `error!` event
/// carrying a `fatal = true` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Warning => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
            Level::Fatal => tracing::error!(fatal = true, "{message}"),
        }
    }
}
