//! # prefstore demo application
//!
//! A sample CLI that stores editor preferences with prefstore. It exists to
//! demonstrate and manually verify the library, not as a real tool.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example prefs_demo -- prefs list
//! cargo run --example prefs_demo -- --file /tmp/demo.toml prefs set spelling 1
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                  | How to exercise it                                             |
//! |--------------------------|----------------------------------------------------------------|
//! | Defaults merged on start | `prefs list` against a missing or partial file                 |
//! | Struct-derived defaults  | `--struct-defaults prefs list`                                 |
//! | Boolean sentinel         | `prefs set spelling ""`, then `show`                           |
//! | Lazy key creation        | `prefs set newkey x` logs a warning                            |
//! | Factory reset            | `prefs reset`                                                  |
//! | Diagnostics              | `--debug` or `RUST_LOG=prefstore=debug`                        |

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prefstore::{DefaultTable, Prefs, PrefsArgs, PrefsBuilder, PrefsError, SettingsStore};

use config::EditorSettings;

// ---------------------------------------------------------------------------
// CLI definitions
// ---------------------------------------------------------------------------

/// prefstore demo: editor preferences kept in a small settings file.
#[derive(Parser, Debug)]
#[command(name = "prefs-demo")]
struct Cli {
    /// Use this settings file instead of the platform config directory.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Take defaults from the `EditorSettings` struct instead of the
    /// built-in editor table.
    #[arg(long, global = true)]
    struct_defaults: bool,

    /// Log at debug level.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a few settings through the typed getters.
    Show,
    /// Manage the settings file (list, get, set, reset).
    Prefs(PrefsArgs),
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn init_tracing(debug: bool) {
    let default = if debug { "prefstore=debug" } else { "prefstore=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn make_builder(cli: &Cli) -> Result<PrefsBuilder, PrefsError> {
    let mut builder = Prefs::builder().app_name("prefs-demo");
    if let Some(path) = &cli.file {
        builder = builder.path(path);
    }
    if cli.struct_defaults {
        builder = builder.defaults(DefaultTable::from_config::<EditorSettings>()?);
    }
    Ok(builder)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn show(store: &SettingsStore) -> Result<(), PrefsError> {
    println!("settings file: {}", store.path().display());
    println!("statusbar:     {}", store.get_bool("statusbar")?);
    println!("spelling:      {}", store.get_bool("spelling")?);
    println!("tabwidth:      {}", store.get_int("tabwidth")?);
    println!("font:          {}", store.get("font")?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), PrefsError> {
    let builder = make_builder(&cli)?;
    match cli.command {
        Commands::Show => show(&builder.init()?),
        Commands::Prefs(args) => builder.handle_and_print(&args.into_action()),
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Settings error:\n{e}");
        std::process::exit(1);
    }
}
