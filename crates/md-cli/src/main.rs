//! mongodesk - settings maintenance CLI
//!
//! Opens the settings store the desktop client uses (running any pending
//! migration from earlier releases), optionally imports profiles from an
//! external file, and prints the result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Preferences and counts
//! mongodesk --pretty
//!
//! # Import profiles, then list everything
//! mongodesk -c exported.json connections
//! ```

use md_cli::{Cli, CliErrorResult, logger, render};
use md_config::{APP_VERSION, Locations, SettingsStore};

use std::process::ExitCode;

use clap::Parser;
use log::warn;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliErrorResult<String> {
    logger::initialize(cli.log_level, cli.log_file.clone(), !cli.no_color)?;

    // Explicit flag > MONGODESK_HOME > user's home
    let locations = match cli.home {
        Some(ref home) => Locations::new(home, APP_VERSION),
        None => Locations::discover()?,
    };

    let mut store = SettingsStore::open(locations);
    let previous_session_clean = store.mark_session_started();
    if !previous_session_clean {
        warn!("The previous session did not exit normally");
    }

    if let Some(ref path) = cli.config_file {
        if !store.load_connections_from_file(path) {
            warn!("No connections were imported from {}", path.display());
        }
    }

    let output = render(
        cli.selected_command(),
        &store,
        previous_session_clean,
        cli.pretty,
    );
    store.mark_session_finished();
    output
}
