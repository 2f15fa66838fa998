use crate::{Commands, LogLevel};

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "mongodesk")]
#[command(about = "Inspect and maintain MongoDesk settings")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Import connection profiles from this JSON file before running the command
    #[arg(short = 'c', long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Home directory to read settings from (defaults to $MONGODESK_HOME, then the user's home)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LogLevel,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// The requested subcommand, `summary` when none was given.
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}
