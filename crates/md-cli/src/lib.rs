//! md-cli library
//!
//! Argument parsing, logging setup and command rendering for the `mongodesk`
//! binary, exported for tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod log_level;
pub mod logger;


pub use cli::Cli;
pub use commands::{Commands, Summary, render};
pub use error::{CliError, Result as CliErrorResult};
pub use log_level::LogLevel;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
