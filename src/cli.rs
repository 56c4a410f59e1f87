//! Command-line surface: the source file plus ambient logging flags.
//! Matches the shape of the original `argparse` setup — one positional
//! file argument, one `--scope` flag — with an added `-v/--verbosity`
//! for the logging layer underneath it.

use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};
use log::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

#[derive(Debug, ClapParser)]
#[command(name = "glint", about = "Runs a glint source file")]
pub struct Cli {
    /// Path to the source file to run.
    pub file: PathBuf,

    /// Log level for internal diagnostics (separate from `give` output).
    #[arg(short, long, value_enum, default_value_t = LogLevel::Error)]
    pub verbosity: LogLevel,

    /// Enables verbose scope push/pop/declare logging at debug level.
    #[arg(long)]
    pub scope: bool,
}
