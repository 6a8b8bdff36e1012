//! Console and file logging
//!
//! Progress notices, rename notices and errors all go through the `log`
//! facade. The console gets them on stdout, coloured by level when stdout is a
//! terminal. An optional log file receives the same records with timestamps.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// How much a run reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Progress and rename notices
    #[default]
    Normal,
    /// Adds unchanged entries and the resolved configuration
    Verbose,
    /// Everything
    Trace,
}

impl Verbosity {
    /// Verbosity for `--quiet` and the number of `-v` flags, where quiet wins
    pub fn from_flags(quiet: bool, occurrences: u8) -> Self {
        match (quiet, occurrences) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Normal,
            (false, 1) => Verbosity::Verbose,
            (false, _) => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

fn stdout_is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn console_dispatch() -> Dispatch {
    if !stdout_is_terminal() {
        return Dispatch::new()
            .format(|out, message, _| out.finish(format_args!("{message}")))
            .chain(std::io::stdout());
    }

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "\x1B[{}m{}\x1B[0m",
                colors.get_color(&record.level()).to_fg_str(),
                message
            ))
        })
        .chain(std::io::stdout())
}

fn file_dispatch(path: &Path) -> Result<Dispatch> {
    let file = fern::log_file(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                message
            ))
        })
        .chain(file))
}

/// Installs the global logger
///
/// # Errors
/// Returns an error if the log file cannot be opened or a logger is already set
pub fn init_logger(verbosity: Verbosity, log_file: Option<&Path>) -> Result<()> {
    let mut logger = Dispatch::new()
        .level(verbosity.level_filter())
        .chain(console_dispatch());

    if let Some(path) = log_file {
        logger = logger.chain(file_dispatch(path)?);
    }

    logger.apply()?;
    log::debug!("Logging at {verbosity:?}");

    Ok(())
}

/// Picks the coloured variant of a message when stdout is a terminal
pub fn format_message(message: &str, colored_message: &str) -> String {
    if stdout_is_terminal() {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
