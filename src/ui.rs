use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// severity of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Status,
    Info,
    Warning,
    Error,
    Debug,
}

impl Level {
    fn paint(self, line: &str) -> String {
        match self {
            Level::Status => line.green().to_string(),
            Level::Info => line.to_string(),
            Level::Warning => line.yellow().to_string(),
            Level::Error => line.red().to_string(),
            Level::Debug => line.dimmed().to_string(),
        }
    }

    /// debug lines only show with --verbose
    pub fn enabled(self) -> bool {
        self != Level::Debug || is_verbose()
    }
}

/// write one log line to stderr; stdout is reserved for job outputs
pub fn log(level: Level, message: fmt::Arguments) {
    if level.enabled() {
        let _ = writeln!(io::stderr(), "{}", level.paint(&message.to_string()));
    }
}

#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        $crate::ui::log($crate::ui::Level::Status, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::ui::log($crate::ui::Level::Info, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::ui::log($crate::ui::Level::Warning, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::ui::log($crate::ui::Level::Error, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::ui::log($crate::ui::Level::Debug, format_args!($($arg)*))
    };
}

/// run `f` behind a spinner when stderr is a terminal
pub fn with_spinner<T>(f: impl FnOnce() -> T) -> T {
    // a spinner would interleave with --verbose output and is noise in ci logs
    if !io::stderr().is_terminal() || is_verbose() {
        return f();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("listing files...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = f();

    spinner.finish_and_clear();
    result
}

/// report a fatal error, also as a workflow command when running in github actions
pub fn fail(message: &str) {
    if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
        let _ = writeln!(io::stdout(), "{}", workflow_error(message));
    }
    error!("{}", message);
}

/// format a `::error::` workflow command, escaping as the runner expects
pub fn workflow_error(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}
