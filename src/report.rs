//! Status reporting for asset operations.
//!
//! Linking is best effort: problems with single entries are reported here and
//! never abort an operation.

use std::cell::RefCell;
use std::fmt;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
    /// Unleveled progress line, e.g. an asset being linked.
    Custom,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Custom => "custom",
        })
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    fn report(&self, level: Level, message: &str);
}

impl<T: Reporter + ?Sized> Reporter for &T {
    fn report(&self, level: Level, message: &str) {
        (**self).report(level, message)
    }
}

/// Format a status line the way it is shown on the terminal.
pub fn render(level: Level, message: &str) -> String {
    match level {
        Level::Info | Level::Custom => message.to_string(),
        Level::Warning => format!("Warning: {}", message),
        Level::Error => format!("Error: {}", message),
    }
}

/// Writes status lines to the terminal.
///
/// Info and progress lines go to stdout, warnings and errors to stderr. The
/// `log` facade only sees them at debug level.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, level: Level, message: &str) {
        log::debug!("{}: {}", level, message);

        let line = render(level, message);
        match level {
            Level::Info | Level::Custom => println!("{}", line),
            Level::Warning | Level::Error => eprintln!("{}", line),
        }
    }
}

/// Keeps every reported line in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Messages reported at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}
