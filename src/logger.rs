//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `Logger` trait, the narration interface handed to the rewriter and driver
//! - `ProgressLine` for single-line progress display
//!
//! # Example
//!
//! ```ignore
//! // Simple logging
//! log!("fix"; "found {} files", count);
//!
//! // Injected logger
//! let logger = ConsoleLogger::new(verbose);
//! logger.debug("normalized base URL: /docs");
//!
//! // Progress line
//! let progress = ProgressLine::new("html", 69);
//! progress.inc();
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use parking_lot::Mutex;
use std::{
    fmt::Display,
    io::{Write, stdout},
    sync::atomic::{AtomicUsize, Ordering},
};

/// Active progress bar count (for log coordination)
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();

    let bar_count = BAR_COUNT.load(Ordering::SeqCst);
    if bar_count > 0 {
        execute!(stdout, cursor::MoveToColumn(0)).ok();
        execute!(stdout, Clear(ClearType::CurrentLine)).ok();
    }

    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "fix" => Style::new().bright_blue().bold(),
        "error" => Style::new().bright_red().bold(),
        "warning" => Style::new().bright_yellow().bold(),
        _ => Style::new().yellow().bold(),
    };
    prefix
        .if_supports_color(Stream::Stdout, |text| text.style(style))
        .to_string()
}

// ============================================================================
// Logger Capability
// ============================================================================

/// Narration sink used by the rewriter and the fix driver.
///
/// `debug` is diagnostic detail, `log` and `error` are always meant to be
/// seen. Implementations must never influence what gets rewritten.
pub trait Logger: Sync {
    fn log(&self, message: &str);

    fn debug(&self, message: &str);

    fn error(&self, message: &str, detail: Option<&dyn Display>);
}

/// Terminal logger behind the `fix` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    verbose: bool,
}

impl ConsoleLogger {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    #[inline]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        log("fix", message);
    }

    fn debug(&self, message: &str) {
        if self.verbose {
            log("fix", message);
        }
    }

    fn error(&self, message: &str, detail: Option<&dyn Display>) {
        match detail {
            Some(detail) => log("error", &format!("{message}\n  {detail}")),
            None => log("error", message),
        }
    }
}

/// Logger that discards everything.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

#[cfg(test)]
impl Logger for NullLogger {
    fn log(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str, _detail: Option<&dyn Display>) {}
}

/// Logger that keeps every line in memory, for assertions in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Debug,
    Error,
}

#[cfg(test)]
impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages at `level`, in arrival order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Whether any message at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.lines
            .lock()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

#[cfg(test)]
impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.lines.lock().push((Level::Log, message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.lines.lock().push((Level::Debug, message.to_string()));
    }

    fn error(&self, message: &str, detail: Option<&dyn Display>) {
        let line = match detail {
            Some(detail) => format!("{message}: {detail}"),
            None => message.to_string(),
        };
        self.lines.lock().push((Level::Error, line));
    }
}

// ============================================================================
// Progress Line (single-line counter)
// ============================================================================

/// Single-line progress display
///
/// Displays: `[fix] html(42/69)`
///
/// The counter updates in place on the same line. Uses `try_lock` to avoid
/// blocking worker threads - if display is busy, the update is skipped
pub struct ProgressLine {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
    lock: Mutex<()>,
}

impl ProgressLine {
    /// Create a new progress display and draw it once.
    pub fn new(name: &'static str, total: usize) -> Self {
        BAR_COUNT.store(1, Ordering::SeqCst);

        let progress = Self {
            name,
            total,
            current: AtomicUsize::new(0),
            lock: Mutex::new(()),
        };
        progress.display(false);
        progress
    }

    /// Increment the counter.
    ///
    /// Non-blocking: if display lock is held, skips refresh.
    #[inline]
    pub fn inc(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
        if let Some(_guard) = self.lock.try_lock() {
            self.display(false);
        }
    }

    fn display(&self, newline: bool) {
        let current = self.current.load(Ordering::Relaxed);
        let line = format!("{}({}/{})", self.name, current, self.total);
        let prefix = colorize_prefix("fix", "fix");

        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        if newline {
            writeln!(stdout, "{prefix} {line}").ok();
        } else {
            write!(stdout, "{prefix} {line}").ok();
        }
        stdout.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        {
            let _guard = self.lock.lock(); // Wait for any pending display
            self.display(true);
        }

        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        // Clear the line on drop (if not finished properly)
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stdout.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================
