//! Lightweight leveled logger.
//!
//! Feature flags: `log-info`, `log-debug`, `verbose`, `file-logging`.
//! Errors and warnings go to stderr, info and debug to stdout, unless a log
//! file has been opened with [`init_file_logging`], in which case prefixed
//! messages go to the file only.

use std::fmt::{self, Arguments};
#[cfg(feature = "log-debug")]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::{LazyLock, Mutex},
};

/// Logging levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Warning-level messages (always enabled).
    Warn = 2,
    /// Info-level messages (requires `log-info` feature).
    Info = 3,
    /// Debug-level messages (requires `log-debug` feature and runtime enablement).
    Debug = 4,
}

impl Level {
    /// Parse a level name (case-insensitive); accepts `err` and `warning`.
    #[must_use]
    pub fn parse(level: &str) -> Option<Self> {
        match level.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Bracketed prefix written before each message
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

const fn default_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level());
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static LOG_FILE: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current global log level.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::SeqCst))
}

#[must_use]
/// Parse level from string (case-insensitive) and set it. Returns `true` on success.
pub fn set_level_from_str(level: &str) -> bool {
    Level::parse(level).map(set_level).is_some()
}

#[cfg(feature = "log-debug")]
/// Enable debug logging at runtime.
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}
#[cfg(not(feature = "log-debug"))]
/// Enable debug logging at runtime (no-op when `log-debug` feature is disabled).
pub const fn enable_debug() {}

#[cfg(feature = "log-debug")]
/// Disable debug logging at runtime.
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}
#[cfg(not(feature = "log-debug"))]
/// Disable debug logging at runtime (no-op when `log-debug` feature is disabled).
pub const fn disable_debug() {}

#[cfg(feature = "log-debug")]
/// Returns whether debug logging is enabled.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}
#[cfg(not(feature = "log-debug"))]
/// Returns whether debug logging is enabled (always false when feature is disabled).
pub const fn is_debug_enabled() -> bool {
    false
}

#[cfg(feature = "verbose")]
/// Enable verbose output at runtime.
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}
#[cfg(not(feature = "verbose"))]
/// Enable verbose output at runtime (no-op when `verbose` feature is disabled).
pub const fn enable_verbose() {}

#[cfg(feature = "verbose")]
/// Disable verbose output at runtime.
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}
#[cfg(not(feature = "verbose"))]
/// Disable verbose output at runtime (no-op when `verbose` feature is disabled).
pub const fn disable_verbose() {}

#[cfg(feature = "verbose")]
/// Returns whether verbose output is enabled.
pub fn is_verbose_enabled() -> bool {
    VERBOSE_ENABLED.load(Ordering::SeqCst)
}
#[cfg(not(feature = "verbose"))]
/// Returns whether verbose output is enabled (always false when feature is disabled).
pub const fn is_verbose_enabled() -> bool {
    false
}

#[cfg(feature = "file-logging")]
#[must_use]
/// Open (append) a log file; prefixed messages go there from now on.
/// Returns `true` on success.
pub fn init_file_logging(path: &std::path::Path) -> bool {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok_and(|file| {
            LOG_FILE.lock().is_ok_and(|mut log_file| {
                *log_file = Some(file);
                true
            })
        })
}

#[cfg(not(feature = "file-logging"))]
#[must_use]
/// Initialize file logging (no-op when `file-logging` feature is disabled).
pub const fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

/// Write to the log file if one is open. Returns `false` when there is none.
#[cfg(feature = "file-logging")]
fn write_to_file(message: &str) -> bool {
    let Ok(mut log_file) = LOG_FILE.lock() else {
        return false;
    };
    let Some(file) = log_file.as_mut() else {
        return false;
    };
    let _ = writeln!(file, "{message}");
    let _ = file.flush();
    true
}

#[cfg(not(feature = "file-logging"))]
const fn write_to_file(_message: &str) -> bool {
    false
}

fn emit(level: Level, msg: &str) {
    let prefix = level.prefix();
    if write_to_file(&format!("{prefix} {msg}")) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{prefix} {msg}"),
        Level::Info | Level::Debug => println!("{prefix} {msg}"),
    }
}

fn should_log(level: Level) -> bool {
    let compiled_in = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
        Level::Error | Level::Warn => true,
    };
    compiled_in && level as u8 <= LOG_LEVEL.load(Ordering::SeqCst)
}

/// Internal logging dispatcher used by public macros.
pub fn log_impl(level: Level, args: Arguments) {
    if should_log(level) {
        emit(level, &args.to_string());
    }
}

#[macro_export]
/// Logs an error-level message (always enabled).
macro_rules! error { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Error, format_args!($($arg)*)) }; }
#[macro_export]
/// Logs a warning-level message (always enabled).
macro_rules! warn  { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Warn,  format_args!($($arg)*)) }; }
#[macro_export]
/// Logs an info-level message (requires `log-info` feature).
macro_rules! info  { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Info,  format_args!($($arg)*)) }; }
#[macro_export]
/// Logs a debug-level message (requires `log-debug` feature and runtime enablement).
macro_rules! debug { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Debug, format_args!($($arg)*)) }; }
#[macro_export]
/// Prints a verbose message to stdout when verbose output is enabled. Never written to log files.
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose_enabled() { println!($($arg)*); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names() {
        assert_eq!(Level::parse("WARNING"), Some(Level::Warn));
        assert_eq!(Level::parse("err"), Some(Level::Error));
        assert_eq!(Level::parse("trace"), None);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Debug);
        assert_eq!(Level::from_u8(Level::Info as u8), Level::Info);
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(Level::Debug.prefix(), "[DEBUG]");
    }
}
