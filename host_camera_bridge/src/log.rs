//! Logging for the host camera bridge
//!
//! The bridge runs inside the host's address space, so where log lines end up
//! (overlay console, file, stdout) is the embedder's choice:
//! - Pluggable sink via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom log sinks
///
/// # Example
///
/// ```no_run
/// use host_camera_bridge::hostcam::log::{Logger, LogEntry};
///
/// struct OverlayLogger;
///
/// impl Logger for OverlayLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Push to the in-game overlay...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "hostcam::PoseWriter")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-tick detail (pose writes, scalar writes)
    Trace,

    /// Diagnostics (addresses, snapshot contents)
    Debug,

    /// Session lifecycle events
    Info,

    /// Recoverable oddities (reset without snapshot, ...)
    Warn,

    /// Failed operations, with file:line
    Error,
}

/// Default logger: colored console output
///
/// Pose writes log at Trace once per tick, so the default threshold is
/// Debug. Entries below the threshold are dropped.
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
#[derive(Debug, Clone, Copy)]
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl DefaultLogger {
    pub const fn new(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    pub fn accepts(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new(LogSeverity::Debug)
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.accepts(entry.severity) {
            return;
        }

        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

/// Log through the CameraSystem logger
///
/// The first argument is a `LogSeverity` variant name. `Error` entries carry
/// the call site's file:line.
///
/// ```ignore
/// hostcam_log!(Debug, "hostcam::Session", "Camera struct address: {}", address);
/// ```
#[macro_export]
macro_rules! hostcam_log {
    (Error, $source:expr, $($arg:tt)*) => {
        $crate::hostcam::CameraSystem::log_detailed(
            $crate::hostcam::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::hostcam::CameraSystem::log(
            $crate::hostcam::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
