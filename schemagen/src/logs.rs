//! Operator-facing progress log.
//!
//! Pipeline stages report through these helpers. Lines go to stderr so
//! stdout carries only the result of the run.

use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        }
    }
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, three spaces per level
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "   ".repeat(self.indent as usize);
        write!(f, "{}{} {}", indent, self.level.prefix(), self.message)
    }
}

pub fn log(entry: LogEntry) {
    eprintln!("{}", entry);
}

pub fn log_info(msg: impl Into<String>) {
    log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    log(LogEntry::info(msg).with_indent(indent));
}
