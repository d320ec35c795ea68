//! Console Logger
//!
//! A `log` backend for browser builds. Records go to the devtools console
//! and the most recent ones are kept in a circular buffer so they can be
//! inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in the buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// A single buffered log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Line as written to the console
    pub fn line(&self) -> String {
        format!(
            "{} [{}] [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append an entry, evicting the oldest one when full
    pub fn push(&self, entry: LogEntry) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(entry);
        }
    }

    /// Snapshot of buffered entries, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&entry.line());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &LogEntry) {
    eprintln!("{}", entry.line());
}

/// Install the global logger at `level`
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent records from the global logger (empty if not installed)
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(ConsoleLogger::entries).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 2);
        logger.push(entry("a"));
        logger.push(entry("b"));
        logger.push(entry("c"));

        let messages: Vec<_> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("ignored"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("test")
                .args(format_args!("kept"))
                .build(),
        );

        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
        assert_eq!(entries[0].level, Level::Error);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        logger.push(entry("a"));
        logger.push(entry("b"));
        assert_eq!(logger.entries().len(), 1);
    }

    #[test]
    fn test_second_init_reports_error() {
        assert!(init(LevelFilter::Info).is_ok());
        assert!(init(LevelFilter::Debug).is_err());

        log::info!("after init");
        assert!(recent().iter().any(|e| e.message == "after init"));
    }

    #[test]
    fn test_line_format() {
        let line = entry("hello").line();
        assert!(line.ends_with("[INFO] [test] hello"));
    }
}
