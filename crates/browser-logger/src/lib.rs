//! Browser Logger
//!
//! `log` backend for wasm frontends. Lines go to the browser console at the
//! matching console level, and the most recent ones are kept in memory so a
//! view can show them without opening devtools.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<BrowserLogger> = OnceLock::new();

/// Bounded buffer of formatted log lines (oldest dropped first)
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// Console logger with in-memory history
pub struct BrowserLogger {
    level: LevelFilter,
    recent: Mutex<RingBuffer>,
}

impl BrowserLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            recent: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    fn remember(&self, line: &str) {
        if let Ok(mut recent) = self.recent.lock() {
            recent.push(line.to_string());
        }
    }

    /// Lines logged so far, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.recent.lock().map(|recent| recent.snapshot()).unwrap_or_default()
    }
}

/// Short tag for a log target: `giveaway_ui::api::items` -> `ITEMS`
pub fn target_tag(target: &str) -> String {
    target
        .rsplit("::")
        .next()
        .unwrap_or(target)
        .to_uppercase()
}

/// Format a record the way it appears in the console
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    match level {
        Level::Error | Level::Warn => format!("[{}] {}: {}", target_tag(target), level, message),
        _ => format!("[{}] {}", target_tag(target), message),
    }
}

impl Log for BrowserLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
        self.remember(&line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger. Call once at startup; a second call returns the `SetLoggerError`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| BrowserLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent log lines, oldest first. Empty if `init` was never called.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(BrowserLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut ring = RingBuffer::new(3);
        for i in 0..5 {
            ring.push(format!("line {}", i));
        }
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.snapshot(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity_keeps_one() {
        let mut ring = RingBuffer::new(0);
        ring.push("a".into());
        ring.push("b".into());
        assert_eq!(ring.snapshot(), vec!["b"]);
    }

    #[test]
    fn test_target_tag() {
        assert_eq!(target_tag("giveaway_ui::api::items"), "ITEMS");
        assert_eq!(target_tag("app"), "APP");
    }

    #[test]
    fn test_format_line_levels() {
        assert_eq!(format_line(Level::Info, "giveaway_ui::router", "to /items"), "[ROUTER] to /items");
        assert_eq!(
            format_line(Level::Warn, "giveaway_ui::api::auth", "login failed"),
            "[AUTH] WARN: login failed"
        );
    }

    #[test]
    fn test_logger_remembers_enabled_lines() {
        let logger = BrowserLogger::new(LevelFilter::Info, 2);
        for (level, msg) in [(Level::Debug, "hidden"), (Level::Info, "one"), (Level::Warn, "two"), (Level::Info, "three")] {
            logger.log(
                &Record::builder()
                    .level(level)
                    .target("giveaway_ui::pages::home")
                    .args(format_args!("{}", msg))
                    .build(),
            );
        }
        assert_eq!(logger.recent(), vec!["[HOME] WARN: two", "[HOME] three"]);
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = BrowserLogger::new(LevelFilter::Warn, 10);
        let info = Metadata::builder().level(Level::Info).target("x").build();
        let error = Metadata::builder().level(Level::Error).target("x").build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&error));
    }
}
