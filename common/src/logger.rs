use std::fmt;
use std::sync::OnceLock;

use chrono::Local;
use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, min_level: LogLevel) -> Self {
        Self { prefix, min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        eprintln!(
            "{}",
            format_record(&timestamp, self.prefix.as_deref(), level, file, line, message)
        );
    }
}

/// Builds one log line: `[timestamp][LEVEL][prefix][file:line] message`.
/// Only the file name of `file` is kept.
pub fn format_record(
    timestamp: &str,
    prefix: Option<&str>,
    level: LogLevel,
    file: &str,
    line: u32,
    message: &str,
) -> String {
    let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
    match prefix {
        Some(prefix) => format!(
            "[{}][{}][{}][{}:{}] {}",
            timestamp, level, prefix, file_name, line, message
        ),
        None => format!("[{}][{}][{}:{}] {}", timestamp, level, file_name, line, message),
    }
}

/// Installs the process-wide logger. Later calls are ignored.
pub fn init_logger(prefix: Option<String>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Logger::new(prefix, min_level));
}

/// Records emitted before `init_logger` are dropped, which keeps library
/// code quiet under tests.
pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Debug, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_strips_directories_from_file() {
        let line = format_record(
            "2024-01-01 10:00:00",
            None,
            LogLevel::Info,
            "common/src/games/tictactoe/bot_controller.rs",
            42,
            "hello",
        );
        assert_eq!(line, "[2024-01-01 10:00:00][INFO][bot_controller.rs:42] hello");
    }

    #[test]
    fn test_format_record_with_prefix_and_windows_path() {
        let line = format_record(
            "2024-01-01 10:00:00",
            Some("Client"),
            LogLevel::Warn,
            "client\\src\\main.rs",
            7,
            "careful",
        );
        assert_eq!(line, "[2024-01-01 10:00:00][WARN][Client][main.rs:7] careful");
    }

    #[test]
    fn test_min_level_filters_lower_levels() {
        let logger = Logger::new(None, LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn test_log_before_init_does_not_panic() {
        log(LogLevel::Error, file!(), line!(), "dropped");
        crate::log!("formatted {}", 1);
        crate::log_debug!("debug {}", 2);
        crate::log_warn!("warn {}", 3);
        crate::log_error!("error {}", 4);
    }
}
