// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Message;
use crate::Severity;
use crate::append;
use crate::append::Append;
use crate::append::Stdio;
use crate::format::format_message;
use crate::options::LoggerOptions;
use crate::options::TimestampOptions;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A logger that writes colored lines to the console and, optionally, plain lines to a file.
///
/// Every severity has a method taking only the message, using the logger's options, and a `_with`
/// variant taking options that are merged over the logger's options for that one call.
///
/// None of the logging methods can fail. Console write errors and file append errors are handed
/// to the logger's [`Trap`].
///
/// # Examples
///
/// ```
/// use tintlog::Logger;
/// use tintlog::LoggerOptions;
/// use tintlog::TimestampOptions;
///
/// let logger = Logger::default();
/// logger.log("Hello, world!");
///
/// let options = LoggerOptions::default().timestamp(TimestampOptions::default().hour12(true));
/// logger.info_with("Hello in 12-hour time!", &options);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    options: LoggerOptions,
    append: Arc<dyn Append>,
    trap: Arc<dyn Trap>,
}

impl Default for Logger {
    /// A console-only logger using [`TimestampOptions::default_format`].
    fn default() -> Self {
        Self::new(LoggerOptions::default().timestamp(TimestampOptions::default_format()))
    }
}

impl Logger {
    /// Create a logger with the given default options, stored as is.
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            options,
            append: Arc::new(Stdio::default()),
            trap: Arc::new(DefaultTrap::default()),
        }
    }

    /// Set the console appender.
    ///
    /// Default to [`Stdio`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tintlog::Logger;
    /// use tintlog::append::Testing;
    ///
    /// let logger = Logger::default().with_append(Testing::default());
    /// ```
    pub fn with_append(mut self, append: impl Append) -> Self {
        self.append = Arc::new(append);
        self
    }

    /// Set the trap that receives errors raised while logging.
    ///
    /// Default to [`DefaultTrap`].
    pub fn with_trap(mut self, trap: impl Trap) -> Self {
        self.trap = Arc::new(trap);
        self
    }

    /// The default options of this logger.
    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    /// Replace the default options of this logger.
    ///
    /// The previous options are discarded entirely, nothing is merged.
    pub fn set_options(&mut self, options: LoggerOptions) {
        self.options = options;
    }

    /// Log a critical message.
    pub fn critical(&self, message: impl Into<Message>) {
        self.emit(Severity::Critical, message, None);
    }

    /// Log a critical message, overriding the default options.
    pub fn critical_with(&self, message: impl Into<Message>, options: &LoggerOptions) {
        self.emit(Severity::Critical, message, Some(options));
    }

    /// Log a debug message.
    pub fn debug(&self, message: impl Into<Message>) {
        self.emit(Severity::Debug, message, None);
    }

    /// Log a debug message, overriding the default options.
    pub fn debug_with(&self, message: impl Into<Message>, options: &LoggerOptions) {
        self.emit(Severity::Debug, message, Some(options));
    }

    /// Log an error message.
    pub fn error(&self, message: impl Into<Message>) {
        self.emit(Severity::Error, message, None);
    }

    /// Log an error message, overriding the default options.
    pub fn error_with(&self, message: impl Into<Message>, options: &LoggerOptions) {
        self.emit(Severity::Error, message, Some(options));
    }

    /// Log an info message.
    pub fn info(&self, message: impl Into<Message>) {
        self.emit(Severity::Info, message, None);
    }

    /// Log an info message, overriding the default options.
    pub fn info_with(&self, message: impl Into<Message>, options: &LoggerOptions) {
        self.emit(Severity::Info, message, Some(options));
    }

    /// Log a normal message.
    pub fn log(&self, message: impl Into<Message>) {
        self.emit(Severity::Log, message, None);
    }

    /// Log a normal message, overriding the default options.
    pub fn log_with(&self, message: impl Into<Message>, options: &LoggerOptions) {
        self.emit(Severity::Log, message, Some(options));
    }

    /// Log a warning message.
    pub fn warn(&self, message: impl Into<Message>) {
        self.emit(Severity::Warn, message, None);
    }

    /// Log a warning message, overriding the default options.
    pub fn warn_with(&self, message: impl Into<Message>, options: &LoggerOptions) {
        self.emit(Severity::Warn, message, Some(options));
    }

    /// Log a message at `severity`.
    ///
    /// `options`, if any, are merged over the logger's options with
    /// [`LoggerOptions::merged_over`]. The console line is written before this returns; the file
    /// line, if a path is configured, is only enqueued.
    pub fn emit(
        &self,
        severity: Severity,
        message: impl Into<Message>,
        options: Option<&LoggerOptions>,
    ) {
        let message = message.into();
        let merged;
        let options = match options {
            Some(options) => {
                merged = options.merged_over(&self.options);
                &merged
            }
            None => &self.options,
        };

        let formatted = format_message(
            severity,
            &message,
            options.timestamp.as_ref(),
            Timestamp::now(),
            &TimeZone::system(),
        );

        if let Err(err) = self.append.append(severity.stream(), &formatted.console) {
            self.trap.trap(&err);
        }
        if let Some(path) = options.file_path() {
            append::file::append(path, formatted.file, &self.trap);
        }
    }

    /// Flush the console appender and wait for all pending file appends.
    pub fn flush(&self) {
        if let Err(err) = self.append.flush() {
            self.trap.trap(&err);
        }
        append::file::flush();
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;
    use crate::Error;
    use crate::Stream;
    use crate::append::Testing;
    use crate::format::strip_ansi_escapes;

    #[derive(Debug, Default, Clone)]
    struct Recording(Arc<Mutex<Vec<String>>>);

    impl Trap for Recording {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    fn testing_logger() -> (Logger, Testing) {
        let testing = Testing::default();
        (Logger::default().with_append(testing.clone()), testing)
    }

    #[test]
    fn test_each_severity_writes_once_to_its_stream() {
        let calls: [(fn(&Logger, &str), Severity); 6] = [
            (|l, m| l.critical(m), Severity::Critical),
            (|l, m| l.debug(m), Severity::Debug),
            (|l, m| l.error(m), Severity::Error),
            (|l, m| l.info(m), Severity::Info),
            (|l, m| l.log(m), Severity::Log),
            (|l, m| l.warn(m), Severity::Warn),
        ];

        for (call, severity) in calls {
            let (logger, testing) = testing_logger();
            call(&logger, "M");

            let records = testing.records();
            assert_eq!(records.len(), 1);
            let (stream, line) = &records[0];
            assert_eq!(*stream, severity.stream());
            assert!(line.contains(&format!("[{}] M", severity.label())));
        }
    }

    #[test]
    fn test_critical_goes_to_error_stream() {
        let (logger, testing) = testing_logger();
        logger.critical("A critical message");
        let lines = testing.lines(Stream::Error);
        assert!(lines[0].contains("[CRITICAL] A critical message"));
    }

    #[test]
    fn test_fragments_are_joined() {
        let (logger, testing) = testing_logger();
        logger.debug(["A ", "debug", " message"]);
        let lines = testing.lines(Stream::Debug);
        assert!(lines[0].contains("[Debug] A debug message"));
    }

    #[test]
    fn test_new_logger_has_no_file_path() {
        let logger = Logger::default();
        assert_eq!(logger.options().logs_file_path, None);
        assert_eq!(
            logger.options().timestamp,
            Some(TimestampOptions::default_format())
        );
    }

    #[test]
    fn test_set_options_replaces_everything() {
        let mut logger = Logger::new(
            LoggerOptions::default()
                .logs_file_path("old.log")
                .timestamp(TimestampOptions::default_format()),
        );
        let replacement = LoggerOptions::default()
            .logs_file_path("x")
            .timestamp(TimestampOptions::default().hour12(true));
        logger.set_options(replacement.clone());
        assert_eq!(logger.options(), &replacement);

        logger.set_options(LoggerOptions::default());
        assert_eq!(logger.options(), &LoggerOptions::default());
    }

    #[test]
    fn test_call_options_do_not_mutate_defaults() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("call.log");
        let (logger, _testing) = testing_logger();

        logger.log_with("once", &LoggerOptions::default().logs_file_path(&path));
        assert_eq!(logger.options().logs_file_path, None);
        logger.flush();
    }

    #[test]
    fn test_log_and_store() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("test.log");
        let (logger, testing) = testing_logger();

        logger.log_with(
            "A normal log message",
            &LoggerOptions::default().logs_file_path(&path),
        );
        logger.warn_with(
            "A warning message",
            &LoggerOptions::default().logs_file_path(&path),
        );
        logger.flush();

        assert!(testing.lines(Stream::Log)[0].contains("[Log] A normal log message"));
        assert!(testing.lines(Stream::Warn)[0].contains("[Warn] A warning message"));

        let content = fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[Log] A normal log message"));
        assert!(lines[1].ends_with("[Warn] A warning message"));
        assert!(!content.contains('\x1b'));
    }

    #[test]
    fn test_default_file_path_is_used() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("default.log");
        let logger =
            Logger::new(LoggerOptions::default().logs_file_path(&path)).with_append(Testing::default());

        logger.info("from defaults");
        logger.flush();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[Info] from defaults"));
    }

    #[test]
    fn test_empty_call_path_disables_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("default.log");
        let logger =
            Logger::new(LoggerOptions::default().logs_file_path(&path)).with_append(Testing::default());

        logger.info_with("console only", &LoggerOptions::default().logs_file_path(""));
        logger.flush();

        assert!(!path.exists());
    }

    #[test]
    fn test_failed_append_is_trapped_not_raised() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let path = temp_dir.path().join("no_such_dir").join("app.log");
        let trap = Recording::default();
        let (logger, testing) = testing_logger();
        let logger = logger.with_trap(trap.clone());

        logger.error_with("still printed", &LoggerOptions::default().logs_file_path(&path));
        logger.flush();

        assert!(testing.lines(Stream::Error)[0].contains("[Error] still printed"));
        let errors = trap.0.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("failed to append to log file"));
        assert!(errors[0].contains("no_such_dir"));
    }

    #[test]
    fn test_console_line_shape() {
        let (logger, testing) = testing_logger();
        logger.info("shape");
        let line = strip_ansi_escapes(&testing.lines(Stream::Info)[0]);
        // [HH:MM:SS.mmm] [Info] shape
        assert_eq!(line.len(), "[00:00:00.000] [Info] shape".len());
        assert!(line.starts_with('['));
        assert!(line.ends_with("] [Info] shape"));
    }
}
