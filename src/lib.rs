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

//! Tintlog is a small logger that timestamps and color-tags console lines, and optionally appends
//! plain copies of them to a file.
//!
//! # Overview
//!
//! There are six severities: critical, debug, error, info, log and warn. Each one has a fixed
//! label, color and console stream. Lines look like this on the console:
//!
//! ```text
//! [17:12:52.123] [CRITICAL] Something is on fire
//! ```
//!
//! and like this in the log file, if one is configured:
//!
//! ```text
//! [2024-08-10T17:12:52.123Z] [CRITICAL] Something is on fire
//! ```
//!
//! Logging never fails from the caller's point of view. File appends happen on a background
//! thread; failures are reported to standard error and dropped.
//!
//! # Examples
//!
//! Log through the process-wide default logger:
//!
//! ```
//! tintlog::info("Hello, world!");
//! tintlog::critical(["Disk ", "full"]);
//! ```
//!
//! Or with a logger of your own:
//!
//! ```
//! use tintlog::Logger;
//! use tintlog::LoggerOptions;
//! use tintlog::TimestampOptions;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::new(
//!     LoggerOptions::default()
//!         .logs_file_path(dir.path().join("app.log"))
//!         .timestamp(TimestampOptions::default().hour12(true)),
//! );
//!
//! logger.warn("Stored in app.log too.");
//! logger.flush();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use std::sync::LazyLock;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;

pub mod append;
#[cfg(feature = "bridge-log")]
pub mod bridge;
pub mod format;
pub mod trap;

mod error;
mod logger;
mod message;
mod options;
mod severity;
mod time;

pub use self::append::Append;
pub use self::append::file::flush;
pub use self::error::Error;
pub use self::format::FormattedMessage;
pub use self::logger::Logger;
pub use self::message::Message;
pub use self::options::LoggerOptions;
pub use self::options::NumericStyle;
pub use self::options::TimestampOptions;
pub use self::severity::Severity;
pub use self::severity::Stream;
pub use self::trap::Trap;

/// The process-wide logger behind the crate-level logging functions.
///
/// It is created with [`Logger::default`] on first use and lives until the process exits. There
/// is no way to reset it; only its options can be replaced, with [`set_options`]. Concurrent
/// writers race and the last one wins.
static DEFAULT_LOGGER: LazyLock<RwLock<Logger>> = LazyLock::new(|| RwLock::new(Logger::default()));

/// Return the default logger.
///
/// The returned guard holds a read lock; calling [`set_options`] while holding it deadlocks.
pub fn default_logger() -> RwLockReadGuard<'static, Logger> {
    DEFAULT_LOGGER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replace the options of the default logger. Nothing is merged.
///
/// # Examples
///
/// ```
/// use tintlog::LoggerOptions;
/// use tintlog::TimestampOptions;
///
/// tintlog::set_options(LoggerOptions::default().timestamp(TimestampOptions::default().hour12(true)));
/// tintlog::log("12-hour clock from now on");
/// ```
pub fn set_options(options: LoggerOptions) {
    DEFAULT_LOGGER
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set_options(options);
}

/// A copy of the options of the default logger.
pub fn options() -> LoggerOptions {
    default_logger().options().clone()
}

/// Log a critical message with the default logger.
pub fn critical(message: impl Into<Message>) {
    default_logger().critical(message);
}

/// Log a critical message with the default logger, overriding its options.
pub fn critical_with(message: impl Into<Message>, options: &LoggerOptions) {
    default_logger().critical_with(message, options);
}

/// Log a debug message with the default logger.
pub fn debug(message: impl Into<Message>) {
    default_logger().debug(message);
}

/// Log a debug message with the default logger, overriding its options.
pub fn debug_with(message: impl Into<Message>, options: &LoggerOptions) {
    default_logger().debug_with(message, options);
}

/// Log an error message with the default logger.
pub fn error(message: impl Into<Message>) {
    default_logger().error(message);
}

/// Log an error message with the default logger, overriding its options.
pub fn error_with(message: impl Into<Message>, options: &LoggerOptions) {
    default_logger().error_with(message, options);
}

/// Log an info message with the default logger.
pub fn info(message: impl Into<Message>) {
    default_logger().info(message);
}

/// Log an info message with the default logger, overriding its options.
pub fn info_with(message: impl Into<Message>, options: &LoggerOptions) {
    default_logger().info_with(message, options);
}

/// Log a normal message with the default logger.
pub fn log(message: impl Into<Message>) {
    default_logger().log(message);
}

/// Log a normal message with the default logger, overriding its options.
pub fn log_with(message: impl Into<Message>, options: &LoggerOptions) {
    default_logger().log_with(message, options);
}

/// Log a warning message with the default logger.
pub fn warn(message: impl Into<Message>) {
    default_logger().warn(message);
}

/// Log a warning message with the default logger, overriding its options.
pub fn warn_with(message: impl Into<Message>, options: &LoggerOptions) {
    default_logger().warn_with(message, options);
}
