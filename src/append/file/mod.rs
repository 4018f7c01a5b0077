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

//! Fire-and-forget appends to log files.
//!
//! Every logging call with a file path enqueues one append request and returns immediately. A
//! single background thread, spawned on first use, services the requests in order: it opens the
//! file in append mode (creating it if needed), writes the line and closes the file. A failed
//! append is reported once to the trap of the logger that issued it and then dropped.
//!
//! Call [`flush`] to wait until every request enqueued so far has been attempted. The same wait
//! runs once more when the process exits, so lines logged right before `main` returns are not
//! lost.
//!
//! # Examples
//!
//! ```
//! use tintlog::Logger;
//! use tintlog::LoggerOptions;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("app.log");
//!
//! let logger = Logger::new(LoggerOptions::default().logs_file_path(&path));
//! logger.info("persisted");
//!
//! tintlog::flush();
//! let content = std::fs::read_to_string(&path).unwrap();
//! assert!(content.contains("[Info] persisted"));
//! ```

use std::fmt;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crossbeam_channel::Sender;

use crate::trap::Trap;

pub(crate) use self::non_blocking::FileAppender;

mod non_blocking;
mod worker;

/// Wait until every file append enqueued before this call has been attempted.
///
/// Logging calls never wait for their appends; this is the only synchronization point.
pub fn flush() {
    if let Ok(appender) = FileAppender::global() {
        appender.flush();
    }
}

/// Enqueue `line` for appending to `path`, reporting any failure to `trap`.
pub(crate) fn append(path: &Path, line: String, trap: &Arc<dyn Trap>) {
    let appender = match FileAppender::global() {
        Ok(appender) => appender,
        Err(err) => {
            trap.trap(err);
            return;
        }
    };

    if let Err(err) = appender.send(path.to_path_buf(), line.into_bytes(), trap.clone()) {
        trap.trap(&err);
    }
}

struct Pending {
    path: PathBuf,
    bytes: Vec<u8>,
    trap: Arc<dyn Trap>,
}

impl fmt::Debug for Pending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending")
            .field("path", &self.path)
            .field("bytes", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
enum Message {
    Append(Pending),
    Flush(Sender<()>),
}
