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
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::Stream;
use crate::append::Append;

/// An appender that records lines in memory and echoes them through the test harness (like
/// `cargo test`), so the outputs are suppressed unless `--nocapture` or `--show-output` is
/// specified.
///
/// Clones share the same record, so a test can keep one handle and give another to a logger.
///
/// # Examples
///
/// ```
/// use tintlog::Logger;
/// use tintlog::Stream;
/// use tintlog::append::Testing;
///
/// let testing = Testing::default();
/// let logger = Logger::default().with_append(testing.clone());
///
/// logger.warn("disk almost full");
/// assert!(testing.lines(Stream::Warn)[0].contains("[Warn] disk almost full"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Testing {
    records: Arc<Mutex<Vec<(Stream, String)>>>,
}

impl Testing {
    /// All recorded lines with their streams, in write order.
    pub fn records(&self) -> Vec<(Stream, String)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The lines written to `stream`, in write order.
    pub fn lines(&self, stream: Stream) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line)
            .collect()
    }
}

impl Append for Testing {
    fn append(&self, stream: Stream, line: &str) -> Result<(), Error> {
        eprintln!("{line}");
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((stream, line.to_owned()));
        Ok(())
    }
}
