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

//! Console appenders and the background file appender.

use std::fmt;

use crate::Error;
use crate::Stream;

pub mod file;
mod stdio;
mod testing;

pub use self::stdio::Stdio;
pub use self::testing::Testing;

/// An appender that writes rendered console lines.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Write one rendered line to the given console stream.
    fn append(&self, stream: Stream, line: &str) -> Result<(), Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}
