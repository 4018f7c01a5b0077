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

use std::io::Write;

use crate::Error;
use crate::Stream;
use crate::append::Append;

/// An appender that prints lines to the standard console.
///
/// The log, info and debug streams go to stdout; the warn and error streams go to stderr.
///
/// # Examples
///
/// ```
/// use tintlog::Logger;
/// use tintlog::append::Stdio;
///
/// let logger = Logger::default().with_append(Stdio::default());
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdio {}

impl Append for Stdio {
    fn append(&self, stream: Stream, line: &str) -> Result<(), Error> {
        if stream.is_stderr() {
            writeln!(std::io::stderr(), "{line}").map_err(Error::from_io_error)
        } else {
            writeln!(std::io::stdout(), "{line}").map_err(Error::from_io_error)
        }
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::from_io_error)?;
        std::io::stderr().flush().map_err(Error::from_io_error)?;
        Ok(())
    }
}
