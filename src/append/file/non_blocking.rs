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
use std::os::raw::c_int;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::LazyLock;

use crossbeam_channel::Sender;
use crossbeam_channel::bounded;
use crossbeam_channel::unbounded;

use super::Message;
use super::Pending;
use super::worker::Worker;
use crate::Error;
use crate::trap::Trap;

const THREAD_NAME: &str = "tintlog-file-append";

/// The sending half of the background file append worker.
///
/// There is one per process. The worker thread is never joined. Instead, an exit handler drains
/// it, so requests still queued when `main` returns or `std::process::exit` is called are written
/// before the process terminates.
#[derive(Debug)]
pub(crate) struct FileAppender {
    sender: Sender<Message>,
}

impl FileAppender {
    /// The process-wide appender, spawning its worker thread on first use.
    pub(crate) fn global() -> Result<&'static FileAppender, &'static Error> {
        static APPENDER: LazyLock<Result<FileAppender, Error>> = LazyLock::new(|| {
            let appender = FileAppender::spawn(THREAD_NAME)?;
            drain_at_exit();
            Ok(appender)
        });
        APPENDER.as_ref()
    }

    fn spawn(thread_name: &str) -> Result<Self, Error> {
        let (sender, receiver) = unbounded();
        Worker::new(receiver)
            .make_thread(thread_name.to_string())
            .map_err(|err| {
                Error::new("failed to spawn the file append worker thread").with_source(err)
            })?;
        Ok(Self { sender })
    }

    pub(crate) fn send(
        &self,
        path: PathBuf,
        bytes: Vec<u8>,
        trap: Arc<dyn Trap>,
    ) -> Result<(), Error> {
        self.sender
            .send(Message::Append(Pending { path, bytes, trap }))
            .map_err(|err| {
                Error::new("failed to send log line to the file append worker").with_source(err)
            })
    }

    /// Block until the worker has attempted every append sent before this call.
    pub(crate) fn flush(&self) {
        let (ack, done) = bounded(1);
        if self.sender.send(Message::Flush(ack)).is_ok() {
            let _ = done.recv();
        }
    }
}

/// Register an exit handler that waits for the global worker to drain.
fn drain_at_exit() {
    extern "C" fn drain() {
        if let Ok(appender) = FileAppender::global() {
            appender.flush();
        }
    }

    unsafe extern "C" {
        fn atexit(cb: extern "C" fn()) -> c_int;
    }

    // SAFETY: `drain` captures nothing and never unwinds.
    if unsafe { atexit(drain) } != 0 {
        let err = Error::new("failed to register the file append exit handler");
        let _ = writeln!(std::io::stderr(), "{err}");
    }
}
