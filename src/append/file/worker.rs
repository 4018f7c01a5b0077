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

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::thread::JoinHandle;

use crossbeam_channel::Receiver;

use super::Message;
use crate::Error;

pub(super) struct Worker {
    receiver: Receiver<Message>,
}

impl Worker {
    pub(super) fn new(receiver: Receiver<Message>) -> Worker {
        Self { receiver }
    }

    fn work(self) {
        for message in self.receiver.iter() {
            match message {
                Message::Append(pending) => {
                    if let Err(err) = append_line(&pending.path, &pending.bytes) {
                        pending.trap.trap(&err);
                    }
                }
                Message::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }
    }

    pub(super) fn make_thread(self, name: String) -> io::Result<JoinHandle<()>> {
        std::thread::Builder::new()
            .name(name)
            .spawn(move || self.work())
    }
}

/// Open `path` for appending, creating the file but not its directories, and write `bytes`.
fn append_line(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|err| Error::file_append(path, err))?;
    file.write_all(bytes)
        .map_err(|err| Error::file_append(path, err))
}
