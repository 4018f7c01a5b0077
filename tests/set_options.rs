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

use std::fs;

use tempfile::TempDir;
use tintlog::LoggerOptions;
use tintlog::TimestampOptions;

// The default logger is process-wide, so everything that mutates it lives in one test.
#[test]
fn test_set_options_on_the_default_logger() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("defaults.log");

    assert_eq!(tintlog::options().logs_file_path, None);

    tintlog::set_options(
        LoggerOptions::default()
            .logs_file_path("x")
            .timestamp(TimestampOptions::default().hour12(true)),
    );
    assert_eq!(
        tintlog::options(),
        LoggerOptions {
            logs_file_path: Some("x".into()),
            timestamp: Some(TimestampOptions {
                hour12: Some(true),
                ..TimestampOptions::default()
            }),
        }
    );

    // full replacement: the timestamp set above does not survive
    tintlog::set_options(LoggerOptions::default().logs_file_path(&path));
    assert_eq!(tintlog::options().timestamp, None);

    tintlog::info("persisted through the default options");
    tintlog::flush();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[Info] persisted through the default options"));
}
