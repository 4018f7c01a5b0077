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

#[test]
fn test_log_crate_records_reach_the_default_logger() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("bridge.log");

    tintlog::bridge::setup_log_crate();
    tintlog::set_options(LoggerOptions::default().logs_file_path(&path));

    log::error!("error {}", 1);
    log::warn!("warn {}", 2);
    log::info!("info {}", 3);
    log::debug!("debug {}", 4);
    log::trace!("trace {}", 5);
    log::logger().flush();

    let content = fs::read_to_string(&path).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with("[Error] error 1"));
    assert!(lines[1].ends_with("[Warn] warn 2"));
    assert!(lines[2].ends_with("[Info] info 3"));
    assert!(lines[3].ends_with("[Debug] debug 4"));
    assert!(lines[4].ends_with("[Debug] trace 5"));

    assert!(tintlog::bridge::try_setup_log_crate().is_err());
}
