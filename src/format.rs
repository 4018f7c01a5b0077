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

//! Render a log call into its console and file lines.
//!
//! Output format:
//!
//! ```text
//! [17:12:52.123] [CRITICAL] Hello critical!
//! [17:12:52.124] [Info] Hello info!
//! ```
//!
//! The file variant replaces the local time with an ISO 8601 UTC timestamp and carries no colors:
//!
//! ```text
//! [2024-08-10T17:12:52.123Z] [CRITICAL] Hello critical!
//! [2024-08-10T17:12:52.124Z] [Info] Hello info!
//! ```

use colored::Color;
use colored::ColoredString;
use colored::Colorize;
use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::Message;
use crate::Severity;
use crate::options::TimestampOptions;
use crate::time::iso_time;
use crate::time::locale_time;

/// The two renderings of one log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    /// `[<local time>] [<label>] <message>`, with the time muted and the line in the severity color.
    pub console: String,
    /// `[<ISO 8601>] [<label>] <message>\n`, with no ANSI escape sequences.
    pub file: String,
}

/// Render a log call at instant `now`.
///
/// The local time is rendered in `tz` with `timestamp`, or with
/// [`TimestampOptions::default_format`] when `timestamp` is `None`.
pub fn format_message(
    severity: Severity,
    message: &Message,
    timestamp: Option<&TimestampOptions>,
    now: Timestamp,
    tz: &TimeZone,
) -> FormattedMessage {
    let label = severity.label();

    let time = match timestamp {
        Some(options) => locale_time(now, tz, options),
        None => locale_time(now, tz, &TimestampOptions::default_format()),
    };
    let time = ColoredString::from(format!("[{time}]")).color(Color::BrightBlack);
    let console = ColoredString::from(format!("{time} [{label}] {message}"))
        .color(severity.color())
        .to_string();

    let file = format!(
        "[{}] [{label}] {}\n",
        iso_time(now),
        strip_ansi_escapes(message.as_str())
    );

    FormattedMessage { console, file }
}

/// Strip ANSI escape sequences from text.
///
/// Line feeds are kept; other control characters are dropped along with the escapes.
pub fn strip_ansi_escapes(text: &str) -> String {
    ::strip_ansi_escapes::strip_str(text)
}
