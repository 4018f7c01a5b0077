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

//! Severities and the console streams they are routed to.

use std::fmt;

use colored::Color;

/// The severity of a log call.
///
/// Each severity has a fixed label, color and console stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Labelled `CRITICAL`, bright red, written to the error stream.
    Critical,
    /// Labelled `Debug`, bright blue, written to the debug stream.
    Debug,
    /// Labelled `Error`, red, written to the error stream.
    Error,
    /// Labelled `Info`, bright green, written to the info stream.
    Info,
    /// Labelled `Log`, white, written to the log stream.
    Log,
    /// Labelled `Warn`, yellow, written to the warn stream.
    Warn,
}

impl Severity {
    /// All severities, in declaration order.
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::Debug,
        Severity::Error,
        Severity::Info,
        Severity::Log,
        Severity::Warn,
    ];

    /// The label rendered between brackets in every line.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Debug => "Debug",
            Severity::Error => "Error",
            Severity::Info => "Info",
            Severity::Log => "Log",
            Severity::Warn => "Warn",
        }
    }

    /// The color of the whole console line.
    pub const fn color(self) -> Color {
        match self {
            Severity::Critical => Color::BrightRed,
            Severity::Debug => Color::BrightBlue,
            Severity::Error => Color::Red,
            Severity::Info => Color::BrightGreen,
            Severity::Log => Color::White,
            Severity::Warn => Color::Yellow,
        }
    }

    /// The console stream this severity is written to.
    ///
    /// Critical and Error share the error stream.
    pub const fn stream(self) -> Stream {
        match self {
            Severity::Critical | Severity::Error => Stream::Error,
            Severity::Debug => Stream::Debug,
            Severity::Info => Stream::Info,
            Severity::Log => Stream::Log,
            Severity::Warn => Stream::Warn,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A console channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    /// The plain output stream.
    Log,
    /// The informational stream.
    Info,
    /// The debug stream.
    Debug,
    /// The warning stream.
    Warn,
    /// The error stream.
    Error,
}

impl Stream {
    /// Whether the standard console routes this stream to standard error.
    pub const fn is_stderr(self) -> bool {
        matches!(self, Stream::Warn | Stream::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_mapping() {
        let routes = Severity::ALL.map(|s| (s.label(), s.stream()));
        assert_eq!(
            routes,
            [
                ("CRITICAL", Stream::Error),
                ("Debug", Stream::Debug),
                ("Error", Stream::Error),
                ("Info", Stream::Info),
                ("Log", Stream::Log),
                ("Warn", Stream::Warn),
            ]
        );
    }

    #[test]
    fn test_critical_and_error_differ_by_color_only() {
        assert_eq!(Severity::Critical.stream(), Severity::Error.stream());
        assert_ne!(Severity::Critical.color(), Severity::Error.color());
        assert_ne!(Severity::Critical.label(), Severity::Error.label());
    }

    #[test]
    fn test_stderr_routing() {
        assert!(Stream::Error.is_stderr());
        assert!(Stream::Warn.is_stderr());
        assert!(!Stream::Log.is_stderr());
        assert!(!Stream::Info.is_stderr());
        assert!(!Stream::Debug.is_stderr());
    }
}
