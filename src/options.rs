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

//! Logger configuration.

use std::path::Path;
use std::path::PathBuf;

/// The options of a [`Logger`](crate::Logger).
///
/// A logger keeps one set of options as its defaults. Each call may pass another set that is
/// merged over the defaults with [`merged_over`](LoggerOptions::merged_over), leaving the
/// defaults untouched.
///
/// With the `serde` feature enabled, options deserialize from camelCase keys:
///
/// ```json
/// { "logsFilePath": "app.log", "timestamp": { "hour12": true } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct LoggerOptions {
    /// The file that plain lines are appended to. `None` or an empty path means console only.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub logs_file_path: Option<PathBuf>,
    /// How the console timestamp is rendered.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub timestamp: Option<TimestampOptions>,
}

impl LoggerOptions {
    /// Set the file that plain lines are appended to.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintlog::LoggerOptions;
    ///
    /// let options = LoggerOptions::default().logs_file_path("my_service.log");
    /// ```
    pub fn logs_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.logs_file_path = Some(path.into());
        self
    }

    /// Set how the console timestamp is rendered.
    pub fn timestamp(mut self, timestamp: TimestampOptions) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Merge these options over `defaults`, field by field.
    ///
    /// A field set here wins; a field left unset falls through to `defaults`. The timestamp
    /// options are taken as a whole and never merged key by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintlog::LoggerOptions;
    /// use tintlog::TimestampOptions;
    ///
    /// let defaults = LoggerOptions::default()
    ///     .logs_file_path("default.log")
    ///     .timestamp(TimestampOptions::default_format());
    /// let call = LoggerOptions::default().timestamp(TimestampOptions::default().hour12(true));
    ///
    /// let merged = call.merged_over(&defaults);
    /// assert_eq!(merged.logs_file_path, defaults.logs_file_path);
    /// assert_eq!(merged.timestamp, Some(TimestampOptions::default().hour12(true)));
    /// ```
    pub fn merged_over(&self, defaults: &LoggerOptions) -> LoggerOptions {
        LoggerOptions {
            logs_file_path: self
                .logs_file_path
                .clone()
                .or_else(|| defaults.logs_file_path.clone()),
            timestamp: self
                .timestamp
                .clone()
                .or_else(|| defaults.timestamp.clone()),
        }
    }

    /// The file to append to, if any. An empty path counts as no path.
    pub(crate) fn file_path(&self) -> Option<&Path> {
        self.logs_file_path
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

/// The display style of a numeric time component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericStyle {
    /// No padding, e.g. `7`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "numeric"))]
    Numeric,
    /// Zero-padded to two digits, e.g. `07`.
    #[cfg_attr(feature = "serde", serde(rename = "2-digit"))]
    TwoDigit,
}

/// How the console timestamp is rendered.
///
/// The keys follow the usual locale time formatting options. When none of `hour`, `minute`,
/// `second` or `fractional_second_digits` is set, numeric hour, minute and second are shown.
///
/// # Examples
///
/// ```
/// use tintlog::NumericStyle;
/// use tintlog::TimestampOptions;
///
/// // Renders like `05:12:52 PM`.
/// let options = TimestampOptions::default()
///     .hour(NumericStyle::TwoDigit)
///     .minute(NumericStyle::TwoDigit)
///     .second(NumericStyle::TwoDigit)
///     .hour12(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TimestampOptions {
    /// Style of the hour.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hour: Option<NumericStyle>,
    /// Style of the minute.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub minute: Option<NumericStyle>,
    /// Style of the second.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub second: Option<NumericStyle>,
    /// Number of fractional second digits, clamped to `1..=3`.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fractional_second_digits: Option<u8>,
    /// Use a 12-hour clock with an `AM`/`PM` suffix. Unset means a 24-hour clock.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hour12: Option<bool>,
    /// IANA time zone name. Unset or unknown names use the system time zone.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub time_zone: Option<String>,
}

impl TimestampOptions {
    /// Two-digit hour, minute and second with millisecond precision, e.g. `17:12:52.123`.
    pub fn default_format() -> Self {
        Self {
            hour: Some(NumericStyle::TwoDigit),
            minute: Some(NumericStyle::TwoDigit),
            second: Some(NumericStyle::TwoDigit),
            fractional_second_digits: Some(3),
            hour12: None,
            time_zone: None,
        }
    }

    /// Set the style of the hour.
    pub fn hour(mut self, style: NumericStyle) -> Self {
        self.hour = Some(style);
        self
    }

    /// Set the style of the minute.
    pub fn minute(mut self, style: NumericStyle) -> Self {
        self.minute = Some(style);
        self
    }

    /// Set the style of the second.
    pub fn second(mut self, style: NumericStyle) -> Self {
        self.second = Some(style);
        self
    }

    /// Set the number of fractional second digits.
    pub fn fractional_second_digits(mut self, digits: u8) -> Self {
        self.fractional_second_digits = Some(digits);
        self
    }

    /// Choose between a 12-hour and a 24-hour clock.
    pub fn hour12(mut self, hour12: bool) -> Self {
        self.hour12 = Some(hour12);
        self
    }

    /// Set the IANA time zone name.
    pub fn time_zone(mut self, name: impl Into<String>) -> Self {
        self.time_zone = Some(name.into());
        self
    }
}
