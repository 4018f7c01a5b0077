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

//! Timestamp rendering on top of `jiff`.

use std::fmt::Write;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::options::NumericStyle;
use crate::options::TimestampOptions;

/// Render `ts` as an ISO 8601 UTC timestamp with millisecond precision.
///
/// For example, `2024-08-10T17:12:52.123Z`.
pub(crate) fn iso_time(ts: Timestamp) -> String {
    format!("{ts:.3}")
}

/// Render the wall-clock time of `ts` according to `options`.
///
/// `tz` is used unless `options` names a known time zone.
pub(crate) fn locale_time(ts: Timestamp, tz: &TimeZone, options: &TimestampOptions) -> String {
    let tz = options
        .time_zone
        .as_deref()
        .and_then(|name| TimeZone::get(name).ok())
        .unwrap_or_else(|| tz.clone());
    let zoned = ts.to_zoned(tz);

    let (hour, minute, second) = match options {
        TimestampOptions {
            hour: None,
            minute: None,
            second: None,
            fractional_second_digits: None,
            ..
        } => (
            Some(NumericStyle::Numeric),
            Some(NumericStyle::Numeric),
            Some(NumericStyle::Numeric),
        ),
        _ => (options.hour, options.minute, options.second),
    };
    let hour12 = options.hour12.unwrap_or(false);

    let mut text = String::new();
    if let Some(style) = hour {
        let value = if hour12 {
            match zoned.hour() % 12 {
                0 => 12,
                h => h,
            }
        } else {
            zoned.hour()
        };
        push_component(&mut text, value, style);
    }
    if let Some(style) = minute {
        push_component(&mut text, zoned.minute(), style);
    }
    if let Some(style) = second {
        push_component(&mut text, zoned.second(), style);
    }
    if let Some(digits) = options.fractional_second_digits {
        let digits = digits.clamp(1, 3) as u32;
        let fraction = zoned.subsec_nanosecond() / 10i32.pow(9 - digits);
        if !text.is_empty() {
            text.push('.');
        }
        // SAFETY: write to a string always succeeds
        write!(&mut text, "{fraction:0width$}", width = digits as usize).unwrap();
    }
    if hour12 && hour.is_some() {
        text.push_str(if zoned.hour() < 12 { " AM" } else { " PM" });
    }

    text
}

/// Append one `:`-separated component. A component that follows another is always padded.
fn push_component(text: &mut String, value: i8, style: NumericStyle) {
    if text.is_empty() {
        match style {
            NumericStyle::Numeric => write!(text, "{value}").unwrap(),
            NumericStyle::TwoDigit => write!(text, "{value:02}").unwrap(),
        }
    } else {
        write!(text, ":{value:02}").unwrap();
    }
}
