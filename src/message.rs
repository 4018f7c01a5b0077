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

use std::fmt;

/// The text of a log call.
///
/// A message is built from a single string or from an ordered sequence of fragments. Fragments
/// are concatenated with no separator.
///
/// # Examples
///
/// ```
/// use tintlog::Message;
///
/// assert_eq!(Message::from("hello").as_str(), "hello");
/// assert_eq!(Message::from(["a", "b", "c"]).as_str(), "abc");
/// assert_eq!(Message::from(format_args!("{}-{}", 1, 2)).as_str(), "1-2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Concatenate the given fragments into one message.
    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for fragment in fragments {
            text.push_str(fragment.as_ref());
        }
        Self(text)
    }

    /// The message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the message, returning its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self(args.to_string())
    }
}

impl<S: AsRef<str>> From<&[S]> for Message {
    fn from(fragments: &[S]) -> Self {
        Self::from_fragments(fragments)
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Message {
    fn from(fragments: [S; N]) -> Self {
        Self::from_fragments(fragments)
    }
}

impl<S: AsRef<str>> From<Vec<S>> for Message {
    fn from(fragments: Vec<S>) -> Self {
        Self::from_fragments(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::Message;

    #[test]
    fn test_fragments_concatenate_without_separator() {
        let fragments = vec!["Hello, ".to_string(), "wor".to_string(), "ld!".to_string()];
        assert_eq!(Message::from(fragments).as_str(), "Hello, world!");

        let slice: &[&str] = &["a", "", "b"];
        assert_eq!(Message::from(slice).as_str(), "ab");
    }

    #[test]
    fn test_empty_fragments() {
        let empty: Vec<&str> = vec![];
        assert_eq!(Message::from(empty), Message::default());
    }

    #[test]
    fn test_interpolation_is_not_performed() {
        assert_eq!(Message::from(["${name}", "!"]).as_str(), "${name}!");
    }
}
