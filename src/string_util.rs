// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

/// Drops every non ASCII digit.
///
/// Returns slice if string contains only digits and allocates otherwise.
pub fn digits_only(s: &str) -> Cow<'_, str> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(char::is_ascii_digit).collect())
    }
}

/// Returns the first `count` chars of `s`, or `None` if it is shorter.
pub fn leading_chars(s: &str, count: usize) -> Option<&str> {
    match s.char_indices().nth(count) {
        Some((end, _)) => Some(&s[..end]),
        None if s.chars().count() == count => Some(s),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::{digits_only, leading_chars};

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("2125551234"), Cow::Borrowed("2125551234"));
        let stripped = digits_only("*12#3+");
        assert_eq!(stripped, Cow::<str>::Owned("123".to_owned()));
        assert_eq!(digits_only(""), Cow::Borrowed(""));
    }

    #[test]
    fn test_leading_chars() {
        assert_eq!(leading_chars("380", 1), Some("3"));
        assert_eq!(leading_chars("380", 3), Some("380"));
        assert_eq!(leading_chars("38", 3), None);
        assert_eq!(leading_chars("", 1), None);
        assert_eq!(leading_chars("", 0), Some(""));
    }
}
