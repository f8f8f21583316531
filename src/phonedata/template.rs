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

//! Pure string transforms used by formatting. None of them can fail.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use super::helper_constants::{DIGIT_PLACEHOLDER, PLACEHOLDER_GROUP_PATTERN, TEMPLATE_SKIP_MARKER};

static PLACEHOLDER_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PLACEHOLDER_GROUP_PATTERN)
        .expect("A valid placeholder group regex is expected; this indicates a library bug!")
});

/// Removes every `[[...]]` group (shortest match) from a raw template.
pub fn strip_placeholder_groups(template: &str) -> Cow<'_, str> {
    PLACEHOLDER_GROUP.replace_all(template, "")
}

/// Expands `template` against `digits`.
///
/// `#` takes the next unused digit; once digits run out the remaining
/// `#` are dropped. `$` is skipped. Everything else is copied as is.
/// Extra digits beyond the template are omitted.
pub fn apply_template(template: &str, digits: &str) -> String {
    let mut formatted = String::with_capacity(template.len());
    let mut digits = digits.chars();
    for c in template.chars() {
        match c {
            DIGIT_PLACEHOLDER => {
                if let Some(digit) = digits.next() {
                    formatted.push(digit);
                }
            }
            TEMPLATE_SKIP_MARKER => {}
            literal => formatted.push(literal),
        }
    }
    formatted
}

/// Grouping used when no rule matches a local number:
/// up to 3 digits as is, then `3 rest`, then `3 3 rest`,
/// and longer numbers in groups of 4.
pub fn default_format(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let groups: Vec<&[char]> = match chars.len() {
        0..=3 => return digits.to_owned(),
        4..=7 => vec![&chars[..3], &chars[3..]],
        8..=10 => vec![&chars[..3], &chars[3..6], &chars[6..]],
        _ => chars.chunks(4).collect(),
    };

    let mut formatted = String::with_capacity(digits.len() + groups.len());
    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            formatted.push(' ');
        }
        formatted.extend(group.iter());
    }
    formatted
}
