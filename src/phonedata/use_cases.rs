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

use log::trace;

use super::{
    helper_constants::{HASH_CHAR, MAX_LENGTH_CALLING_CODE, PLUS_CHAR, PLUS_SIGN, STAR_CHAR},
    repository::PhoneFormatRepository,
};
use crate::string_util::{digits_only, leading_chars};

/// Keeps only digits, `+`, `*` and `#`. Unicode decimal digits are
/// converted to ASCII first.
///
/// Idempotent; already clean input is returned borrowed.
pub fn sanitize(raw_input: &str) -> Cow<'_, str> {
    if raw_input.chars().all(is_kept_char) {
        return Cow::Borrowed(raw_input);
    }
    let normalized = dec_from_char::normalize_decimals(raw_input);
    Cow::Owned(normalized.chars().filter(|c| is_kept_char(*c)).collect())
}

fn is_kept_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, PLUS_CHAR | STAR_CHAR | HASH_CHAR)
}

/// Where a sanitized number is formatted.
#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    /// `+` followed by a known calling code.
    International { calling_code: &'a str, local_number: &'a str },
    /// `+` followed by no known calling code.
    UnknownInternational,
    /// No `+`; calling code from the country hint or the default country.
    Local { calling_code: &'a str, local_number: &'a str },
    Unresolved,
}

fn route<'a>(
    repository: &'a PhoneFormatRepository,
    sanitized: &'a str,
    country_hint: Option<&str>,
) -> Route<'a> {
    if let Some(international) = sanitized.strip_prefix(PLUS_SIGN) {
        // shortest calling code wins
        for len in 1..=MAX_LENGTH_CALLING_CODE {
            let Some(candidate) = leading_chars(international, len) else {
                break;
            };
            if repository.has_calling_code(candidate) {
                return Route::International {
                    calling_code: candidate,
                    local_number: &international[candidate.len()..],
                };
            }
        }
        return Route::UnknownInternational;
    }

    let calling_code = country_hint
        .and_then(|country| repository.get_calling_code_for_country(country))
        .or_else(|| repository.get_default_calling_code());
    match calling_code {
        Some(calling_code) => Route::Local { calling_code, local_number: sanitized },
        None => Route::Unresolved,
    }
}

/// Formats user input for display.
///
/// International input (`+...`) is split into calling code and local
/// number and rendered as `+<calling code> <formatted>`; local input uses
/// the calling code of the country hint, falling back to the default
/// country. Anything that can not be resolved comes back sanitized but
/// otherwise unchanged.
pub struct FormatPhoneNumberUseCase<'r> {
    repository: &'r PhoneFormatRepository,
}

impl<'r> FormatPhoneNumberUseCase<'r> {
    pub fn new(repository: &'r PhoneFormatRepository) -> Self {
        Self { repository }
    }

    pub fn execute(&self, raw_input: &str, country_hint: Option<&str>) -> String {
        let sanitized = sanitize(raw_input);
        let formatted = match route(self.repository, &sanitized, country_hint) {
            Route::International { calling_code, local_number } => {
                let local_number = digits_only(local_number);
                self.repository
                    .format_local(calling_code, &local_number)
                    .map(|formatted| {
                        if formatted.is_empty() {
                            fast_cat::concat_str!(PLUS_SIGN, calling_code)
                        } else {
                            fast_cat::concat_str!(PLUS_SIGN, calling_code, " ", &formatted)
                        }
                    })
            }
            Route::Local { calling_code, local_number } => self
                .repository
                .format_local(calling_code, &digits_only(local_number)),
            Route::UnknownInternational | Route::Unresolved => None,
        };
        trace!("format({:?}, {:?}) = {:?}", raw_input, country_hint, formatted);
        formatted.unwrap_or_else(|| sanitized.into_owned())
    }
}

/// Checks whether input is a number some formatting rule accepts.
/// Unresolvable calling codes are never valid.
pub struct ValidatePhoneNumberUseCase<'r> {
    repository: &'r PhoneFormatRepository,
}

impl<'r> ValidatePhoneNumberUseCase<'r> {
    pub fn new(repository: &'r PhoneFormatRepository) -> Self {
        Self { repository }
    }

    pub fn execute(&self, raw_input: &str, country_hint: Option<&str>) -> bool {
        let sanitized = sanitize(raw_input);
        match route(self.repository, &sanitized, country_hint) {
            Route::International { calling_code, local_number }
            | Route::Local { calling_code, local_number } => self
                .repository
                .is_valid_local(calling_code, &digits_only(local_number)),
            Route::UnknownInternational | Route::Unresolved => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{Route, route, sanitize};
    use crate::phonedata::PhoneFormatRepository;

    #[test]
    fn sanitizes() {
        assert_eq!(sanitize("+1 (212) 555-1234"), "+12125551234");
        assert_eq!(sanitize("*100#"), Cow::Borrowed("*100#"));
        assert_eq!(sanitize("tel: 8-800 ext. 5"), "88005");
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("abc"), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in ["+44 (0) 20-7946 0958", "*#06#", "  + 3 8 0 ", "x", "12\u{00A0}34", "٠١٢٣"] {
            let once = sanitize(input).into_owned();
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn empty_repository_routes_nothing() {
        let repository = PhoneFormatRepository::empty();
        assert_eq!(route(&repository, "+12125551234", None), Route::UnknownInternational);
        assert_eq!(route(&repository, "2125551234", Some("us")), Route::Unresolved);
        assert_eq!(route(&repository, "+", None), Route::UnknownInternational);
    }
}
