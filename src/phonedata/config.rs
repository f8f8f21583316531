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

use std::{env, path::PathBuf};

use crate::i18n;

use super::helper_constants::{DATA_PATH_ENV, DEFAULT_COUNTRY_ENV};

/// Settings used when loading a [`PhoneFormatRepository`](super::PhoneFormatRepository).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Phone format data file, raw or gzip compressed.
    pub data_path: Option<PathBuf>,
    /// Country whose calling code formats numbers without a `+`.
    /// Falls back to the process locale when not set.
    pub default_country: Option<String>,
}

impl RepositoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `RPHONEFORMAT_DATA` and `RPHONEFORMAT_DEFAULT_COUNTRY`.
    pub fn from_env() -> Self {
        Self {
            data_path: env::var_os(DATA_PATH_ENV)
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            default_country: env::var(DEFAULT_COUNTRY_ENV)
                .ok()
                .filter(|country| !country.is_empty()),
        }
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    pub fn with_default_country(mut self, country: impl Into<String>) -> Self {
        self.default_country = Some(country.into());
        self
    }

    /// Lowercase default country: the configured one, else the locale's.
    pub fn resolve_default_country(&self) -> Option<String> {
        self.default_country
            .as_deref()
            .map(str::to_ascii_lowercase)
            .or_else(i18n::default_locale_country)
    }
}
