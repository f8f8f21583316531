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

use std::{collections::HashMap, fs, io::Read, path::Path, sync::Arc};

use flate2::read::GzDecoder;
use log::{debug, error, warn};

use super::{
    block_parser::parse_calling_code_block,
    config::RepositoryConfig,
    errors::LoadError,
    header_index::HeaderIndex,
    helper_constants::GZIP_MAGIC,
    template::default_format,
    types::{CallingCodeInfo, PhoneRule},
    use_cases::{FormatPhoneNumberUseCase, ValidatePhoneNumberUseCase},
};
use crate::{block_cache::BlockCache, interfaces::RuleMatcherApi, rule_matcher::FirstMatchRuleMatcher};

/// Phone format database: owns the raw data, its header index and the
/// lazily parsed calling code blocks.
///
/// Loading never fails from the caller's point of view. A missing or broken
/// data file yields an empty repository which knows no calling codes,
/// formats every input as its sanitized self and validates nothing.
pub struct PhoneFormatRepository {
    data: Box<[u8]>,
    index: HeaderIndex,
    /// Blocks are parsed at most once per calling code, on first lookup.
    cache: BlockCache,
    /// An API for picking the formatting rule of a number.
    matcher: Box<dyn RuleMatcherApi>,
}

impl PhoneFormatRepository {
    fn new(data: Box<[u8]>, index: HeaderIndex) -> Self {
        let capacity = index.calling_code_count();
        Self {
            data,
            index,
            cache: BlockCache::with_capacity(capacity),
            matcher: Box::new(FirstMatchRuleMatcher),
        }
    }

    /// The no-op repository used when data could not be loaded.
    pub fn empty() -> Self {
        Self::new(Box::default(), HeaderIndex::default())
    }

    /// Loads the file named by `config.data_path`, or returns the empty
    /// repository if there is none.
    pub fn from_config(config: &RepositoryConfig) -> Self {
        match &config.data_path {
            Some(path) => Self::from_path(path, config),
            None => {
                warn!("No phone format data configured, formatting is disabled");
                Self::empty()
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>, config: &RepositoryConfig) -> Self {
        let path = path.as_ref();
        Self::try_from_path(path, config).unwrap_or_else(|err| {
            error!("Could not load phone format data from {}: {}", path.display(), err);
            Self::empty()
        })
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>, config: &RepositoryConfig) -> Self {
        Self::try_from_bytes(bytes, config).unwrap_or_else(|err| {
            error!("Could not load phone format data: {}", err);
            Self::empty()
        })
    }

    pub fn try_from_path(path: impl AsRef<Path>, config: &RepositoryConfig) -> Result<Self, LoadError> {
        let bytes = fs::read(path)?;
        Self::try_from_bytes(bytes, config)
    }

    /// Indexes raw or gzip compressed phone format data.
    pub fn try_from_bytes(bytes: impl Into<Vec<u8>>, config: &RepositoryConfig) -> Result<Self, LoadError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(LoadError::Empty);
        }
        let data = if bytes.starts_with(&GZIP_MAGIC) {
            decompress(&bytes)?
        } else {
            bytes
        };

        let default_country = config.resolve_default_country();
        let index = HeaderIndex::build(&data, default_country.as_deref())?;
        debug!(
            "Loaded phone format data: {} bytes, {} calling codes",
            data.len(),
            index.calling_code_count()
        );
        Ok(Self::new(data.into_boxed_slice(), index))
    }

    /// Whether any calling code is known. False for the empty repository.
    pub fn is_loaded(&self) -> bool {
        self.index.calling_code_count() > 0
    }

    pub fn calling_code_count(&self) -> usize {
        self.index.calling_code_count()
    }

    /// Number of calling code blocks parsed so far.
    pub fn cached_block_count(&self) -> usize {
        self.cache.len()
    }

    pub fn has_calling_code(&self, calling_code: &str) -> bool {
        self.index.contains_calling_code(calling_code)
    }

    /// Parsed numbering plan of `calling_code`.
    ///
    /// `None` when the calling code is unknown or its block is malformed.
    pub fn get_calling_code_info(&self, calling_code: &str) -> Option<Arc<CallingCodeInfo>> {
        let offset = self.index.offset_for_calling_code(calling_code)?;
        let countries = self
            .index
            .countries_for_calling_code(calling_code)
            .unwrap_or_default();
        self.cache.get_or_insert_with(calling_code, || {
            debug!("Parsing block of calling code {} at {}", calling_code, offset);
            parse_calling_code_block(&self.data, calling_code, countries, offset)
                .inspect_err(|err| warn!("{}", err))
                .ok()
        })
    }

    /// Case-insensitive country lookup.
    pub fn get_calling_code_for_country(&self, country: &str) -> Option<&str> {
        self.index
            .calling_code_for_country(&country.to_ascii_lowercase())
    }

    pub fn get_countries_for_calling_code(&self, calling_code: &str) -> Option<&[String]> {
        self.index.countries_for_calling_code(calling_code)
    }

    pub fn get_default_calling_code(&self) -> Option<&str> {
        self.index.default_calling_code()
    }

    /// Lowercase country code to calling code.
    pub fn get_all_country_calling_codes(&self) -> &HashMap<String, String> {
        self.index.country_calling_codes()
    }

    /// The rule that formats `local_number` (digits only, calling code
    /// removed) under `calling_code`.
    pub fn find_rule(&self, calling_code: &str, local_number: &str) -> Option<PhoneRule> {
        let info = self.get_calling_code_info(calling_code)?;
        self.matcher.find_rule(&info, local_number).cloned()
    }

    /// Formats a digits-only local number with the first matching rule, or
    /// with the default grouping. `None` if the calling code has no usable block.
    pub fn format_local(&self, calling_code: &str, local_number: &str) -> Option<String> {
        let info = self.get_calling_code_info(calling_code)?;
        let formatted = match self.matcher.find_rule(&info, local_number) {
            Some(rule) => rule.apply(local_number),
            None => default_format(local_number),
        };
        Some(formatted)
    }

    /// Whether some rule of `calling_code` accepts `local_number`.
    pub fn is_valid_local(&self, calling_code: &str, local_number: &str) -> bool {
        self.get_calling_code_info(calling_code)
            .is_some_and(|info| self.matcher.find_rule(&info, local_number).is_some())
    }

    /// See [`FormatPhoneNumberUseCase`].
    pub fn format(&self, raw_input: &str, country_hint: Option<&str>) -> String {
        FormatPhoneNumberUseCase::new(self).execute(raw_input, country_hint)
    }

    /// See [`ValidatePhoneNumberUseCase`].
    pub fn is_valid(&self, raw_input: &str, country_hint: Option<&str>) -> bool {
        ValidatePhoneNumberUseCase::new(self).execute(raw_input, country_hint)
    }
}

fn decompress(compressed: &[u8]) -> Result<Vec<u8>, LoadError> {
    let mut data = Vec::with_capacity(compressed.len() * 4);
    GzDecoder::new(compressed)
        .read_to_end(&mut data)
        .map_err(LoadError::Decompress)?;
    if data.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(data)
}
