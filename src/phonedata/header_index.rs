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

use std::collections::HashMap;

use log::{debug, trace, warn};

use super::{
    byte_cursor::ByteCursor,
    errors::{HeaderError, MalformedEntryError},
    helper_constants::{HEADER_ENTRY_SIZE, HEADER_PREAMBLE_SIZE, HEADER_STRING_FIELD_SIZE},
};

/// In-memory index of the file header, built once at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderIndex {
    /// Absolute offset of each calling code block.
    calling_code_offsets: HashMap<String, usize>,
    calling_code_countries: HashMap<String, Vec<String>>,
    /// Inverse lookup, the last entry for a country wins.
    country_calling_code: HashMap<String, String>,
    default_calling_code: Option<String>,
}

struct HeaderEntry {
    calling_code: String,
    country: String,
    offset: usize,
}

impl HeaderIndex {
    /// Parses the header of `data`.
    ///
    /// Malformed entries are logged and skipped; only an unreadable
    /// entry count fails the whole header. `default_country` is compared
    /// case-insensitively against each entry's country.
    pub fn build(data: &[u8], default_country: Option<&str>) -> Result<Self, HeaderError> {
        let cursor = ByteCursor::new(data);
        let entry_count = cursor.u32_at(0).map_err(HeaderError::MissingEntryCount)?;
        let base = (entry_count as usize)
            .checked_mul(HEADER_ENTRY_SIZE)
            .and_then(|size| size.checked_add(HEADER_PREAMBLE_SIZE))
            .ok_or(HeaderError::EntryCountOverflow { entry_count })?;
        let default_country = default_country.map(str::to_ascii_lowercase);

        let mut index = Self::default();
        for i in 0..entry_count as usize {
            let entry_offset = HEADER_PREAMBLE_SIZE + i * HEADER_ENTRY_SIZE;
            if entry_offset >= data.len() {
                warn!(
                    "Header declares {} entries but data ends after {}, stopping",
                    entry_count, i
                );
                break;
            }
            match Self::read_entry(&cursor, entry_offset, base) {
                Ok(entry) => index.insert(entry, default_country.as_deref()),
                Err(err) => warn!("Skipping malformed header entry {}: {}", i, err),
            }
        }
        debug!(
            "Header indexed: {} calling codes, {} countries, default calling code {:?}",
            index.calling_code_offsets.len(),
            index.country_calling_code.len(),
            index.default_calling_code
        );
        Ok(index)
    }

    fn read_entry(
        cursor: &ByteCursor<'_>,
        entry_offset: usize,
        base: usize,
    ) -> Result<HeaderEntry, MalformedEntryError> {
        // Both string fields are inline and take exactly four bytes
        // no matter where their terminator is, if there is one at all.
        let calling_code = cursor.cstring_in(entry_offset, HEADER_STRING_FIELD_SIZE)?;
        let country = cursor.cstring_in(
            entry_offset + HEADER_STRING_FIELD_SIZE,
            HEADER_STRING_FIELD_SIZE,
        )?;
        let relative = cursor.u32_at(entry_offset + 2 * HEADER_STRING_FIELD_SIZE)?;
        if calling_code.is_empty() {
            return Err(MalformedEntryError::EmptyCallingCode);
        }

        let offset = base.saturating_add(relative as usize);
        if offset >= cursor.len() {
            return Err(MalformedEntryError::OffsetOutOfRange {
                offset,
                available: cursor.len(),
            });
        }
        Ok(HeaderEntry {
            calling_code,
            country: country.to_ascii_lowercase(),
            offset,
        })
    }

    fn insert(&mut self, entry: HeaderEntry, default_country: Option<&str>) {
        trace!(
            "Header entry +{} ({}) at {}",
            entry.calling_code, entry.country, entry.offset
        );
        if default_country == Some(entry.country.as_str()) {
            self.default_calling_code = Some(entry.calling_code.clone());
        }
        self.calling_code_offsets
            .insert(entry.calling_code.clone(), entry.offset);
        self.calling_code_countries
            .entry(entry.calling_code.clone())
            .or_default()
            .push(entry.country.clone());
        self.country_calling_code
            .insert(entry.country, entry.calling_code);
    }

    pub fn offset_for_calling_code(&self, calling_code: &str) -> Option<usize> {
        self.calling_code_offsets.get(calling_code).copied()
    }

    pub fn contains_calling_code(&self, calling_code: &str) -> bool {
        self.calling_code_offsets.contains_key(calling_code)
    }

    pub fn countries_for_calling_code(&self, calling_code: &str) -> Option<&[String]> {
        self.calling_code_countries
            .get(calling_code)
            .map(Vec::as_slice)
    }

    /// Expects a lowercase country code.
    pub fn calling_code_for_country(&self, country: &str) -> Option<&str> {
        self.country_calling_code.get(country).map(String::as_str)
    }

    pub fn default_calling_code(&self) -> Option<&str> {
        self.default_calling_code.as_deref()
    }

    pub fn country_calling_codes(&self) -> &HashMap<String, String> {
        &self.country_calling_code
    }

    pub fn calling_code_count(&self) -> usize {
        self.calling_code_offsets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderIndex;
    use crate::phonedata::errors::HeaderError;

    fn entry(data: &mut Vec<u8>, calling_code: &str, country: &str, relative: u32) {
        for field in [calling_code, country] {
            let mut bytes = [0u8; 4];
            bytes[..field.len()].copy_from_slice(field.as_bytes());
            data.extend_from_slice(&bytes);
        }
        data.extend_from_slice(&relative.to_le_bytes());
    }

    fn header(entries: &[(&str, &str, u32)], payload: usize) -> Vec<u8> {
        let mut data = (entries.len() as u32).to_le_bytes().to_vec();
        for (calling_code, country, relative) in entries {
            entry(&mut data, calling_code, country, *relative);
        }
        data.resize(data.len() + payload, 0);
        data
    }

    #[test]
    fn builds_all_lookups() {
        let data = header(&[("1", "us", 0), ("1", "ca", 0), ("44", "gb", 8)], 16);
        let index = HeaderIndex::build(&data, Some("GB")).unwrap();

        let base = 3 * 12 + 4;
        assert_eq!(index.offset_for_calling_code("1"), Some(base));
        assert_eq!(index.offset_for_calling_code("44"), Some(base + 8));
        assert_eq!(
            index.countries_for_calling_code("1"),
            Some(&["us".to_owned(), "ca".to_owned()][..])
        );
        assert_eq!(index.calling_code_for_country("ca"), Some("1"));
        assert_eq!(index.default_calling_code(), Some("44"));
        assert_eq!(index.calling_code_count(), 2);
        assert_eq!(index.offset_for_calling_code("999"), None);
    }

    #[test]
    fn repeated_country_last_write_wins() {
        let data = header(&[("7", "kz", 0), ("997", "kz", 4)], 8);
        let index = HeaderIndex::build(&data, None).unwrap();
        assert_eq!(index.calling_code_for_country("kz"), Some("997"));
        assert_eq!(index.default_calling_code(), None);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        // second entry points past the end, third has no calling code
        let data = header(&[("1", "us", 0), ("44", "gb", 500), ("", "xx", 0), ("49", "de", 1)], 4);
        let index = HeaderIndex::build(&data, Some("de")).unwrap();
        assert!(index.contains_calling_code("1"));
        assert!(!index.contains_calling_code("44"));
        assert_eq!(index.calling_code_for_country("xx"), None);
        assert_eq!(index.default_calling_code(), Some("49"));
        assert_eq!(index.calling_code_count(), 2);
    }

    #[test]
    fn full_width_fields_do_not_run_together() {
        let data = header(&[("1234", "us", 0), ("7", "abcd", 0)], 4);
        let index = HeaderIndex::build(&data, Some("ABCD")).unwrap();
        assert_eq!(index.calling_code_for_country("us"), Some("1234"));
        assert_eq!(
            index.countries_for_calling_code("1234"),
            Some(&["us".to_owned()][..])
        );
        assert_eq!(index.calling_code_for_country("abcd"), Some("7"));
        assert_eq!(index.default_calling_code(), Some("7"));
    }

    #[test]
    fn truncated_header_keeps_complete_entries() {
        let mut data = header(&[("1", "us", 0), ("44", "gb", 0)], 0);
        // declare more entries than present, then cut the last one short
        data[0] = 5;
        data.truncate(4 + 12 + 6);
        let index = HeaderIndex::build(&data, None).unwrap();
        assert_eq!(index.calling_code_count(), 0);

        // absurd entry count moves the block base past the data
        let mut data = header(&[("1", "us", 0)], 4);
        data[3] = 0xff;
        let index = HeaderIndex::build(&data, None).unwrap();
        assert_eq!(index.calling_code_count(), 0);
    }

    #[test]
    fn missing_entry_count() {
        assert!(matches!(
            HeaderIndex::build(&[], None),
            Err(HeaderError::MissingEntryCount(_))
        ));
        assert!(HeaderIndex::build(&[1, 0], None).is_err());
    }
}
