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

use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;

use super::{
    errors::WriteError,
    helper_constants::{BLOCK_HEADER_SIZE, HEADER_STRING_FIELD_SIZE, RULE_SET_HEADER_SIZE, RULE_SIZE},
    types::CallingCodeInfo,
};

type Result<T> = std::result::Result<T, WriteError>;

/// Serializes calling code blocks into the binary phone format data read
/// by [`PhoneFormatRepository`](super::PhoneFormatRepository).
///
/// Every country of a block gets its own header entry, all pointing at the
/// same block. Empty prefixes are skipped since an empty string ends a
/// prefix list.
#[derive(Debug, Default)]
pub struct PhoneDataWriter {
    blocks: Vec<CallingCodeInfo>,
}

impl PhoneDataWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, info: CallingCodeInfo) -> &mut Self {
        self.blocks.push(info);
        self
    }

    pub fn write(&self) -> Result<Vec<u8>> {
        let mut header: Vec<u8> = Vec::new();
        let mut payload: Vec<u8> = Vec::new();
        let mut entry_count = 0u32;

        for info in &self.blocks {
            if info.countries.is_empty() {
                return Err(WriteError::NoCountries(info.calling_code.clone()));
            }
            let relative = u32::try_from(payload.len()).map_err(|_| WriteError::Overflow {
                what: "block offset",
                value: payload.len(),
                bits: 32,
            })?;
            for country in &info.countries {
                write_field(&mut header, &info.calling_code)?;
                write_field(&mut header, country)?;
                header.write_u32::<LittleEndian>(relative)?;
                entry_count += 1;
            }
            payload.extend(encode_block(info)?);
        }

        let mut data: Vec<u8> = Vec::with_capacity(4 + header.len() + payload.len());
        data.write_u32::<LittleEndian>(entry_count)?;
        data.extend(header);
        data.extend(payload);
        debug!(
            "Wrote phone format data: {} entries, {} bytes",
            entry_count,
            data.len()
        );
        Ok(data)
    }
}

fn encode_block(info: &CallingCodeInfo) -> Result<Vec<u8>> {
    let mut prefixes: Vec<u8> = Vec::new();
    for list in [&info.trunk_prefixes, &info.international_prefixes] {
        for prefix in list.iter().filter(|prefix| !prefix.is_empty()) {
            write_cstring(&mut prefixes, prefix)?;
        }
        // empty string, then the end marker byte
        prefixes.extend_from_slice(&[0, 0]);
    }

    let rules_len = info
        .rule_sets
        .iter()
        .map(|rule_set| RULE_SET_HEADER_SIZE + RULE_SIZE * rule_set.rules.len())
        .sum();
    let mut rules: Vec<u8> = Vec::with_capacity(rules_len);
    let mut strings: Vec<u8> = Vec::new();
    for rule_set in &info.rule_sets {
        rules.write_u16::<LittleEndian>(rule_set.match_len)?;
        rules.write_u16::<LittleEndian>(to_u16("rule count", rule_set.rules.len())?)?;
        for rule in &rule_set.rules {
            rules.write_u32::<LittleEndian>(rule.min_val)?;
            rules.write_u32::<LittleEndian>(rule.max_val)?;
            rules.extend_from_slice(&[
                rule.byte8,
                rule.max_len,
                rule.other_flag,
                rule.prefix_len,
                rule.flag12,
                rule.flag13,
            ]);
            rules.write_u16::<LittleEndian>(to_u16("template offset", strings.len())?)?;
            write_cstring(&mut strings, &rule.format)?;
        }
    }

    let block1_len = to_u16("prefix section", BLOCK_HEADER_SIZE + prefixes.len())?;
    let block2_len = to_u16("rule section", rules.len())?;
    let rule_set_count = to_u16("rule set count", info.rule_sets.len())?;

    let mut block: Vec<u8> = Vec::with_capacity(block1_len as usize + rules.len() + strings.len());
    for field in [block1_len, 0, block2_len, 0, rule_set_count, 0] {
        block.write_u16::<LittleEndian>(field)?;
    }
    block.extend(prefixes);
    block.extend(rules);
    block.extend(strings);
    Ok(block)
}

/// Inline header string padded to four bytes, terminator included.
fn write_field(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    if value.len() >= HEADER_STRING_FIELD_SIZE {
        return Err(WriteError::FieldTooLong {
            value: value.to_owned(),
            max: HEADER_STRING_FIELD_SIZE - 1,
        });
    }
    if value.contains('\0') {
        return Err(WriteError::InteriorNul(value.to_owned()));
    }
    let mut field = [0u8; HEADER_STRING_FIELD_SIZE];
    field[..value.len()].copy_from_slice(value.as_bytes());
    buf.extend_from_slice(&field);
    Ok(())
}

fn write_cstring(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(WriteError::InteriorNul(value.to_owned()));
    }
    buf.extend_from_slice(value.as_bytes());
    buf.push(0);
    Ok(())
}

fn to_u16(what: &'static str, value: usize) -> Result<u16> {
    u16::try_from(value).map_err(|_| WriteError::Overflow { what, value, bits: 16 })
}

#[cfg(test)]
mod tests {
    use super::PhoneDataWriter;
    use crate::phonedata::{
        block_parser::parse_calling_code_block,
        errors::WriteError,
        header_index::HeaderIndex,
        types::{CallingCodeInfo, PhoneRule, RuleSet},
    };

    fn nanp() -> CallingCodeInfo {
        let mut toll_free = PhoneRule::new(200_000_000, 299_999_999, 9, "[[1]](##) ###-####");
        toll_free.other_flag = 0b10;
        CallingCodeInfo {
            calling_code: "1".to_owned(),
            countries: vec!["us".to_owned(), "ca".to_owned()],
            trunk_prefixes: vec!["1".to_owned()],
            international_prefixes: vec!["011".to_owned(), String::new()],
            rule_sets: vec![RuleSet::new(
                10,
                vec![toll_free, PhoneRule::new(2_000_000_000, u32::MAX, 10, "(###) ###-####")],
            )],
        }
    }

    #[test]
    fn written_data_parses_back() {
        let mut writer = PhoneDataWriter::new();
        writer.add(nanp());
        let data = writer.write().unwrap();

        let index = HeaderIndex::build(&data, Some("ca")).unwrap();
        assert_eq!(index.default_calling_code(), Some("1"));
        let countries = index.countries_for_calling_code("1").unwrap();
        let offset = index.offset_for_calling_code("1").unwrap();
        assert_eq!(offset, 2 * 12 + 4);

        let parsed = parse_calling_code_block(&data, "1", countries, offset).unwrap();
        assert_eq!(parsed.countries, vec!["us", "ca"]);
        assert_eq!(parsed.trunk_prefixes, vec!["1"]);
        assert_eq!(parsed.international_prefixes, vec!["011"]);
        assert_eq!(parsed.rule_sets[0].rules[0].format, "(##) ###-####");
        assert!(parsed.rule_sets[0].has_rule_with_trunk_prefix);
        assert_eq!(parsed.rule_sets[0].rules[1], nanp().rule_sets[0].rules[1]);
    }

    #[test]
    fn rejects_unencodable_blocks() {
        let mut info = nanp();
        info.calling_code = "1234".to_owned();
        assert!(matches!(
            PhoneDataWriter::new().add(info).write(),
            Err(WriteError::FieldTooLong { .. })
        ));

        let mut info = nanp();
        info.countries.clear();
        assert!(matches!(
            PhoneDataWriter::new().add(info).write(),
            Err(WriteError::NoCountries(_))
        ));

        let mut info = nanp();
        info.rule_sets[0].rules[0].format = "#\0#".to_owned();
        assert!(matches!(
            PhoneDataWriter::new().add(info).write(),
            Err(WriteError::InteriorNul(_))
        ));
    }
}
