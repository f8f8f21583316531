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

use log::trace;

use super::{
    byte_cursor::{ByteCursor, Result},
    errors::BlockParseError,
    template::strip_placeholder_groups,
    types::{CallingCodeInfo, PhoneRule, RuleSet},
};

/// Parses the block of `calling_code` that starts at absolute `offset`.
///
/// Block layout:
/// ```text
/// [u16 block1Len][u16 -][u16 block2Len][u16 -][u16 ruleSetCount][u16 -]
/// trunk prefixes:         cstr* "" + 1 byte
/// international prefixes: cstr* "" + 1 byte
/// @ start + block1Len:    ruleSetCount x ([u16 matchLen][u16 ruleCount] rule*)
/// @ start + block1Len + block2Len: template strings
/// ```
pub fn parse_calling_code_block(
    data: &[u8],
    calling_code: &str,
    countries: &[String],
    offset: usize,
) -> std::result::Result<CallingCodeInfo, BlockParseError> {
    parse_block(data, offset)
        .map(|(trunk_prefixes, international_prefixes, rule_sets)| CallingCodeInfo {
            calling_code: calling_code.to_owned(),
            countries: countries.to_vec(),
            trunk_prefixes,
            international_prefixes,
            rule_sets,
        })
        .map_err(|source| BlockParseError {
            calling_code: calling_code.to_owned(),
            offset,
            source,
        })
}

fn parse_block(data: &[u8], start: usize) -> Result<(Vec<String>, Vec<String>, Vec<RuleSet>)> {
    let mut cursor = ByteCursor::at(data, start)?;
    let block1_len = cursor.read_u16()? as usize;
    cursor.skip(2)?;
    let block2_len = cursor.read_u16()? as usize;
    cursor.skip(2)?;
    let rule_set_count = cursor.read_u16()?;
    cursor.skip(2)?;

    let trunk_prefixes = read_prefix_list(&mut cursor)?;
    let international_prefixes = read_prefix_list(&mut cursor)?;

    // block1Len is authoritative for where the rule sets begin, whatever
    // the prefix walk consumed.
    let rules_start = start + block1_len;
    if cursor.position() != rules_start {
        trace!(
            "Prefix lists ended at {}, resynchronizing to {}",
            cursor.position(),
            rules_start
        );
    }
    cursor.seek(rules_start)?;
    let strings_start = rules_start + block2_len;

    let mut rule_sets = Vec::with_capacity(rule_set_count as usize);
    for _ in 0..rule_set_count {
        rule_sets.push(read_rule_set(&mut cursor, strings_start)?);
    }
    Ok((trunk_prefixes, international_prefixes, rule_sets))
}

/// Strings up to an empty one, then one extra end marker byte.
fn read_prefix_list(cursor: &mut ByteCursor<'_>) -> Result<Vec<String>> {
    let mut prefixes = Vec::new();
    loop {
        let prefix = cursor.read_cstring()?;
        if prefix.is_empty() {
            break;
        }
        prefixes.push(prefix);
    }
    cursor.skip(1)?;
    Ok(prefixes)
}

fn read_rule_set(cursor: &mut ByteCursor<'_>, strings_start: usize) -> Result<RuleSet> {
    let match_len = cursor.read_u16()?;
    let rule_count = cursor.read_u16()?;
    let mut rules = Vec::with_capacity(rule_count as usize);
    for _ in 0..rule_count {
        rules.push(read_rule(cursor, strings_start)?);
    }
    Ok(RuleSet::new(match_len, rules))
}

fn read_rule(cursor: &mut ByteCursor<'_>, strings_start: usize) -> Result<PhoneRule> {
    let min_val = cursor.read_u32()?;
    let max_val = cursor.read_u32()?;
    let byte8 = cursor.read_u8()?;
    let max_len = cursor.read_u8()?;
    let other_flag = cursor.read_u8()?;
    let prefix_len = cursor.read_u8()?;
    let flag12 = cursor.read_u8()?;
    let flag13 = cursor.read_u8()?;
    let str_offset = cursor.read_u16()? as usize;

    let (raw_format, _) = cursor.cstring_at(strings_start + str_offset)?;
    let format = strip_placeholder_groups(&raw_format).into_owned();
    Ok(PhoneRule {
        min_val,
        max_val,
        byte8,
        max_len,
        other_flag,
        prefix_len,
        flag12,
        flag13,
        format,
    })
}
