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

/// The maximum length of the country calling code.
pub const MAX_LENGTH_CALLING_CODE: usize = 3;

/// Size of the leading `u32` entry count.
pub const HEADER_PREAMBLE_SIZE: usize = 4;
/// Size of one header entry: calling code field, country field, block offset.
pub const HEADER_ENTRY_SIZE: usize = 12;
/// Width of the inline calling code and country string fields.
pub const HEADER_STRING_FIELD_SIZE: usize = 4;

/// Six `u16` fields at the start of every calling code block.
pub const BLOCK_HEADER_SIZE: usize = 12;
/// `[u16 matchLen][u16 ruleCount]`
pub const RULE_SET_HEADER_SIZE: usize = 4;
/// `[u32 minVal][u32 maxVal][6 x u8][u16 strOffset]`
pub const RULE_SIZE: usize = 16;

pub const INTL_PREFIX_FLAG: u8 = 0b01;
pub const TRUNK_PREFIX_FLAG: u8 = 0b10;

pub const DIGIT_PLACEHOLDER: char = '#';
// Consumed by the template walk and never emitted.
pub const TEMPLATE_SKIP_MARKER: char = '$';
pub const PLACEHOLDER_GROUP_PATTERN: &'static str = r"\[\[.*?\]\]";

pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHAR: char = '+';
pub const STAR_CHAR: char = '*';
pub const HASH_CHAR: char = '#';

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

pub const DATA_PATH_ENV: &'static str = "RPHONEFORMAT_DATA";
pub const DEFAULT_COUNTRY_ENV: &'static str = "RPHONEFORMAT_DEFAULT_COUNTRY";
/// Checked in order, first non-empty value wins.
pub const LOCALE_ENV_VARS: [&'static str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];
