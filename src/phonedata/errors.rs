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

use thiserror::Error;

/// A read went past the end of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Read of {len} byte(s) at offset {offset} exceeds buffer of {available} bytes")]
pub struct BoundsError {
    pub offset: usize,
    pub len: usize,
    pub available: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("Could not read entry count: {0}")]
    MissingEntryCount(#[source] BoundsError),
    #[error("Header of {entry_count} entries does not fit the address space")]
    EntryCountOverflow { entry_count: u32 },
}

/// Reasons a single header entry is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedEntryError {
    #[error("{0}")]
    Bounds(#[from] BoundsError),
    #[error("Empty calling code")]
    EmptyCallingCode,
    #[error("Block offset {offset} is outside of buffer of {available} bytes")]
    OffsetOutOfRange { offset: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse block for calling code {calling_code} at offset {offset}: {source}")]
pub struct BlockParseError {
    pub calling_code: String,
    pub offset: usize,
    #[source]
    pub source: BoundsError,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read phone format data: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not decompress phone format data: {0}")]
    Decompress(#[source] std::io::Error),
    #[error("Phone format data is empty")]
    Empty,
    #[error("{0}")]
    Header(#[from] HeaderError),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("Field `{value}` is longer than {max} bytes")]
    FieldTooLong { value: String, max: usize },
    #[error("String `{0}` contains an interior NUL byte")]
    InteriorNul(String),
    #[error("Calling code {0} has no countries")]
    NoCountries(String),
    #[error("{what} of {value} does not fit into {bits} bits")]
    Overflow { what: &'static str, value: usize, bits: u8 },
}
