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

pub(crate) mod helper_constants;
pub mod byte_cursor;
pub mod errors;
pub mod types;
pub mod template;
pub mod config;
mod header_index;
mod block_parser;
mod data_writer;
mod repository;
mod use_cases;

use std::sync::LazyLock;

pub use config::RepositoryConfig;
pub use data_writer::PhoneDataWriter;
pub use header_index::HeaderIndex;
pub use block_parser::parse_calling_code_block;
pub use repository::PhoneFormatRepository;
pub use types::{CallingCodeInfo, PhoneRule, RuleSet};
pub use use_cases::{FormatPhoneNumberUseCase, ValidatePhoneNumberUseCase, sanitize};

/// Process wide repository configured from the environment
/// (`RPHONEFORMAT_DATA`, `RPHONEFORMAT_DEFAULT_COUNTRY`, locale variables).
/// Loaded on first use.
pub static PHONE_FORMAT: LazyLock<PhoneFormatRepository> = LazyLock::new(|| {
    PhoneFormatRepository::from_config(&RepositoryConfig::from_env())
});
