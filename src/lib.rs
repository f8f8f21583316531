mod interfaces;
mod block_cache;
mod rule_matcher;
pub mod phonedata;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use phonedata::{
    CallingCodeInfo, PhoneDataWriter, PhoneFormatRepository, PhoneRule, RepositoryConfig, RuleSet,
    PHONE_FORMAT, errors, sanitize,
};
