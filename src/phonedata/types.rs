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

use super::{
    helper_constants::{INTL_PREFIX_FLAG, TRUNK_PREFIX_FLAG},
    template,
};

/// Numbering plan of one country calling code, as stored in the
/// phone format data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallingCodeInfo {
    pub calling_code: String,
    /// Countries served by this calling code, in header order.
    /// For example `1` serves both `us` and `ca`.
    pub countries: Vec<String>,
    /// Digits dialed before a local number inside the country.
    pub trunk_prefixes: Vec<String>,
    /// Digits dialed before a calling code to place an international call.
    pub international_prefixes: Vec<String>,
    /// Kept in file order. The order decides which rule wins.
    pub rule_sets: Vec<RuleSet>,
}

/// Rules sharing the minimum local number length they apply to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    pub match_len: u16,
    pub rules: Vec<PhoneRule>,
    pub has_rule_with_intl_prefix: bool,
    pub has_rule_with_trunk_prefix: bool,
}

impl RuleSet {
    pub fn new(match_len: u16, rules: Vec<PhoneRule>) -> Self {
        let has_rule_with_intl_prefix = rules.iter().any(PhoneRule::has_intl_prefix);
        let has_rule_with_trunk_prefix = rules.iter().any(PhoneRule::has_trunk_prefix);
        Self {
            match_len,
            rules,
            has_rule_with_intl_prefix,
            has_rule_with_trunk_prefix,
        }
    }

    pub fn applies_to_len(&self, len: usize) -> bool {
        len >= self.match_len as usize
    }
}

/// Numeric range and length bounded formatting template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhoneRule {
    pub min_val: u32,
    pub max_val: u32,
    pub byte8: u8,
    pub max_len: u8,
    /// Bit 0: has international prefix marker, bit 1: has trunk prefix marker.
    pub other_flag: u8,
    pub prefix_len: u8,
    pub flag12: u8,
    pub flag13: u8,
    /// `#` digit placeholders and literal separators. `[[...]]` groups are
    /// already stripped.
    pub format: String,
}

impl PhoneRule {
    pub fn new(min_val: u32, max_val: u32, max_len: u8, format: impl Into<String>) -> Self {
        Self {
            min_val,
            max_val,
            max_len,
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn has_intl_prefix(&self) -> bool {
        self.other_flag & INTL_PREFIX_FLAG != 0
    }

    pub fn has_trunk_prefix(&self) -> bool {
        self.other_flag & TRUNK_PREFIX_FLAG != 0
    }

    /// Whether a local number of `len` digits with numeric `value`
    /// falls into this rule.
    pub fn accepts(&self, len: usize, value: u64) -> bool {
        len <= self.max_len as usize
            && ((self.min_val as u64)..=(self.max_val as u64)).contains(&value)
    }

    pub fn apply(&self, digits: &str) -> String {
        template::apply_template(&self.format, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::{PhoneRule, RuleSet};

    #[test]
    fn rule_set_flags_are_aggregated() {
        let mut intl = PhoneRule::new(0, 9, 1, "#");
        intl.other_flag = 0b01;
        let mut trunk = PhoneRule::new(0, 9, 1, "#");
        trunk.other_flag = 0b10;

        let set = RuleSet::new(1, vec![PhoneRule::new(0, 9, 1, "#"), intl.clone()]);
        assert!(set.has_rule_with_intl_prefix);
        assert!(!set.has_rule_with_trunk_prefix);

        let set = RuleSet::new(1, vec![trunk, intl]);
        assert!(set.has_rule_with_intl_prefix);
        assert!(set.has_rule_with_trunk_prefix);
    }

    #[test]
    fn accepts_is_inclusive() {
        let rule = PhoneRule::new(200, 299, 3, "### ");
        assert!(rule.accepts(3, 200));
        assert!(rule.accepts(3, 299));
        assert!(!rule.accepts(3, 300));
        assert!(!rule.accepts(4, 250));
        assert!(!rule.accepts(3, 199));
    }
}
